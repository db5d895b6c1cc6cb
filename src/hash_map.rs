use std::fmt;

use collections::{DynamicArray, List, linked_list};
use log::{debug, trace};

use crate::DEFAULT_CAPACITY;

/// Maps a key to a bucket-independent hash, the map reduces it modulo its capacity
pub type HashFunction = Box<dyn Fn(&str) -> u64>;

/// Separate chaining hash map with string keys.
///
/// Buckets are singly linked lists stored in a [`DynamicArray`]
/// of exactly `capacity` slots. The map never grows on its own,
/// rehashing only happens through [`HashMap::resize_table`].
pub struct HashMap<V> {
    buckets: DynamicArray<List<V>>,
    capacity: usize,
    size: usize,
    hash_function: HashFunction,
}

impl<V> HashMap<V> {
    /// Creates a new `HashMap` with `capacity` many empty buckets
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero, since every key
    /// has to land in some bucket
    pub fn new<F>(capacity: usize, hash_function: F) -> Self
    where
        F: Fn(&str) -> u64 + 'static,
    {
        assert!(capacity >= 1, "HashMap capacity must be at least 1");

        Self {
            buckets: Self::new_buckets(capacity),
            capacity,
            size: 0,
            hash_function: Box::new(hash_function),
        }
    }

    /// Shorthand for `HashMap::new(DEFAULT_CAPACITY, hash_function)`
    pub fn with_default_capacity<F>(hash_function: F) -> Self
    where
        F: Fn(&str) -> u64 + 'static,
    {
        Self::new(DEFAULT_CAPACITY, hash_function)
    }

    /// Returns the number of keys stored in the map
    pub fn size(&self) -> usize {
        self.size
    }

    /// Shorthand for `self.size() == 0`
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inserts a key-value pair, replacing the value if `key` is already present
    pub fn put(&mut self, key: &str, value: V) {
        let i = self.idx(key);
        let chain = &mut self.buckets[i];

        // an existing node is unlinked and a fresh one pushed,
        // so the key may move inside its chain
        let replaced = chain.remove(key).is_some();
        chain.insert(key, value);

        if !replaced {
            self.size += 1;
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.chain(key).contains(key).map(|node| &node.value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let i = self.idx(key);
        self.buckets[i].contains_mut(key).map(|node| &mut node.value)
    }

    /// Removes `key` from the map, returning its value if it was present
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let i = self.idx(key);
        let node = self.buckets[i].remove(key)?;
        self.size -= 1;

        Some(node.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.chain(key).contains(key).is_some()
    }

    /// Empties every bucket, keeping the capacity
    pub fn clear(&mut self) {
        trace!(target: "clear", "dropping {} keys from {} buckets", self.size, self.capacity);
        for chain in self.buckets.iter_mut() {
            *chain = List::new();
        }
        self.size = 0;
    }

    /// Returns the number of buckets holding no keys
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|chain| chain.is_empty()).count()
    }

    /// Returns the load factor, `size / capacity`
    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.capacity as f64
    }

    /// Rebuilds the map with `new_capacity` buckets, rehashing every key
    ///
    /// Capacities below 1 are ignored and leave the map untouched.
    pub fn resize_table(&mut self, new_capacity: i64) {
        let new_capacity = match usize::try_from(new_capacity) {
            Ok(cap) if cap >= 1 => cap,
            _ => {
                debug!(target: "resize_table", "ignoring invalid capacity {new_capacity}");
                return;
            }
        };

        trace!(
            target: "resize_table",
            "rehashing {} keys: {} -> {} buckets",
            self.size,
            self.capacity,
            new_capacity
        );

        let old_buckets = std::mem::replace(&mut self.buckets, Self::new_buckets(new_capacity));
        self.capacity = new_capacity;
        self.size = 0;

        for chain in old_buckets {
            for node in chain {
                let (key, value) = node.into_pair();
                self.put(&key, value);
            }
        }
    }

    /// Returns every key in the map, in bucket order
    pub fn get_keys(&self) -> DynamicArray<String> {
        self.iter().map(|(key, _)| key.to_string()).collect()
    }

    // [adapters]

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            map: self,
            chain: self.buckets[0].iter(),
            bucket_idx: 0,
        }
    }

    // [private]

    fn new_buckets(capacity: usize) -> DynamicArray<List<V>> {
        DynamicArray::from_fn(capacity, List::new)
    }

    fn idx(&self, key: &str) -> usize {
        ((self.hash_function)(key) % self.capacity as u64) as usize
    }

    fn chain(&self, key: &str) -> &List<V> {
        &self.buckets[self.idx(key)]
    }
}

impl<V: fmt::Display> fmt::Display for HashMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chain) in self.buckets.iter().enumerate() {
            writeln!(f, "{i}: {chain}")?;
        }
        Ok(())
    }
}

impl<V: fmt::Debug> fmt::Debug for HashMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashMap")
            .field("capacity", &self.capacity)
            .field("size", &self.size)
            .field("buckets", &self.buckets)
            .finish_non_exhaustive()
    }
}

impl<'a, V> IntoIterator for &'a HashMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a, V> {
    map: &'a HashMap<V>,
    chain: linked_list::Iter<'a, V>,
    bucket_idx: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.chain.next() {
                return Some((node.key.as_str(), &node.value));
            }
            if self.bucket_idx + 1 >= self.map.capacity {
                return None;
            }
            self.bucket_idx += 1;
            self.chain = self.map.buckets[self.bucket_idx].iter();
        }
    }
}
