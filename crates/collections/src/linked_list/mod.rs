use std::fmt;

use crate::boxnode;

/// Singly linked list of key/value nodes.
///
/// The list does not enforce key uniqueness, callers that need it
/// check with [`List::contains`] before inserting.
pub struct List<V> {
    head: Option<Box<Node<V>>>,
    len: usize,
}

impl<V> Default for List<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> List<V> {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a new node at the front of the list
    pub fn insert<S: Into<String>>(&mut self, key: S, value: V) {
        self.push_boxed(boxnode!(key, value));
    }

    fn push_boxed(&mut self, mut boxed: Box<Node<V>>) {
        boxed.next = self.head.take();
        self.head = Some(boxed);
        self.len += 1;
    }

    /// Unlinks the first node holding `key`, returning it
    pub fn remove(&mut self, key: &str) -> Option<Node<V>> {
        let pos = self.iter().position(|n| n.key == key)?;

        let mut link = &mut self.head;
        for _ in 0..pos {
            link = &mut link.as_mut()?.next;
        }

        let mut removed = link.take()?;
        *link = removed.next.take();
        self.len -= 1;

        Some(*removed)
    }

    /// Returns the first node holding `key`
    pub fn contains(&self, key: &str) -> Option<&Node<V>> {
        self.iter().find(|n| n.key == key)
    }

    pub fn contains_mut(&mut self, key: &str) -> Option<&mut Node<V>> {
        let mut curr = self.head.as_deref_mut();
        while let Some(node) = curr {
            if node.key == key {
                return Some(node);
            }
            curr = node.next.as_deref_mut();
        }
        None
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Node<V>> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            self.len -= 1;
            *node
        })
    }

    pub fn peek(&self) -> Option<&Node<V>> {
        self.head.as_deref()
    }

    pub fn peek_mut(&mut self) -> Option<&mut Node<V>> {
        self.head.as_deref_mut()
    }

    // [adapters]

    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self)
    }
}

impl<V> Drop for List<V> {
    fn drop(&mut self) {
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
            // node goes out of scope here, calling drop
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for List<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<V: fmt::Display> fmt::Display for List<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SLL [")?;
        for (i, node) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{node}")?;
        }
        write!(f, "]")
    }
}

impl<V> IntoIterator for List<V> {
    type Item = <IterOwn<V> as Iterator>::Item;
    type IntoIter = IterOwn<V>;

    fn into_iter(self) -> Self::IntoIter {
        IterOwn::new(self)
    }
}

impl<'a, V> IntoIterator for &'a List<V> {
    type Item = &'a Node<V>;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Node<V> {
    pub key: String,
    pub value: V,
    pub(crate) next: Option<Box<Node<V>>>,
}

impl<V> Node<V> {
    pub fn new<S: Into<String>>(key: S, value: V) -> Self {
        Self {
            key: key.into(),
            value,
            next: None,
        }
    }

    /// Splits the node into its key and value
    pub fn into_pair(self) -> (String, V) {
        (self.key, self.value)
    }
}

impl<V: PartialEq> PartialEq for Node<V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}
impl<V: Eq> Eq for Node<V> {}

impl<V: fmt::Debug> fmt::Debug for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {:?}>", self.key, self.value)
    }
}

impl<V: fmt::Display> fmt::Display for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

// [iterators]

pub struct Iter<'a, V> {
    current: Option<&'a Node<V>>,
    len: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current.take()?;
        self.current = node.next.as_deref();
        self.len -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, V> Iter<'a, V> {
    pub fn new(list: &'a List<V>) -> Self {
        Self {
            current: list.head.as_deref(),
            len: list.len,
        }
    }
}

pub struct IterOwn<V>(List<V>);

impl<V> Iterator for IterOwn<V> {
    type Item = Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<V> IterOwn<V> {
    pub fn new(list: List<V>) -> Self {
        Self(list)
    }
}
