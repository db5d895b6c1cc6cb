use std::{
    fmt,
    ops::{Index, IndexMut},
};

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArrayError {
    #[error("Index {index} out of bounds for array of length {length}")]
    IndexOutOfBounds { index: usize, length: usize },
}

/// Index-addressable ordered sequence with amortized growth.
///
/// Growth is left to the backing `Vec`, this type only adds the
/// checked accessors the hash map relies on.
#[derive(Clone, PartialEq, Eq)]
pub struct DynamicArray<T> {
    data: Vec<T>,
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DynamicArray<T> {
    /// Creates a new, empty array
    ///
    /// # Note
    ///
    /// This is a `const` function since it does not allocate
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            data: Vec::with_capacity(cap),
        }
    }

    /// Builds an array of `len` items, each produced by `f`
    pub fn from_fn<F: FnMut() -> T>(len: usize, mut f: F) -> Self {
        (0..len).map(|_| f()).collect()
    }

    pub fn append(&mut self, item: T) {
        self.data.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    pub fn get_at_index(&self, index: usize) -> Result<&T, ArrayError> {
        let length = self.length();
        self.data
            .get(index)
            .ok_or(ArrayError::IndexOutOfBounds { index, length })
    }

    pub fn get_at_index_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let length = self.length();
        self.data
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfBounds { index, length })
    }

    /// Overwrites the item at `index`, dropping the previous one
    pub fn set_at_index(&mut self, index: usize, item: T) -> Result<(), ArrayError> {
        *self.get_at_index_mut(index)? = item;
        Ok(())
    }

    pub fn length(&self) -> usize {
        self.data.len()
    }

    /// Shorthand for `self.length() == 0`
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    // [adapters]

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::{ArrayError, DynamicArray};

    #[test]
    fn append() {
        let mut arr = DynamicArray::new();
        assert!(arr.is_empty());

        for i in 0..100 {
            arr.append(i);
        }

        assert_eq!(arr.length(), 100);
        assert_eq!(arr.get_at_index(42), Ok(&42));
        assert_eq!(arr[99], 99);
        assert_eq!(arr.pop(), Some(99));
        assert_eq!(arr.length(), 99);
    }

    #[test]
    fn out_of_bounds() {
        let mut arr: DynamicArray<i32> = DynamicArray::from_fn(3, || 0);

        assert_eq!(
            arr.get_at_index(3),
            Err(ArrayError::IndexOutOfBounds {
                index: 3,
                length: 3
            })
        );
        assert!(arr.get_at_index_mut(10).is_err());
        assert!(arr.set_at_index(3, 1).is_err());
        assert_eq!(
            ArrayError::IndexOutOfBounds {
                index: 3,
                length: 3
            }
            .to_string(),
            "Index 3 out of bounds for array of length 3"
        );
    }

    #[test]
    #[should_panic]
    fn index_panics() {
        let arr: DynamicArray<i32> = DynamicArray::new();
        let _ = arr[0];
    }

    #[test]
    fn set_at_index() {
        let mut arr: DynamicArray<String> = DynamicArray::from_fn(3, String::new);

        arr.set_at_index(1, "middle".into()).unwrap();
        *arr.get_at_index_mut(2).unwrap() = "last".into();

        assert_eq!(arr.as_slice(), ["", "middle", "last"]);
    }

    #[test]
    fn iter() {
        let arr: DynamicArray<usize> = (0..5).collect();

        let doubled: Vec<usize> = arr.iter().map(|n| n * 2).collect();
        assert_eq!(doubled, [0, 2, 4, 6, 8]);

        let mut sum = 0;
        for n in &arr {
            sum += n;
        }
        assert_eq!(sum, 10);

        let owned: Vec<usize> = arr.into_iter().collect();
        assert_eq!(owned, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn display() {
        let arr: DynamicArray<&str> = ["100", "110", "120"].into_iter().collect();
        assert_eq!(arr.to_string(), "[100, 110, 120]");
        assert_eq!(format!("{arr:?}"), r#"["100", "110", "120"]"#);
        assert_eq!(DynamicArray::<u8>::new().to_string(), "[]");
    }
}
