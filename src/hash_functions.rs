//! Sample hash functions for string keys.
//!
//! Both are deliberately simple: anagrams collide under
//! [`hash_function_1`], which makes it handy for exercising long chains.

/// Sum of the key's character code points
pub fn hash_function_1(key: &str) -> u64 {
    key.chars()
        .fold(0u64, |hash, c| hash.wrapping_add(c as u64))
}

/// Sum of each character code point weighted by its 1-based position
pub fn hash_function_2(key: &str) -> u64 {
    key.chars().enumerate().fold(0u64, |hash, (i, c)| {
        hash.wrapping_add((i as u64 + 1).wrapping_mul(c as u64))
    })
}

#[cfg(test)]
mod test {
    use super::{hash_function_1, hash_function_2};

    #[test]
    fn char_sum() {
        assert_eq!(hash_function_1(""), 0);
        assert_eq!(hash_function_1("a"), 97);
        // 'k' + 'e' + 'y' + '1'
        assert_eq!(hash_function_1("key1"), 107 + 101 + 121 + 49);
        assert_eq!(hash_function_1("ab"), hash_function_1("ba"));
    }

    #[test]
    fn weighted_char_sum() {
        assert_eq!(hash_function_2(""), 0);
        assert_eq!(hash_function_2("ab"), 97 + 2 * 98);
        assert_eq!(hash_function_2("ba"), 98 + 2 * 97);
        assert_ne!(hash_function_2("ab"), hash_function_2("ba"));
    }

    #[test]
    fn non_ascii() {
        assert_eq!(hash_function_1("é"), 0xE9);
        assert_eq!(hash_function_2("aé"), 97 + 2 * 0xE9);
    }
}
