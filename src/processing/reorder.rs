//! Order-changing operations.

/// Returns a new vector with the elements of `data` in reverse order.
pub fn reverse<T: Clone>(data: &[T]) -> Vec<T> {
    data.iter().rev().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::reverse;

    #[test]
    fn reverse_odd_and_even_lengths() {
        assert_eq!(reverse(&[1, 2, 3]), vec![3, 2, 1]);
        assert_eq!(reverse(&[1, 2, 3, 4]), vec![4, 3, 2, 1]);
        assert_eq!(reverse(&["only"]), vec!["only"]);
        assert!(reverse(&Vec::<u8>::new()).is_empty());
    }

    #[test]
    fn reverse_leaves_input_untouched() {
        let data = vec!["a".to_string(), "b".to_string()];
        let out = reverse(&data);
        assert_eq!(out, vec!["b", "a"]);
        assert_eq!(data, vec!["a", "b"]);
    }
}
