/// `1 − |a − b| / max(a, b)`, or 1.0 when both lengths are zero.
pub fn length_similarity(len_a: usize, len_b: usize) -> f64 {
    let max_len = len_a.max(len_b);
    if max_len == 0 {
        return 1.0;
    }
    1.0 - len_a.abs_diff(len_b) as f64 / max_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_lengths() {
        assert_eq!(length_similarity(10, 10), 1.0);
        assert_eq!(length_similarity(0, 0), 1.0);
    }

    #[test]
    fn one_empty() {
        assert_eq!(length_similarity(0, 5), 0.0);
    }

    #[test]
    fn ratio() {
        assert_eq!(length_similarity(50, 100), 0.5);
        assert_eq!(length_similarity(100, 50), 0.5);
    }
}
