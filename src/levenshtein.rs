// Levenshtein edit distance, used to rank alias candidates against a search.

/// Compute the Levenshtein edit distance between two strings: the minimum
/// number of single-character insertions, deletions, or substitutions (each
/// cost 1) needed to transform `a` into `b`.
///
/// Comparison is exact per character. No case folding happens here; the
/// search path is deliberately case-sensitive.
pub fn distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rolling rows instead of the full matrix.
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for (i, &ca) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_are_zero() {
        assert_eq!(distance("", ""), 0);
        assert_eq!(distance("Chernogorsk", "Chernogorsk"), 0);
    }

    #[test]
    fn test_empty_side_is_full_length() {
        assert_eq!(distance("", "abc"), 3);
        assert_eq!(distance("abc", ""), 3);
    }

    #[test]
    fn test_known_distances() {
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("flaw", "lawn"), 2);
        // Suffix completion: "cherno" -> "chernogorsk" is 5 inserts.
        assert_eq!(distance("cherno", "chernogorsk"), 5);
    }

    #[test]
    fn test_case_sensitive() {
        // No case folding: a case mismatch costs a substitution.
        assert_eq!(distance("cherno", "Cherno"), 1);
    }

    #[test]
    fn test_symmetric() {
        let pairs = [("kitten", "sitting"), ("Cherno", "chernogorsk"), ("", "x")];
        for (a, b) in pairs {
            assert_eq!(distance(a, b), distance(b, a));
        }
    }

    #[test]
    fn test_multibyte_counts_chars_not_bytes() {
        // Cyrillic spelling vs itself minus one char.
        assert_eq!(distance("Черно", "Черн"), 1);
    }
}
