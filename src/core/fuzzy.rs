//! Edit-distance matching for search
//!
//! Classic Levenshtein distance over Unicode scalar values, computed with the full
//! `(len(a) + 1) x (len(b) + 1)` dynamic-programming table.

/// Minimum number of single-character inserts, deletes and substitutions that turn
/// `a` into `b`
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let substitution = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            table[i][j] = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + substitution);
        }
    }

    table[a.len()][b.len()]
}

/// Whether `candidate` is within `max_distance` edits of `query`
pub fn is_fuzzy_match(candidate: &str, query: &str, max_distance: usize) -> bool {
    levenshtein_distance(candidate, query) <= max_distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("kitten", "sitting", 3)]
    #[case("flaw", "lawn", 2)]
    #[case("Toyota", "Toyta", 1)]
    #[case("Audi", "Adi", 1)]
    #[case("Corsa", "Corsa", 0)]
    #[case("", "", 0)]
    #[case("Škoda", "Skoda", 1)]
    fn test_known_distances(#[case] a: &str, #[case] b: &str, #[case] expected: usize) {
        assert_eq!(levenshtein_distance(a, b), expected);
    }

    #[rstest]
    #[case("")]
    #[case("Q8")]
    #[case("Vauxhall")]
    fn test_identity_and_empty(#[case] s: &str) {
        assert_eq!(levenshtein_distance(s, s), 0);
        assert_eq!(levenshtein_distance(s, ""), s.chars().count());
        assert_eq!(levenshtein_distance("", s), s.chars().count());
    }

    #[test]
    fn test_symmetry_and_triangle_inequality() {
        let words = ["Ford", "Fiat", "Focus", "Transit", "Tourneo", ""];
        for a in words {
            for b in words {
                assert_eq!(levenshtein_distance(a, b), levenshtein_distance(b, a));
                for c in words {
                    assert!(
                        levenshtein_distance(a, c)
                            <= levenshtein_distance(a, b) + levenshtein_distance(b, c),
                        "triangle inequality failed for {a:?}, {b:?}, {c:?}"
                    );
                }
            }
        }
    }

    #[rstest]
    #[case("Mercedes", "Mercedez", 2, true)]
    #[case("Mercedes", "Mercedez", 0, false)]
    #[case("Christina", "Kristina", 2, true)]
    #[case("Christina", "Tina", 2, false)]
    fn test_is_fuzzy_match(
        #[case] candidate: &str,
        #[case] query: &str,
        #[case] max_distance: usize,
        #[case] expected: bool,
    ) {
        assert_eq!(is_fuzzy_match(candidate, query, max_distance), expected);
    }
}
