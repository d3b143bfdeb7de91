//! Occurrence counting for categorical values

use indexmap::IndexMap;

/// Counts occurrences of each distinct value, most frequent first.
///
/// Ties are resolved by first appearance in the input, so the result is
/// deterministic for a fixed input order. Every input item contributes
/// exactly one count; the sum of the returned counts equals the input
/// length.
///
/// # Examples
///
/// ```
/// use cohort_stats::frequency::count_values;
///
/// let counts = count_values([
///     "Teamwork".to_owned(),
///     "Focus".to_owned(),
///     "Teamwork".to_owned(),
/// ]);
/// assert_eq!(counts, vec![("Teamwork".to_owned(), 2), ("Focus".to_owned(), 1)]);
/// ```
#[must_use]
pub fn count_values<I>(values: I) -> Vec<(String, u64)>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: IndexMap<String, u64> = IndexMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut pairs: Vec<(String, u64)> = counts.into_iter().collect();
    // Stable sort keeps first-appearance order within equal counts.
    pairs.sort_by(|a, b| b.1.cmp(&a.1));
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_owned()).collect()
    }

    #[test]
    fn empty_input_yields_empty_counts() {
        assert!(count_values([]).is_empty());
    }

    #[test]
    fn counts_are_descending() {
        let counts = count_values(owned(&["a", "b", "b", "c", "b", "c"]));
        assert_eq!(
            counts,
            vec![
                ("b".to_owned(), 3),
                ("c".to_owned(), 2),
                ("a".to_owned(), 1)
            ]
        );
    }

    #[test]
    fn ties_keep_first_appearance_order() {
        let counts = count_values(owned(&["z", "a", "z", "a"]));
        assert_eq!(counts[0].0, "z");
        assert_eq!(counts[1].0, "a");
    }

    #[test]
    fn total_count_equals_input_length() {
        let input = owned(&["x", "y", "x", "z", "x", "y"]);
        let total: u64 = count_values(input.clone()).iter().map(|(_, c)| c).sum();
        assert_eq!(total, input.len() as u64);
    }
}
