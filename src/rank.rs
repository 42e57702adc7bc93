/// Truncate a score-descending list to its `n` best items, keeping every
/// item that ties the n-th best score. The caller must have sorted
/// `items` by `score` descending; ties then survive in their original
/// order. With `n == 0` everything is dropped
pub fn truncate_ties<T, F>(items: &mut Vec<T>, n: usize, score: F)
where
    F: Fn(&T) -> usize,
{
    debug_assert!(items.windows(2).all(|w| score(&w[0]) >= score(&w[1])));
    if items.len() <= n {
        return;
    }
    if n == 0 {
        items.clear();
        return;
    }
    let cutoff = score(&items[n - 1]);
    let end = items.partition_point(|item| score(item) >= cutoff);
    items.truncate(end);
}
