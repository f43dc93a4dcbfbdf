use rustc_hash::FxHashMap;

/// Indices `(i, j)`, `i < j`, of two elements summing to `target`.
///
/// Scans once, remembering the first index of every value; the pair found is
/// the one whose second index is smallest. An element is never paired with
/// itself.
pub fn two_sum(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen = FxHashMap::with_capacity_and_hasher(nums.len(), Default::default());
    for (j, &x) in nums.iter().enumerate() {
        if let Some(&i) = target.checked_sub(x).and_then(|need| seen.get(&need)) {
            return Some((i, j));
        }
        seen.entry(x).or_insert(j);
    }
    None
}

/// Quadratic scan, same answer as [`two_sum`].
pub fn two_sum_naive(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    (0..nums.len()).find_map(|j| {
        (0..j)
            .find(|&i| nums[i].checked_add(nums[j]) == Some(target))
            .map(|i| (i, j))
    })
}
