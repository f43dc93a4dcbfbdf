use std::ops::Range;

/// Maps a range of `char` positions in `s` to the matching `&str` slice.
pub(crate) fn char_range_to_str(s: &str, range: Range<usize>) -> &str {
    let mut offsets = s.char_indices().map(|(offset, _)| offset).skip(range.start);
    let start = offsets.next().unwrap_or(s.len());
    let end = if range.is_empty() {
        start
    } else {
        offsets.nth(range.len() - 1).unwrap_or(s.len())
    };
    &s[start..end]
}

#[inline]
pub fn is_palindrome<T: Eq>(s: &[T]) -> bool {
    s.iter().eq(s.iter().rev())
}
