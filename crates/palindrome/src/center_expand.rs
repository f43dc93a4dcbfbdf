use std::ops::Range;

/// Longest palindromic run of `s` by expanding around every center.
///
/// Returns the half-open index range of the first longest palindrome. The
/// empty slice yields `0..0`.
pub fn longest_palindrome_range<T: Eq>(s: &[T]) -> Range<usize> {
    if s.is_empty() {
        return 0..0;
    }

    // Inclusive bounds of the best palindrome so far.
    let mut start = 0_usize;
    let mut end = 0_usize;
    for i in 0..s.len() {
        let len_odd = expand(s, i, i);
        let len_even = expand(s, i, i + 1);
        let max_len = len_odd.max(len_even);

        // Strict improvement only, so the earliest palindrome keeps ties.
        if max_len > end - start + 1 {
            start = i - (max_len - 1) / 2;
            end = i + max_len / 2;
        }
    }
    start..end + 1
}

pub fn longest_palindrome_bytes(s: &[u8]) -> &[u8] {
    &s[longest_palindrome_range(s)]
}

/// Works on `char`s in place: lengths and ties are counted in characters,
/// and no copy of `s` is made.
pub fn longest_palindrome(s: &str) -> &str {
    if s.is_ascii() {
        let range = longest_palindrome_range(s.as_bytes());
        return &s[range];
    }

    let mut best = 0..0;
    let mut best_len = 0_usize;
    for (i, c) in s.char_indices() {
        let next = i + c.len_utf8();
        let odd = expand_str(s, i..next, 1);
        let even = expand_str(s, next..next, 0);
        let (range, len) = if odd.1 >= even.1 { odd } else { even };
        if len > best_len {
            best = range;
            best_len = len;
        }
    }
    &s[best]
}

/// Length of the longest palindrome whose innermost pair is `(left, right)`.
///
/// `left == right` is an odd center; `right == left + 1` an even one, which
/// yields 0 when the two elements differ or `right` is past the end.
#[inline]
fn expand<T: Eq>(s: &[T], mut left: usize, mut right: usize) -> usize {
    loop {
        if right >= s.len() || s[left] != s[right] {
            return right - left - 1;
        }
        if left == 0 {
            return right - left + 1;
        }
        left -= 1;
        right += 1;
    }
}

/// Grows the palindrome `s[bytes]`, `len` chars long, while the characters
/// on both sides match. Returns the final byte range and char length.
#[inline]
fn expand_str(s: &str, mut bytes: Range<usize>, mut len: usize) -> (Range<usize>, usize) {
    loop {
        let left = s[..bytes.start].chars().next_back();
        let right = s[bytes.end..].chars().next();
        match (left, right) {
            (Some(left), Some(right)) if left == right => {
                bytes.start -= left.len_utf8();
                bytes.end += right.len_utf8();
                len += 2;
            }
            _ => return (bytes, len),
        }
    }
}
