use std::ops::Range;

use crate::util::char_range_to_str;

/// Palindrome radii around every position.
///
/// `odd[i]` is the number of odd palindromes centered at `i` (the longest
/// has length `2 * odd[i] - 1`); `even[i]` is the number of even
/// palindromes centered between `i - 1` and `i`.
#[derive(Clone, Debug)]
pub struct Radii {
    pub odd: Vec<usize>,
    pub even: Vec<usize>,
}

impl Radii {
    pub fn new<T: Eq>(s: &[T]) -> Self {
        let n = s.len();
        let mut odd = vec![0_usize; n];
        let mut even = vec![0_usize; n];

        // Rightmost palindrome seen so far, as the half-open window `[l, r)`.
        let (mut l, mut r) = (0_usize, 0_usize);
        for i in 0..n {
            let mut k = if i >= r {
                1
            } else {
                odd[l + r - 1 - i].min(r - i)
            };
            while i >= k && i + k < n && s[i - k] == s[i + k] {
                k += 1;
            }
            odd[i] = k;
            if i + k > r {
                l = i + 1 - k;
                r = i + k;
            }
        }

        let (mut l, mut r) = (0_usize, 0_usize);
        for i in 0..n {
            let mut k = if i >= r { 0 } else { even[l + r - i].min(r - i) };
            while i > k && i + k < n && s[i - k - 1] == s[i + k] {
                k += 1;
            }
            even[i] = k;
            if i + k > r {
                l = i - k;
                r = i + k;
            }
        }

        Self { odd, even }
    }
}

/// Linear-time counterpart of [`crate::longest_palindrome_range`].
///
/// Centers are visited in the same order as the expansion scan and only a
/// strictly longer palindrome replaces the current one, so both functions
/// return identical ranges.
pub fn longest_palindrome_range_manacher<T: Eq>(s: &[T]) -> Range<usize> {
    let n = s.len();
    if n == 0 {
        return 0..0;
    }

    let radii = Radii::new(s);
    let mut best = 0..1;
    for i in 0..n {
        let odd_len = 2 * radii.odd[i] - 1;
        let even_len = if i + 1 < n { 2 * radii.even[i + 1] } else { 0 };

        let (len, start) = if odd_len >= even_len {
            (odd_len, i + 1 - radii.odd[i])
        } else {
            (even_len, i + 1 - radii.even[i + 1])
        };
        if len > best.len() {
            best = start..start + len;
        }
    }
    best
}

pub fn longest_palindrome_bytes_manacher(s: &[u8]) -> &[u8] {
    &s[longest_palindrome_range_manacher(s)]
}

pub fn longest_palindrome_manacher(s: &str) -> &str {
    if s.is_ascii() {
        let range = longest_palindrome_range_manacher(s.as_bytes());
        return &s[range];
    }
    let chars = s.chars().collect::<Vec<_>>();
    char_range_to_str(s, longest_palindrome_range_manacher(&chars))
}
