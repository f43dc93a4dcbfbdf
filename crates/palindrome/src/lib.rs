mod center_expand;
mod manacher;
mod util;

pub use center_expand::{longest_palindrome, longest_palindrome_bytes, longest_palindrome_range};
pub use manacher::{
    Radii, longest_palindrome_bytes_manacher, longest_palindrome_manacher,
    longest_palindrome_range_manacher,
};
pub use util::is_palindrome;
