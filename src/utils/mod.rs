pub mod constants;
pub mod string_utils;

pub use constants::*;
pub use string_utils::{collapse_whitespace, plain_text, truncate_at_word_boundary, word_count};
