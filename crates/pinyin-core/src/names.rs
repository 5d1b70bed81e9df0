//! Initials and given-name extraction for personal names.

use crate::unicode::is_hanzi_name;

/// Number of trailing characters kept from a Chinese name.
const GIVEN_NAME_CHARS: usize = 2;

/// Initials of a space-separated Latin-script name: `John Smith` → `JS`.
///
/// Empty tokens from leading, trailing or repeated spaces contribute nothing.
/// Only ASCII letters are uppercased.
pub fn get_first_character(name: &str) -> String {
    name.split(' ')
        .filter_map(|token| token.chars().next())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Short form of a name.
///
/// An all-hanzi name keeps its last two characters (`欧阳锋` → `阳锋`), or the
/// whole name when shorter. Any other name is reduced to its initials.
pub fn get_first_name(name: &str) -> String {
    if !is_hanzi_name(name) {
        return get_first_character(name);
    }
    let count = name.chars().count();
    name.chars()
        .skip(count.saturating_sub(GIVEN_NAME_CHARS))
        .collect()
}
