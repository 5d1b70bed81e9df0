//! Character-level Unicode classification for Chinese text.

/// Check the basic CJK Unified Ideographs range covered by the dictionary
/// (U+4E00..U+9FA5). The block itself extends to U+9FFF, but the later
/// additions never appear in the pinyin table, so they are treated as
/// non-Chinese.
pub fn is_hanzi(c: char) -> bool {
    ('\u{4E00}'..='\u{9FA5}').contains(&c)
}

/// Check if a string is written entirely in Chinese ideographs.
///
/// An empty string is not a Chinese name.
pub fn is_hanzi_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_hanzi)
}
