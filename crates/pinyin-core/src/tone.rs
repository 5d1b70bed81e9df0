//! Tone-mark stripping for pinyin syllables.

/// Toned vowel → untoned ASCII letter. `ü` maps to `v`, the usual ASCII
/// spelling in pinyin input (`lv`, `nv`).
const DIACRITICS: [(char, char); 25] = [
    ('ā', 'a'),
    ('á', 'a'),
    ('ǎ', 'a'),
    ('à', 'a'),
    ('ō', 'o'),
    ('ó', 'o'),
    ('ǒ', 'o'),
    ('ò', 'o'),
    ('ē', 'e'),
    ('é', 'e'),
    ('ě', 'e'),
    ('è', 'e'),
    ('ī', 'i'),
    ('í', 'i'),
    ('ǐ', 'i'),
    ('ì', 'i'),
    ('ū', 'u'),
    ('ú', 'u'),
    ('ǔ', 'u'),
    ('ù', 'u'),
    ('ǖ', 'v'),
    ('ǘ', 'v'),
    ('ǚ', 'v'),
    ('ǜ', 'v'),
    ('ü', 'v'),
];

/// Returns the untoned ASCII letter for a toned vowel, or `None` if `c` is
/// not in the table.
pub fn untoned(c: char) -> Option<char> {
    DIACRITICS
        .iter()
        .find_map(|&(toned, plain)| (toned == c).then_some(plain))
}

/// Replace every toned vowel with its ASCII letter.
/// All other characters are passed through unchanged.
pub fn strip_tones(s: &str) -> String {
    s.chars().map(|c| untoned(c).unwrap_or(c)).collect()
}
