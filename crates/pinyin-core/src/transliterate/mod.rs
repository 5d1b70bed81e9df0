//! Hanzi-to-pinyin transliteration.
//!
//! Every character is looked up on its own: there is no word segmentation, so
//! polyphonic characters always get the reading recorded first in the
//! dictionary. Pipeline for initials: toned pinyin → tone stripping →
//! capitalise each syllable → keep capitals only.

#[cfg(test)]
mod tests;

use serde::Deserialize;
use tracing::{debug, debug_span};

use crate::dict::Dictionary;
use crate::tone::strip_tones;
use crate::unicode::is_hanzi;

/// Per-call parameters of a transformation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransformOptions {
    /// Appended after every transliterated character, including the last.
    pub delimiter: String,
    /// Drop characters without a reading instead of copying them through.
    pub ignore_outside: bool,
}

impl TransformOptions {
    pub fn new(delimiter: impl Into<String>, ignore_outside: bool) -> Self {
        Self {
            delimiter: delimiter.into(),
            ignore_outside,
        }
    }

    /// Defaults for toned output: space-separated, non-Chinese kept.
    pub fn with_tone() -> Self {
        Self::new(" ", false)
    }

    /// Defaults for untoned output: no separator, non-Chinese dropped.
    pub fn without_tone() -> Self {
        Self::new("", true)
    }
}

/// Transliterate `input` into toned pinyin.
///
/// Each ideograph with a dictionary reading becomes `reading + delimiter`.
/// Anything else (ASCII, punctuation, ideographs missing from the
/// dictionary) is copied unchanged, or dropped when `ignore_outside` is set.
pub fn transform_with_tone(dict: &dyn Dictionary, input: &str, opts: &TransformOptions) -> String {
    let _span = debug_span!("transform_with_tone", input_len = input.len()).entered();

    let mut out = String::with_capacity(input.len() * 2);
    let mut matched = 0usize;
    let mut dropped = 0usize;
    for c in input.chars() {
        let reading = if is_hanzi(c) { dict.lookup(c) } else { None };
        match reading {
            Some(reading) => {
                out.push_str(reading);
                out.push_str(&opts.delimiter);
                matched += 1;
            }
            None if opts.ignore_outside => dropped += 1,
            None => out.push(c),
        }
    }

    debug!(matched, dropped);
    out
}

/// Transliterate `input` into pinyin without tone marks (`ü` becomes `v`).
///
/// Tone stripping applies to the whole result, so toned vowels copied through
/// from the input are stripped as well.
pub fn transform_without_tone(
    dict: &dyn Dictionary,
    input: &str,
    opts: &TransformOptions,
) -> String {
    strip_tones(&transform_with_tone(dict, input, opts))
}

/// Initials of the pinyin syllables of `input`, e.g. `中国` → `ZG`.
///
/// Non-Chinese characters never contribute. A non-empty `delimiter` is placed
/// between consecutive initials.
pub fn transform_ucwords(dict: &dyn Dictionary, input: &str, delimiter: &str) -> String {
    let romanized = transform_without_tone(dict, input, &TransformOptions::new(" ", true));
    initials(&romanized, delimiter)
}

/// Initial of the first character of `input` only.
pub fn transform_first_ucwords(dict: &dyn Dictionary, input: &str, delimiter: &str) -> String {
    match input.chars().next() {
        Some(first) => transform_ucwords(dict, &input[..first.len_utf8()], delimiter),
        None => String::new(),
    }
}

fn is_word_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0B' | '\x0C')
}

/// Capitalise the first letter of every whitespace-separated word, then keep
/// only `A-Z`.
fn initials(romanized: &str, delimiter: &str) -> String {
    let mut out = String::new();
    let mut word_start = true;
    for c in romanized.chars() {
        let c = if word_start { c.to_ascii_uppercase() } else { c };
        word_start = is_word_separator(c);
        if !c.is_ascii_uppercase() {
            continue;
        }
        if !out.is_empty() {
            out.push_str(delimiter);
        }
        out.push(c);
    }
    out
}
