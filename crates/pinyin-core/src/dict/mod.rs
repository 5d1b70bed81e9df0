//! Character → pinyin dictionary storage.
//!
//! `CharDictionary` holds the toned reading of every CJK ideograph found in a
//! comma-delimited pinyin table (`,中zhōng,国guó,…,`). The table is parsed
//! once at construction and never mutated afterwards.

mod char_dict;
#[cfg(test)]
mod tests;

pub use char_dict::CharDictionary;

use std::io;
use std::str::Utf8Error;

/// Error type for building a dictionary from raw bytes or a file.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("dictionary is not valid UTF-8: {0}")]
    Load(#[from] Utf8Error),
}

pub trait Dictionary: Send + Sync {
    /// Toned pinyin recorded for `c`, or `None` when there is no record.
    ///
    /// Callers only ask about U+4E00..U+9FA5; the transliteration functions
    /// apply that range check themselves.
    fn lookup(&self, c: char) -> Option<&str>;
}
