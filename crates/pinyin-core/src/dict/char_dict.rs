use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use memmap2::Mmap;
use tracing::{debug, debug_span};

use super::{DictError, Dictionary};
use crate::unicode::is_hanzi;

pub struct CharDictionary {
    readings: HashMap<char, String>,
}

impl CharDictionary {
    /// Parse a comma-delimited pinyin table.
    ///
    /// A record is the text between two consecutive commas: the first char is
    /// the key, the rest (possibly empty) is the toned reading. The first
    /// record for a key wins. Records whose reading spans a line break are
    /// skipped, so a later record for the same key can still match.
    pub fn parse(text: &str) -> Self {
        let _span = debug_span!("parse_dictionary", bytes = text.len()).entered();

        let mut readings = HashMap::new();
        // Text before the first comma is never a record, and neither is the
        // piece after the last comma.
        let mut pieces = text.split(',').skip(1).peekable();
        while let Some(record) = pieces.next() {
            if pieces.peek().is_none() {
                break;
            }
            let mut chars = record.chars();
            let Some(key) = chars.next() else {
                continue;
            };
            if !is_hanzi(key) {
                continue;
            }
            let reading = chars.as_str();
            if reading.contains('\n') {
                continue;
            }
            readings.entry(key).or_insert_with(|| reading.to_string());
        }

        debug!(records = readings.len());
        Self { readings }
    }

    /// Build from raw bytes. Fails only if the blob is not valid UTF-8; an
    /// empty blob yields an empty dictionary.
    pub fn from_bytes(data: &[u8]) -> Result<Self, DictError> {
        let text = std::str::from_utf8(data)?;
        Ok(Self::parse(text))
    }

    /// Build from `(character, reading)` pairs. The first pair for a character
    /// wins; characters outside U+4E00..U+9FA5 are ignored.
    pub fn from_entries(entries: impl IntoIterator<Item = (char, String)>) -> Self {
        let mut readings = HashMap::new();
        for (key, reading) in entries {
            if is_hanzi(key) {
                readings.entry(key).or_insert(reading);
            }
        }
        Self { readings }
    }

    /// Open a dictionary file through a read-only memory map.
    ///
    /// The table is parsed straight out of the mapped region, then the mapping
    /// is dropped.
    pub fn open(path: &Path) -> Result<Self, DictError> {
        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            return Ok(Self::parse(""));
        }
        // SAFETY: The file is opened read-only and the mapping is immutable.
        // The Mmap is dropped after parsing completes below.
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_bytes(&mmap)
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// All `(character, reading)` pairs, sorted by code point.
    pub fn entries(&self) -> Vec<(char, &str)> {
        let mut out: Vec<(char, &str)> = self
            .readings
            .iter()
            .map(|(&c, r)| (c, r.as_str()))
            .collect();
        out.sort_unstable_by_key(|&(c, _)| c);
        out
    }
}

impl Dictionary for CharDictionary {
    fn lookup(&self, c: char) -> Option<&str> {
        self.readings.get(&c).map(String::as_str)
    }
}
