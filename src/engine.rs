use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use pinyin_core::dict::{CharDictionary, Dictionary};
use pinyin_core::settings::settings;
use pinyin_core::transliterate::{self, TransformOptions};
use pinyin_core::{names, template};

use crate::EngineError;

/// Construct once, then call from any number of threads. Cloning shares the
/// dictionary.
#[derive(Clone)]
pub struct PinyinEngine {
    dict: Arc<dyn Dictionary>,
}

impl PinyinEngine {
    pub fn new(dict: Arc<dyn Dictionary>) -> Self {
        Self { dict }
    }

    /// Build from the raw contents of a pinyin table.
    pub fn from_bytes(blob: &[u8]) -> Result<Self, EngineError> {
        let dict = CharDictionary::from_bytes(blob)?;
        Ok(Self::new(Arc::new(dict)))
    }

    /// Load a pinyin table file.
    pub fn open(path: &Path) -> Result<Self, EngineError> {
        let dict = CharDictionary::open(path)?;
        debug!(path = %path.display(), records = dict.len(), "dictionary loaded");
        Ok(Self::new(Arc::new(dict)))
    }

    pub fn dictionary(&self) -> &dyn Dictionary {
        &*self.dict
    }

    /// Toned pinyin with the configured `[with_tone]` options.
    pub fn with_tone(&self, input: &str) -> String {
        self.with_tone_opts(input, &settings().with_tone)
    }

    pub fn with_tone_opts(&self, input: &str, opts: &TransformOptions) -> String {
        transliterate::transform_with_tone(&*self.dict, input, opts)
    }

    /// Untoned pinyin with the configured `[without_tone]` options.
    pub fn without_tone(&self, input: &str) -> String {
        self.without_tone_opts(input, &settings().without_tone)
    }

    pub fn without_tone_opts(&self, input: &str, opts: &TransformOptions) -> String {
        transliterate::transform_without_tone(&*self.dict, input, opts)
    }

    /// Syllable initials joined with the configured `[initials]` delimiter.
    pub fn ucwords(&self, input: &str) -> String {
        self.ucwords_with(input, &settings().initials.delimiter)
    }

    pub fn ucwords_with(&self, input: &str, delimiter: &str) -> String {
        transliterate::transform_ucwords(&*self.dict, input, delimiter)
    }

    pub fn first_ucwords(&self, input: &str) -> String {
        self.first_ucwords_with(input, &settings().initials.delimiter)
    }

    pub fn first_ucwords_with(&self, input: &str, delimiter: &str) -> String {
        transliterate::transform_first_ucwords(&*self.dict, input, delimiter)
    }

    pub fn first_character(&self, name: &str) -> String {
        names::get_first_character(name)
    }

    pub fn first_name(&self, name: &str) -> String {
        names::get_first_name(name)
    }

    pub fn inject(&self, text: &str, bindings: &HashMap<String, String>) -> String {
        template::inject(text, bindings)
    }
}
