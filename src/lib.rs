//! Chinese-to-pinyin transliteration engine.
//!
//! `PinyinEngine` owns a shared, immutable character dictionary and exposes
//! the `pinyin_core` transformations with defaults taken from the settings
//! TOML. The core crate is re-exported for callers that want explicit options.

mod engine;
mod error;
pub mod trace_init;

use std::path::Path;

pub use engine::PinyinEngine;
pub use error::EngineError;
pub use pinyin_core::{dict, names, settings, template, tone, transliterate, unicode};

/// Load a settings file. Must run before the first transformation that uses
/// configured defaults; afterwards it fails with `AlreadyInitialized`.
pub fn load_settings(path: &Path) -> Result<(), EngineError> {
    let content = std::fs::read_to_string(path).map_err(|e| EngineError::Io {
        msg: format!("{}: {e}", path.display()),
    })?;
    settings::init_custom(content)?;
    Ok(())
}
