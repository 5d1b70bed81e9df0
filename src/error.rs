use pinyin_core::dict::DictError;
use pinyin_core::settings::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("dictionary error: {0}")]
    Dict(#[from] DictError),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
}
