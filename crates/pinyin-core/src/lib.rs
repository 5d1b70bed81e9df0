pub mod dict;
pub mod names;
pub mod settings;
pub mod template;
pub mod tone;
pub mod transliterate;
pub mod unicode;
