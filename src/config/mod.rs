//! Persisted drop zone settings.
//!
//! Settings live in `config.toml` inside the `.dropzone` application
//! directory. Missing files and missing keys fall back to defaults, so older
//! or hand-written configs keep loading.

mod defaults;
mod errors;
mod io;
mod types;

pub use errors::ConfigError;
pub use io::{config_path, load_from_path, load_or_default, save, save_to_path};
pub use types::{DropZoneConfig, HighlightSettings};

/// Default filename used to store the configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";
