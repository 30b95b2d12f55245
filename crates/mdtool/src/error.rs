use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Unable to determine the home directory")]
    NoHomeDir,

    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),
}
