use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Invalid color format: {0:?} (expected #rrggbb)")]
    InvalidColorFormat(String),
    #[error("Unknown color slot: {0}")]
    UnknownColorSlot(String),
    #[error("System theme '{0}' cannot be renamed")]
    SystemThemeLocked(String),
    #[error("Invalid theme name: {0:?}")]
    InvalidThemeName(String),
}

pub type Result<T> = std::result::Result<T, ThemeError>;
