use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl From<toml::ser::Error> for LoaderError {
    fn from(err: toml::ser::Error) -> Self {
        LoaderError::Settings(err.to_string())
    }
}

impl From<toml::de::Error> for LoaderError {
    fn from(err: toml::de::Error) -> Self {
        LoaderError::Settings(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LoaderError>;
