// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Svg(String),
    Config(String),
    Content(ContentError),
}

/// Specific error types for showcase content loading issues.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone)]
pub enum ContentError {
    /// An embedded asset referenced by the built-in showcase is absent
    MissingAsset(String),

    /// Image data exists but could not be decoded
    Decode(String),

    /// A content directory was given but holds no usable collections
    EmptyDirectory(String),
}

impl ContentError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ContentError::MissingAsset(_) => "error-content-missing-asset",
            ContentError::Decode(_) => "error-content-decode",
            ContentError::EmptyDirectory(_) => "error-content-empty-directory",
        }
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::MissingAsset(name) => write!(f, "Missing embedded asset: {}", name),
            ContentError::Decode(msg) => write!(f, "Image decode failed: {}", msg),
            ContentError::EmptyDirectory(path) => {
                write!(f, "No collections found in: {}", path)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Content(e) => write!(f, "Content Error: {}", e),
        }
    }
}

impl From<ContentError> for Error {
    fn from(err: ContentError) -> Self {
        Error::Content(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Svg(s)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
