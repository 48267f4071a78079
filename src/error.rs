// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
    Network(String),
}

/// Specific reasons a gallery catalog could not be loaded.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Catalog file could not be read.
    Unreadable(String),

    /// Catalog file is not valid TOML or has the wrong shape.
    Malformed(String),

    /// Catalog parsed but contains no images.
    Empty,

    /// Two entries share the same image identifier.
    DuplicateId(u32),

    /// A category key is empty or reserved (`all`).
    InvalidCategory(String),

    /// Two categories share the same key.
    DuplicateCategory(String),
}

impl CatalogError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CatalogError::Unreadable(_) => "error-catalog-unreadable",
            CatalogError::Malformed(_) => "error-catalog-malformed",
            CatalogError::Empty => "error-catalog-empty",
            CatalogError::DuplicateId(_) => "error-catalog-duplicate-id",
            CatalogError::InvalidCategory(_) => "error-catalog-invalid-category",
            CatalogError::DuplicateCategory(_) => "error-catalog-duplicate-category",
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Unreadable(msg) => write!(f, "Catalog unreadable: {}", msg),
            CatalogError::Malformed(msg) => write!(f, "Catalog malformed: {}", msg),
            CatalogError::Empty => write!(f, "Catalog contains no images"),
            CatalogError::DuplicateId(id) => write!(f, "Duplicate image id: {}", id),
            CatalogError::InvalidCategory(key) => write!(f, "Invalid category key: '{}'", key),
            CatalogError::DuplicateCategory(key) => {
                write!(f, "Duplicate category key: '{}'", key)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
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

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn catalog_error_wraps_into_error() {
        let err: Error = CatalogError::DuplicateId(1015).into();
        assert_eq!(format!("{}", err), "Catalog Error: Duplicate image id: 1015");
    }

    #[test]
    fn catalog_error_i18n_keys() {
        assert_eq!(CatalogError::Empty.i18n_key(), "error-catalog-empty");
        assert_eq!(
            CatalogError::Malformed(String::new()).i18n_key(),
            "error-catalog-malformed"
        );
        assert_eq!(
            CatalogError::InvalidCategory("all".into()).i18n_key(),
            "error-catalog-invalid-category"
        );
        assert_eq!(
            CatalogError::DuplicateCategory("city".into()).i18n_key(),
            "error-catalog-duplicate-category"
        );
    }

    #[test]
    fn network_error_display() {
        let err = Error::Network("timed out".into());
        assert!(format!("{}", err).contains("timed out"));
    }
}
