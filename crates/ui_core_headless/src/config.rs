//! Serialized defaults for the component kit.
//!
//! Applications ship a JSON document (every field optional) that seeds component defaults such
//! as the pagination window size or the table page size. Explicit component props always win.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pagination::DEFAULT_MAX_VISIBLE;
use crate::table::DEFAULT_PAGE_SIZE;
use crate::variants::ControlSize;

#[derive(Debug, Error)]
/// Errors raised while loading a [`UiConfig`].
pub enum ConfigError {
    /// The document was not valid JSON for the config schema.
    #[error("invalid ui config: {0}")]
    Parse(#[from] serde_json::Error),
    /// `pagination.max_visible` was zero.
    #[error("pagination.max_visible must be at least 1")]
    InvalidMaxVisible,
    /// `table.page_size` was zero.
    #[error("table.page_size must be at least 1")]
    InvalidPageSize,
}

/// Defaults for the `Pagination` component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationDefaults {
    /// Numeric entries in the main page window.
    pub max_visible: usize,
    /// Whether first/last controls are rendered.
    pub show_first_last: bool,
    /// Control size.
    pub size: ControlSize,
}

impl Default for PaginationDefaults {
    fn default() -> Self {
        Self {
            max_visible: DEFAULT_MAX_VISIBLE,
            show_first_last: false,
            size: ControlSize::Md,
        }
    }
}

/// Defaults for the `DataTable` component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableDefaults {
    /// Rows per page.
    pub page_size: usize,
    /// Whether the search field is rendered.
    pub searchable: bool,
    /// Placeholder text for the search field.
    pub search_placeholder: String,
    /// Whether the pagination footer is rendered.
    pub pagination: bool,
    /// Message shown when no rows match.
    pub empty_message: String,
}

impl Default for TableDefaults {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            searchable: false,
            search_placeholder: "Search...".to_string(),
            pagination: true,
            empty_message: "No results.".to_string(),
        }
    }
}

/// Root configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Pagination defaults.
    pub pagination: PaginationDefaults,
    /// Data-table defaults.
    pub table: TableDefaults,
}

impl UiConfig {
    /// Parses and validates a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the validation errors of
    /// [`UiConfig::validate`].
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the components cannot honor.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMaxVisible`] or [`ConfigError::InvalidPageSize`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pagination.max_visible == 0 {
            return Err(ConfigError::InvalidMaxVisible);
        }
        if self.table.page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }
        Ok(())
    }

    /// Serializes the config as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
