//! Application theme.
//!
//! A field-less enum: derived equality and hashing compare the tag, so no
//! custom contract is needed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AppTheme {
    /// Dark appearance
    DarkMode,
    /// Light appearance
    LightMode,
}

impl AppTheme {
    /// Every theme
    pub const ALL: [AppTheme; 2] = [AppTheme::DarkMode, AppTheme::LightMode];

    /// The other theme
    pub fn toggled(self) -> AppTheme {
        match self {
            AppTheme::DarkMode => AppTheme::LightMode,
            AppTheme::LightMode => AppTheme::DarkMode,
        }
    }
}

impl fmt::Display for AppTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppTheme::DarkMode => f.write_str("darkMode"),
            AppTheme::LightMode => f.write_str("lightMode"),
        }
    }
}
