//! Array controller configuration.
//!
//! Policy flags that do not involve closures live in [`ControllerConfig`],
//! which can be embedded in application settings and loaded from TOML:
//!
//! ```
//! use lattice_arrange::model::ControllerConfig;
//!
//! let config = ControllerConfig::from_toml_str("allows_multiple_selection = false").unwrap();
//! assert!(!config.allows_multiple_selection);
//! assert!(config.clears_selection_on_change);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ArrangeError, Result};

/// Selection policy for an array controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Whether more than one item may be selected at once.
    pub allows_multiple_selection: bool,
    /// Whether a wholesale content change clears the selection. When
    /// `false`, the selection is kept and its indexes are resynced instead.
    pub clears_selection_on_change: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            allows_multiple_selection: true,
            clears_selection_on_change: true,
        }
    }
}

impl ControllerConfig {
    /// Parses a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| ArrangeError::config(e.to_string()))
    }

    /// Serializes the configuration to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ArrangeError::config(e.to_string()))
    }

    /// Sets `allows_multiple_selection`.
    pub fn with_multiple_selection(mut self, allows: bool) -> Self {
        self.allows_multiple_selection = allows;
        self
    }

    /// Sets `clears_selection_on_change`.
    pub fn with_clear_on_change(mut self, clears: bool) -> Self {
        self.clears_selection_on_change = clears;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ControllerConfig::default();
        assert!(config.allows_multiple_selection);
        assert!(config.clears_selection_on_change);
        assert_eq!(ControllerConfig::from_toml_str("").unwrap(), config);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ControllerConfig::default()
            .with_multiple_selection(false)
            .with_clear_on_change(false);

        let text = config.to_toml_string().unwrap();
        assert!(text.contains("allows_multiple_selection = false"));
        assert_eq!(ControllerConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml() {
        let err = ControllerConfig::from_toml_str("allows_multiple_selection = \"yes\"").unwrap_err();
        assert!(matches!(err, ArrangeError::Config { .. }));
    }
}
