use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::view::{Composition, SortOption};

/// Configuration from the optional TOML config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// How search and the status tab combine
    #[serde(default)]
    pub composition: Composition,
    /// Keep the chosen sort across later search/tab changes
    #[serde(default = "default_true")]
    pub sticky_sort: bool,
    /// Sort option shown before the user picks one
    #[serde(default)]
    pub default_sort: SortOption,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            composition: Composition::default(),
            sticky_sort: true,
            default_sort: SortOption::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex overrides keyed by theme color name (e.g. `highlight = "#FB4196"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}
