use crate::phone_generator::Region;
use serde::{Deserialize, Serialize};

/// Shop-level simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Display name used by the shell banner and reports.
    pub shop_name: String,
    /// Region customers' phone numbers are drawn from.
    pub region: Region,
    /// Clear both customer maps at the start of every run, making each
    /// simulated day independent. Disable to carry registrations
    /// across days.
    pub fresh_maps_per_day: bool,
    /// Shell default for the line-size input.
    pub default_line_size: u64,
    /// Shell default for the wait-list-size input.
    pub default_wait_list_size: u64,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            shop_name: "tiTAN the Sew".into(),
            region: Region::Canada,
            fresh_maps_per_day: true,
            default_line_size: 0,
            default_wait_list_size: 0,
        }
    }
}

impl ShopConfig {
    /// Load from a JSON file. Absent fields keep their defaults.
    /// In tests, use ShopConfig::default_test().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Config with hardcoded defaults for use in unit tests.
    pub fn default_test() -> Self {
        Self {
            shop_name: "test-shop".into(),
            region: Region::Canada,
            fresh_maps_per_day: true,
            default_line_size: 0,
            default_wait_list_size: 0,
        }
    }
}
