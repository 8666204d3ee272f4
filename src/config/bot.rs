//! Bot identity configuration

use serde::Deserialize;

/// Bot settings.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Display name, used in logs
    #[serde(default = "default_name")]
    pub name: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

fn default_name() -> String {
    "VitaminBot".to_string()
}
