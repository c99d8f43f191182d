// Account settings and tier limits

use serde::{Deserialize, Serialize};

use crate::models::ai::ImageSize;

pub const APP_NAME: &str = "Orbit";

/// Maximum number of habits on the free plan
pub const MAX_FREE_HABITS: usize = 5;

/// User messages a free account may send per coach session
pub const FREE_COACH_MESSAGES_PER_SESSION: usize = 3;

/// Highest image resolution available on the free plan
/// 2K and 4K generation is a Pro feature.
pub const FREE_IMAGE_SIZE_CEILING: ImageSize = ImageSize::OneK;

/// Default premium flag
fn default_is_premium() -> bool {
    false
}

/// Account-level settings supplied by the surrounding app
/// Billing itself lives outside the core; this only carries the outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSettings {
    /// Whether the account is on the Pro plan
    #[serde(default = "default_is_premium")]
    pub is_premium: bool,
}

impl Default for AccountSettings {
    fn default() -> Self {
        Self {
            is_premium: default_is_premium(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_settings_default_to_free() {
        let settings = AccountSettings::default();
        assert!(!settings.is_premium);
    }

    #[test]
    fn test_account_settings_deserialize_missing_field() {
        let settings: AccountSettings = serde_json::from_str("{}").unwrap();
        assert!(!settings.is_premium);
    }
}
