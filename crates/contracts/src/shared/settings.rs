use serde::{Deserialize, Serialize};

/// User-facing display preferences, persisted per user by the surfaces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub currency: String,
    pub distance_unit: String,
    pub date_format: String,
    pub language: String,
    #[serde(default)]
    pub notifications: NotificationSettings,
}

/// Notification toggles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub maintenance_due: bool,
    pub maintenance_overdue: bool,
    pub low_stock: bool,
    pub webhooks_enabled: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency: "EUR".to_string(),
            distance_unit: "km".to_string(),
            date_format: "DD/MM/YYYY".to_string(),
            language: "en".to_string(),
            notifications: NotificationSettings::default(),
        }
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            maintenance_due: true,
            maintenance_overdue: true,
            low_stock: true,
            webhooks_enabled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = DisplaySettings::default();
        assert_eq!(settings.currency, "EUR");
        assert_eq!(settings.distance_unit, "km");
        assert!(settings.notifications.maintenance_overdue);
        assert!(!settings.notifications.webhooks_enabled);
    }
}
