use serde::{Deserialize, Serialize};

use super::{APP_BUILD, APP_VERSION};

/// Notification preferences
///
/// Nothing reads these outside the settings screen. No notification is ever
/// sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsState {
    #[serde(default = "enabled")]
    pub notifications_enabled: bool,

    #[serde(default)]
    pub email_notifications: bool,

    #[serde(default = "enabled")]
    pub push_notifications: bool,
}

fn enabled() -> bool {
    true
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
            email_notifications: false,
            push_notifications: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SettingsToggle {
    Notifications,
    Email,
    Push,
}

impl SettingsToggle {
    pub fn title(&self) -> &'static str {
        match self {
            SettingsToggle::Notifications => "Enable Notifications",
            SettingsToggle::Email => "Email Notifications",
            SettingsToggle::Push => "Push Notifications",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            SettingsToggle::Notifications => "Receive important updates",
            SettingsToggle::Email => "Get updates via email",
            SettingsToggle::Push => "Real-time alerts",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsView {
    pub toggles: Vec<(SettingsToggle, bool)>,
    pub version: &'static str,
    pub build: &'static str,
}

impl SettingsState {
    pub fn get(&self, toggle: SettingsToggle) -> bool {
        match toggle {
            SettingsToggle::Notifications => self.notifications_enabled,
            SettingsToggle::Email => self.email_notifications,
            SettingsToggle::Push => self.push_notifications,
        }
    }

    pub fn set(&mut self, toggle: SettingsToggle, value: bool) {
        match toggle {
            SettingsToggle::Notifications => self.notifications_enabled = value,
            SettingsToggle::Email => self.email_notifications = value,
            SettingsToggle::Push => self.push_notifications = value,
        }
    }

    /// Email and push are hidden while notifications are off. Their values
    /// are kept.
    pub fn visible_toggles(&self) -> Vec<SettingsToggle> {
        if self.notifications_enabled {
            vec![
                SettingsToggle::Notifications,
                SettingsToggle::Email,
                SettingsToggle::Push,
            ]
        } else {
            vec![SettingsToggle::Notifications]
        }
    }

    pub fn view(&self) -> SettingsView {
        SettingsView {
            toggles: self
                .visible_toggles()
                .into_iter()
                .map(|t| (t, self.get(t)))
                .collect(),
            version: APP_VERSION,
            build: APP_BUILD,
        }
    }
}
