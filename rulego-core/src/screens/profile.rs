use serde::Serialize;

/// Destinations reachable from the profile tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProfileLink {
    Settings,
    /// Shown but goes nowhere
    Notifications,
    Favorites,
    About,
}

impl ProfileLink {
    pub const ALL: [ProfileLink; 4] = [
        ProfileLink::Settings,
        ProfileLink::Notifications,
        ProfileLink::Favorites,
        ProfileLink::About,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ProfileLink::Settings => "Settings",
            ProfileLink::Notifications => "Notifications",
            ProfileLink::Favorites => "Favorites",
            ProfileLink::About => "About",
        }
    }

    pub fn is_navigable(&self) -> bool {
        !matches!(self, ProfileLink::Notifications)
    }
}

/// Placeholder traveler card; there is no account behind it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub display_name: &'static str,
    pub email: &'static str,
    pub links: [ProfileLink; 4],
}

impl Default for ProfileView {
    fn default() -> Self {
        Self {
            display_name: "Traveler",
            email: "explorer@rulego.com",
            links: ProfileLink::ALL,
        }
    }
}
