//! Running app session
//!
//! An [`AppSession`] is the single owner of all mutable state for one run:
//! the rule store, the per-screen interaction state, the selected tab and
//! the launch phase. Nothing is persisted; dropping the session forgets it.

mod launch;

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, warn};

pub use launch::{LaunchPhase, Launcher, DEFAULT_SPLASH_DELAY};

use crate::catalog::{Catalog, Country, RuleId};
use crate::config::AppConfig;
use crate::favorites::FavoriteState;
use crate::screens::{
    AboutView, FavoritesScreen, FavoritesView, HomeScreen, HomeView, ProfileView, RulesScreen,
    RulesView, SettingsState,
};
use crate::store::{Revision, RuleStore};

/// Bottom navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Tab {
    #[default]
    Home,
    Rules,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Rules, Tab::Profile];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Rules => "Rules",
            Tab::Profile => "Profile",
        }
    }

    pub fn icon(&self, selected: bool) -> &'static str {
        match (self, selected) {
            (Tab::Home, false) => "house",
            (Tab::Home, true) => "house.fill",
            (Tab::Rules, false) => "list.bullet.clipboard",
            (Tab::Rules, true) => "list.bullet.clipboard.fill",
            (Tab::Profile, false) => "person",
            (Tab::Profile, true) => "person.fill",
        }
    }

    /// Case-insensitive tab lookup by title
    pub fn from_title(title: &str) -> Option<Tab> {
        Self::ALL
            .into_iter()
            .find(|t| t.title().eq_ignore_ascii_case(title))
    }
}

#[derive(Debug)]
pub struct AppSession {
    catalog: &'static Catalog,
    store: RuleStore,
    phase: LaunchPhase,
    tab: Tab,
    home: HomeScreen,
    rules: RulesScreen,
    favorites: FavoritesScreen,
    settings: SettingsState,
    launcher: Launcher,
}

impl Default for AppSession {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl AppSession {
    pub fn new(config: &AppConfig) -> Self {
        let catalog = Catalog::shared();
        let rules_country = match catalog.find_country_by_code(&config.default_country) {
            Some(country) => country.clone(),
            None => {
                warn!(
                    code = %config.default_country,
                    "Unknown default country, falling back to {}",
                    catalog.default_country().name
                );
                catalog.default_country().clone()
            }
        };

        Self {
            catalog,
            store: RuleStore::default(),
            phase: LaunchPhase::Splash,
            tab: Tab::default(),
            home: HomeScreen::new(),
            rules: RulesScreen::new(rules_country),
            favorites: FavoritesScreen::new(),
            settings: config.settings,
            launcher: Launcher::new(config.splash_delay()),
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn store(&self) -> &RuleStore {
        &self.store
    }

    /// Observe favorite changes made anywhere in the session
    pub fn subscribe(&self) -> watch::Receiver<Revision> {
        self.store.subscribe()
    }

    pub fn phase(&self) -> LaunchPhase {
        self.phase
    }

    /// Show the splash for the configured delay, then enter the main view
    pub async fn launch(&mut self) {
        if self.phase == LaunchPhase::Main {
            return;
        }
        self.phase = self.launcher.run().await;
        info!(tab = self.tab.title(), "Entered main view");
    }

    /// Enter the main view without waiting
    pub fn skip_splash(&mut self) {
        self.phase = LaunchPhase::Main;
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        debug!(tab = tab.title(), "Tab selected");
        self.tab = tab;
    }

    pub fn home(&self) -> &HomeScreen {
        &self.home
    }

    pub fn home_mut(&mut self) -> &mut HomeScreen {
        &mut self.home
    }

    pub fn rules(&self) -> &RulesScreen {
        &self.rules
    }

    pub fn rules_mut(&mut self) -> &mut RulesScreen {
        &mut self.rules
    }

    pub fn favorites(&self) -> &FavoritesScreen {
        &self.favorites
    }

    pub fn favorites_mut(&mut self) -> &mut FavoritesScreen {
        &mut self.favorites
    }

    pub fn settings(&self) -> &SettingsState {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsState {
        &mut self.settings
    }

    /// Pick a destination on the home tab
    ///
    /// The rules tab keeps its own header country; the two are not linked.
    pub fn select_destination(&mut self, country: Country) {
        self.home.select_country(country);
    }

    /// Star / unstar from any screen
    pub fn toggle_favorite(&mut self, id: &RuleId) -> Option<FavoriteState> {
        self.store.toggle_favorite(id)
    }

    /// "Remove" on the favorites screen
    pub fn remove_favorite(&mut self, id: &RuleId) -> bool {
        self.store.remove_favorite(id)
    }

    /// "Share" on a favorite card
    pub fn share_favorite(&self, id: &RuleId) -> Option<String> {
        self.favorites.share_text(&self.store, id)
    }

    pub fn home_view(&self) -> HomeView {
        self.home.view(self.catalog)
    }

    pub fn rules_view(&self) -> RulesView {
        self.rules.view(&self.store)
    }

    pub fn favorites_view(&self) -> FavoritesView {
        self.favorites.view(&self.store)
    }

    pub fn profile_view(&self) -> ProfileView {
        ProfileView::default()
    }

    pub fn about_view(&self) -> AboutView {
        AboutView::default()
    }
}
