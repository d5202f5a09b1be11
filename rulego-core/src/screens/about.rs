use serde::Serialize;

pub const APP_VERSION: &str = "1.0.0";
pub const APP_BUILD: &str = "2026.01.05";
pub const TAGLINE: &str = "Know the rules. Travel safely.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupportContact {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
}

const FEATURES: [Feature; 5] = [
    Feature {
        icon: "globe.americas.fill",
        title: "Multiple Countries",
        description: "Access rules for destinations worldwide",
    },
    Feature {
        icon: "list.bullet.clipboard.fill",
        title: "Categorized Rules",
        description: "Easy-to-browse rule categories",
    },
    Feature {
        icon: "magnifyingglass",
        title: "Smart Search",
        description: "Find specific rules quickly",
    },
    Feature {
        icon: "star.fill",
        title: "Favorites",
        description: "Save important rules for quick access",
    },
    Feature {
        icon: "exclamationmark.triangle.fill",
        title: "Emergency Info",
        description: "Important contacts at your fingertips",
    },
];

const SUPPORT: [SupportContact; 3] = [
    SupportContact {
        icon: "envelope.fill",
        title: "Email",
        value: "support@rulego.app",
    },
    SupportContact {
        icon: "globe",
        title: "Website",
        value: "www.rulego.app",
    },
    SupportContact {
        icon: "message.fill",
        title: "Feedback",
        value: "feedback@rulego.app",
    },
];

/// Static "About RuleGO" page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutView {
    pub tagline: &'static str,
    pub about: &'static str,
    pub features: &'static [Feature],
    pub version: &'static str,
    pub build: &'static str,
    pub disclaimer: &'static str,
    pub support: &'static [SupportContact],
}

impl Default for AboutView {
    fn default() -> Self {
        Self {
            tagline: TAGLINE,
            about: "RuleGO is your essential travel companion, providing you with important rules, \
                    regulations, and cultural norms for destinations worldwide.\n\n\
                    Stay informed, travel responsibly, and avoid unnecessary fines or \
                    misunderstandings by knowing the rules before you go.",
            features: &FEATURES,
            version: APP_VERSION,
            build: APP_BUILD,
            disclaimer: "Data sourced from official and trusted sources. RuleGO does not replace \
                         official government advice.\n\n\
                         Always verify current regulations with official authorities before \
                         traveling.\n\n\
                         We strive for accuracy but cannot guarantee completeness. Users are \
                         responsible for their own compliance with local laws.",
            support: &SUPPORT,
        }
    }
}
