//! Catalog record types
//!
//! Countries, rules, categories and emergency contacts as bundled with the
//! application. Everything here is plain data; only [`Rule::is_favorite`]
//! changes after construction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque rule identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(String);

impl RuleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RuleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Opaque country identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryId(String);

impl CountryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque category identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A destination country
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: CountryId,

    /// Display name
    pub name: String,

    /// Flag emoji
    pub flag: String,

    /// ISO 3166-1 alpha-2 code
    pub iso_code: String,
}

impl Country {
    pub fn new(id: &str, name: &str, flag: &str, iso_code: &str) -> Self {
        Self {
            id: CountryId::new(id),
            name: name.to_string(),
            flag: flag.to_string(),
            iso_code: iso_code.to_string(),
        }
    }

    /// "🇹🇷 Turkey"
    pub fn label(&self) -> String {
        format!("{} {}", self.flag, self.name)
    }
}

/// A single travel regulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub id: RuleId,

    /// Symbol name used by the front end
    pub icon: String,

    pub title: String,

    pub description: String,

    /// Category title, matched against [`RuleCategory::title`] by string equality
    pub category: String,

    /// Penalty, if the rule carries one
    #[serde(default)]
    pub fine: Option<String>,

    /// Practical advice for travelers
    #[serde(default)]
    pub tip: Option<String>,

    #[serde(default)]
    pub is_favorite: bool,
}

impl Rule {
    /// Create a rule with no fine, no tip, and not marked favorite
    pub fn new(
        id: impl Into<RuleId>,
        icon: &str,
        title: &str,
        description: &str,
        category: &str,
    ) -> Self {
        Self {
            id: id.into(),
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            fine: None,
            tip: None,
            is_favorite: false,
        }
    }

    pub fn with_fine(mut self, fine: &str) -> Self {
        self.fine = Some(fine.to_string());
        self
    }

    pub fn with_tip(mut self, tip: &str) -> Self {
        self.tip = Some(tip.to_string());
        self
    }

    pub fn favorited(mut self) -> Self {
        self.is_favorite = true;
        self
    }

    /// The known category this rule belongs to, if its tag is recognized
    pub fn known_category(&self) -> Option<KnownCategory> {
        KnownCategory::from_title(&self.category)
    }

    /// Display theme for the rule's category, falling back to the neutral theme
    pub fn theme(&self) -> CategoryTheme {
        CategoryTheme::for_title(&self.category)
    }
}

impl From<String> for RuleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Display color tag for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Red,
    Blue,
    Purple,
    Pink,
    Orange,
    Green,
    Gray,
}

impl ColorTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::Red => "red",
            ColorTag::Blue => "blue",
            ColorTag::Purple => "purple",
            ColorTag::Pink => "pink",
            ColorTag::Orange => "orange",
            ColorTag::Green => "green",
            ColorTag::Gray => "gray",
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed category set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownCategory {
    Smoking,
    Driving,
    Alcohol,
    DressCode,
    Photography,
    Cultural,
}

impl KnownCategory {
    /// All categories in display order
    pub const ALL: [KnownCategory; 6] = [
        KnownCategory::Smoking,
        KnownCategory::Driving,
        KnownCategory::Alcohol,
        KnownCategory::DressCode,
        KnownCategory::Photography,
        KnownCategory::Cultural,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            KnownCategory::Smoking => "Smoking",
            KnownCategory::Driving => "Driving",
            KnownCategory::Alcohol => "Alcohol",
            KnownCategory::DressCode => "Dress Code",
            KnownCategory::Photography => "Photography",
            KnownCategory::Cultural => "Cultural",
        }
    }

    /// Exact, case-sensitive match on the category title
    pub fn from_title(title: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.title() == title)
    }

    pub fn theme(&self) -> CategoryTheme {
        let (icon, color) = match self {
            KnownCategory::Smoking => ("smoke", ColorTag::Red),
            KnownCategory::Driving => ("car.fill", ColorTag::Blue),
            KnownCategory::Alcohol => ("wineglass", ColorTag::Purple),
            KnownCategory::DressCode => ("tshirt", ColorTag::Pink),
            KnownCategory::Photography => ("camera.fill", ColorTag::Orange),
            KnownCategory::Cultural => ("building.columns", ColorTag::Green),
        };
        CategoryTheme { icon, color }
    }
}

/// Icon and color used when rendering a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTheme {
    pub icon: &'static str,
    pub color: ColorTag,
}

impl CategoryTheme {
    /// Neutral treatment for unrecognized categories
    pub const FALLBACK: CategoryTheme = CategoryTheme {
        icon: "list.bullet",
        color: ColorTag::Gray,
    };

    pub fn for_title(title: &str) -> Self {
        KnownCategory::from_title(title)
            .map(|c| c.theme())
            .unwrap_or(Self::FALLBACK)
    }
}

/// Category lookup entry used for display grouping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleCategory {
    pub id: CategoryId,
    pub icon: String,
    pub title: String,
    pub color: ColorTag,
}

impl From<KnownCategory> for RuleCategory {
    fn from(category: KnownCategory) -> Self {
        let theme = category.theme();
        Self {
            id: CategoryId::new(category.title().to_lowercase().replace(' ', "-")),
            icon: theme.icon.to_string(),
            title: category.title().to_string(),
            color: theme.color,
        }
    }
}

/// An emergency phone number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub icon: String,
    pub title: String,
    pub phone_number: String,
}

impl EmergencyContact {
    pub fn new(icon: &str, title: &str, phone_number: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            phone_number: phone_number.to_string(),
        }
    }
}

/// Short rule teaser shown on the home screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickRule {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl QuickRule {
    pub fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_uses_fallback_theme() {
        let rule = Rule::new("r1", "star", "Tipping", "Tip 10%", "Etiquette");
        assert_eq!(rule.known_category(), None);
        assert_eq!(rule.theme(), CategoryTheme::FALLBACK);
        assert_eq!(rule.theme().color, ColorTag::Gray);
    }

    #[test]
    fn test_category_title_match_is_case_sensitive() {
        assert_eq!(
            KnownCategory::from_title("Dress Code"),
            Some(KnownCategory::DressCode)
        );
        assert_eq!(KnownCategory::from_title("dress code"), None);
    }

    #[test]
    fn test_rule_serializes_camel_case() {
        let rule = Rule::new("seat-belt", "car.circle", "Seat Belt", "Buckle up", "Driving")
            .with_fine("200 TRY");
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["id"], "seat-belt");
        assert_eq!(json["isFavorite"], false);
        assert_eq!(json["fine"], "200 TRY");
        assert!(json["tip"].is_null());
    }
}
