//! Bundled catalog data
//!
//! These tables are compiled in. Each loader returns a fresh, owned copy so
//! callers may hold their own working list.

use super::model::{Country, EmergencyContact, KnownCategory, QuickRule, Rule, RuleCategory};

/// The destinations offered by the country picker, in display order
pub fn load_countries() -> Vec<Country> {
    vec![
        Country::new("tr", "Turkey", "🇹🇷", "TR"),
        Country::new("tn", "Tunisia", "🇹🇳", "TN"),
        Country::new("fr", "France", "🇫🇷", "FR"),
        Country::new("es", "Spain", "🇪🇸", "ES"),
        Country::new("it", "Italy", "🇮🇹", "IT"),
        Country::new("de", "Germany", "🇩🇪", "DE"),
        Country::new("gb", "United Kingdom", "🇬🇧", "GB"),
        Country::new("us", "United States", "🇺🇸", "US"),
    ]
}

/// The sample rule set, in declaration order
pub fn load_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "no-smoking-indoors",
            "smoke",
            "No Smoking in Public Indoor Spaces",
            "Smoking is prohibited in all indoor public areas including restaurants, cafes, and shopping malls.",
            "Smoking",
        )
        .with_fine("200 TRY")
        .with_tip("Some outdoor areas in malls are also restricted.")
        .favorited(),
        Rule::new(
            "highway-speed-limits",
            "car.fill",
            "Speed Limits on Highways",
            "Maximum speed limit is 120 km/h on highways and 90 km/h on rural roads.",
            "Driving",
        )
        .with_fine("500-1000 TRY")
        .with_tip("Speed cameras are common. Always check road signs.")
        .favorited(),
        Rule::new(
            "alcohol-consumption",
            "wineglass",
            "Alcohol Consumption Laws",
            "Drinking alcohol in public parks and streets is prohibited. Only allowed in licensed venues.",
            "Alcohol",
        )
        .with_fine("300 TRY")
        .with_tip("Always consume responsibly and check venue licenses."),
        Rule::new(
            "religious-site-dress-code",
            "tshirt",
            "Dress Code at Religious Sites",
            "When visiting mosques, women should cover their heads and everyone should remove shoes.",
            "Dress Code",
        )
        .with_tip("Carry a scarf if you plan to visit religious sites.")
        .favorited(),
        Rule::new(
            "photography-restrictions",
            "camera.fill",
            "Photography Restrictions",
            "Photography is restricted at military installations and some government buildings.",
            "Photography",
        )
        .with_fine("Detention possible")
        .with_tip("Always ask permission before photographing people."),
        Rule::new(
            "cultural-norms",
            "building.columns",
            "Respect Cultural Norms",
            "Public displays of affection should be modest. Be respectful in traditional areas.",
            "Cultural",
        )
        .with_tip("Follow local customs to show respect."),
        Rule::new(
            "seat-belt-required",
            "car.circle",
            "Seat Belt Required",
            "All passengers must wear seat belts. Children under 12 must use appropriate car seats.",
            "Driving",
        )
        .with_fine("200 TRY per person")
        .with_tip("Check car seat availability when renting."),
        Rule::new(
            "pedestrian-crossings",
            "pedestrian.gate.closed",
            "Pedestrian Crossings",
            "Always use designated pedestrian crossings. Jaywalking is prohibited.",
            "Driving",
        )
        .with_fine("100 TRY")
        .with_tip("Wait for the green light even if roads appear clear."),
    ]
}

/// One entry per known category
pub fn load_categories() -> Vec<RuleCategory> {
    KnownCategory::ALL.into_iter().map(RuleCategory::from).collect()
}

pub fn load_emergency_contacts() -> Vec<EmergencyContact> {
    vec![
        EmergencyContact::new("phone.fill", "Emergency", "112"),
        EmergencyContact::new("shield.fill", "Police", "155"),
        EmergencyContact::new("cross.fill", "Medical", "911"),
    ]
}

/// Home screen preview. Identical for every destination.
pub fn load_quick_rules() -> Vec<QuickRule> {
    vec![
        QuickRule::new("smoke", "Smoking Restrictions", "No smoking in public places"),
        QuickRule::new("wineglass", "Alcohol Rules", "Limited alcohol in public areas"),
        QuickRule::new("creditcard", "Carry ID", "ID required at all times"),
        QuickRule::new("banknote", "Fines", "Heavy fines for littering"),
    ]
}
