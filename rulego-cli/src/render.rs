//! Text rendering for the screen views

use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use rulego_core::catalog::{Country, EmergencyContact, Rule, RuleCategory};
use rulego_core::screens::{AboutView, FavoritesView, HomeView, ProfileView, RulesView, SettingsView};

/// Table row for rule listings
#[derive(Tabled)]
struct RuleRow {
    #[tabled(rename = "★")]
    star: &'static str,
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Fine")]
    fine: String,
}

#[derive(Tabled)]
struct CountryRow {
    #[tabled(rename = "Flag")]
    flag: String,
    #[tabled(rename = "Country")]
    name: String,
    #[tabled(rename = "ISO")]
    iso_code: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    title: String,
    #[tabled(rename = "Icon")]
    icon: String,
    #[tabled(rename = "Color")]
    color: String,
}

#[derive(Tabled)]
struct ContactRow {
    #[tabled(rename = "Service")]
    title: String,
    #[tabled(rename = "Number")]
    phone_number: String,
}

fn styled<T: Tabled>(rows: &[T]) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

pub fn rules_table(rules: &[Rule]) -> String {
    let rows: Vec<RuleRow> = rules
        .iter()
        .map(|rule| RuleRow {
            star: if rule.is_favorite { "★" } else { "☆" },
            id: rule.id.to_string(),
            title: rule.title.clone(),
            category: rule.category.clone(),
            fine: rule.fine.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect();
    styled(&rows)
}

pub fn countries_table(countries: &[Country]) -> String {
    let rows: Vec<CountryRow> = countries
        .iter()
        .map(|c| CountryRow {
            flag: c.flag.clone(),
            name: c.name.clone(),
            iso_code: c.iso_code.clone(),
        })
        .collect();
    styled(&rows)
}

pub fn categories_table(categories: &[RuleCategory]) -> String {
    let rows: Vec<CategoryRow> = categories
        .iter()
        .map(|c| CategoryRow {
            title: c.title.clone(),
            icon: c.icon.clone(),
            color: c.color.to_string(),
        })
        .collect();
    styled(&rows)
}

pub fn contacts_table(contacts: &[EmergencyContact]) -> String {
    let rows: Vec<ContactRow> = contacts
        .iter()
        .map(|c| ContactRow {
            title: c.title.clone(),
            phone_number: c.phone_number.clone(),
        })
        .collect();
    styled(&rows)
}

/// Fine and tip lines under a rule title
fn rule_details(rule: &Rule) -> Vec<String> {
    let mut lines = vec![format!("  {}", rule.description)];
    if let Some(fine) = &rule.fine {
        lines.push(format!("  Fine: {fine}"));
    }
    if let Some(tip) = &rule.tip {
        lines.push(format!("  Tip: {tip}"));
    }
    lines
}

pub fn print_rules(view: &RulesView) {
    println!("{} {}", view.flag, view.header);
    println!("{}\n", view.subtitle);

    let tabs: Vec<String> = view
        .tabs
        .iter()
        .map(|t| {
            if *t == view.selected {
                format!("[{t}]")
            } else {
                t.to_string()
            }
        })
        .collect();
    println!("{}\n", tabs.join("  "));

    if let Some(empty) = view.empty_state {
        println!("{}\n{}", empty.title(), empty.hint());
        return;
    }

    println!("{}", rules_table(&view.rules));
}

pub fn print_favorites(view: &FavoritesView) {
    println!("Favorites");
    println!("Your saved rules\n");

    if let Some(empty) = view.empty_state {
        println!("{}\n{}", empty.title(), empty.hint());
        return;
    }

    for rule in &view.rules {
        println!("★ {} [{}] ({})", rule.title, rule.category, rule.id);
        for line in rule_details(rule) {
            println!("{line}");
        }
        println!();
    }
}

pub fn print_home(view: &HomeView) {
    println!("RuleGO");
    println!("{}\n", view.tagline);

    match &view.selected_country {
        Some(country) => {
            println!("Quick Rules - {}", country.label());
            for quick in &view.quick_rules {
                println!("  • {}: {}", quick.title, quick.description);
            }
        }
        None => println!("Destination: choose a country (try `country <name>`)"),
    }

    println!("\nBrowse by Category");
    println!("{}", categories_table(&view.categories));

    println!("\nEmergency Contacts");
    println!("{}", contacts_table(&view.emergency_contacts));

    for line in view.disclaimer {
        println!("{line}");
    }
}

pub fn print_profile(view: &ProfileView) {
    println!("{}", view.display_name);
    println!("{}\n", view.email);
    for link in view.links {
        println!("  › {}", link.title());
    }
}

pub fn print_settings(view: &SettingsView) {
    println!("Settings");
    println!("Customize your experience\n");
    for (toggle, on) in &view.toggles {
        let mark = if *on { "on " } else { "off" };
        println!("  [{mark}] {} - {}", toggle.title(), toggle.subtitle());
    }
    println!("\nVersion {}  Build {}", view.version, view.build);
}

pub fn print_about(view: &AboutView) {
    println!("RuleGO");
    println!("{}\n", view.tagline);
    println!("{}\n", view.about);

    println!("Features");
    for feature in view.features {
        println!("  • {}: {}", feature.title, feature.description);
    }

    println!("\nVersion {}  Build {}\n", view.version, view.build);
    println!("Disclaimer\n{}\n", view.disclaimer);

    println!("Contact & Support");
    for contact in view.support {
        println!("  {}: {}", contact.title, contact.value);
    }
}
