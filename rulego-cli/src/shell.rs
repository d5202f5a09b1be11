//! Interactive session
//!
//! Reads one command per line from stdin and applies it to a single
//! [`AppSession`], so favorites set here stay visible until the shell exits.

use anyhow::{bail, Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use rulego_core::screens::{SettingsToggle, TAGLINE};
use rulego_core::session::{LaunchPhase, Tab};
use rulego_core::{AppSession, CategoryFilter, RuleId};

use crate::render;

const HELP: &str = "\
Commands:
  home | rules | profile         switch tab
  search [text]                  search rules (empty clears)
  category <title|All>           filter rules by category
  header <ISO>                   country shown in the rules header
  country <name|ISO>             pick a destination on the home tab
  countries [text]               list destinations
  toggle <rule-id>               star / unstar a rule
  remove <rule-id>               unstar from the favorites list
  favorites [text]               show favorites, optionally searched
  share <rule-id>                text to share for a favorite
  settings                       show settings
  set <notifications|email|push> <on|off>
  about                          about RuleGO
  help                           this text
  quit                           leave";

#[derive(Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub async fn run(mut session: AppSession, skip_splash: bool) -> Result<()> {
    if skip_splash {
        session.skip_splash();
    } else {
        println!("RuleGO\n{TAGLINE}\n");
        session.launch().await;
    }
    debug_assert_eq!(session.phase(), LaunchPhase::Main);

    let mut changes = session.subscribe();
    render::print_home(&session.home_view());
    println!("\nType `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read from stdin")?
    {
        match execute(&mut session, &line) {
            Ok(Control::Quit) => break,
            Ok(Control::Continue) => {}
            Err(e) => eprintln!("{e:#}"),
        }

        if changes.has_changed().unwrap_or(false) {
            changes.mark_unchanged();
            println!("({} favorite(s))", session.store().favorite_count());
        }
    }

    Ok(())
}

fn parse_switch(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        other => bail!("Expected on/off, got '{other}'"),
    }
}

fn parse_setting(name: &str) -> Result<SettingsToggle> {
    match name.to_ascii_lowercase().as_str() {
        "notifications" => Ok(SettingsToggle::Notifications),
        "email" => Ok(SettingsToggle::Email),
        "push" => Ok(SettingsToggle::Push),
        other => bail!("Unknown setting '{other}'"),
    }
}

/// Apply one input line to the session
pub fn execute(session: &mut AppSession, line: &str) -> Result<Control> {
    let words = shell_words::split(line).context("Could not parse command line")?;
    let Some((command, args)) = words.split_first() else {
        return Ok(Control::Continue);
    };
    let rest = args.join(" ");
    debug!(command = %command, args = ?args, "Shell command");

    match command.as_str() {
        "quit" | "exit" => return Ok(Control::Quit),
        "help" => println!("{HELP}"),
        "home" | "rules" | "profile" => {
            let tab = Tab::from_title(command).context("Unknown tab")?;
            session.select_tab(tab);
            show_tab(session);
        }
        "search" => {
            session.rules_mut().set_search_text(rest);
            session.select_tab(Tab::Rules);
            show_tab(session);
        }
        "category" => {
            if args.is_empty() {
                bail!("Usage: category <title|All>");
            }
            let filter: CategoryFilter = match rest.parse() {
                Ok(filter) => filter,
                Err(never) => match never {},
            };
            session.rules_mut().select_category(filter);
            session.select_tab(Tab::Rules);
            show_tab(session);
        }
        "header" => {
            let code = args.first().context("Usage: header <ISO>")?;
            let country = session
                .catalog()
                .find_country_by_code(code)
                .with_context(|| format!("Unknown country code '{code}'"))?
                .clone();
            session.rules_mut().set_country(country);
            println!("{}", session.rules().header());
        }
        "country" => {
            if args.is_empty() {
                bail!("Usage: country <name|ISO>");
            }
            let catalog = session.catalog();
            let country = catalog
                .find_country_by_code(&rest)
                .cloned()
                .or_else(|| session.home().country_choices(catalog, &rest).into_iter().next())
                .with_context(|| format!("No destination matches '{rest}'"))?;
            session.select_destination(country);
            session.select_tab(Tab::Home);
            show_tab(session);
        }
        "countries" => {
            let countries = session.home().country_choices(session.catalog(), &rest);
            if countries.is_empty() {
                println!("No countries found.");
            } else {
                println!("{}", render::countries_table(&countries));
            }
        }
        "toggle" => {
            let id = args.first().context("Usage: toggle <rule-id>")?;
            match session.toggle_favorite(&RuleId::new(id.as_str())) {
                Some(state) => println!("{id}: {state:?}"),
                None => println!("No rule with id '{id}'."),
            }
        }
        "remove" => {
            let id = args.first().context("Usage: remove <rule-id>")?;
            if session.remove_favorite(&RuleId::new(id.as_str())) {
                println!("Removed {id} from favorites.");
            }
            render::print_favorites(&session.favorites_view());
        }
        "share" => {
            let id = args.first().context("Usage: share <rule-id>")?;
            let text = session
                .share_favorite(&RuleId::new(id.as_str()))
                .with_context(|| format!("'{id}' is not a favorite"))?;
            println!("{text}");
        }
        "favorites" => {
            session.favorites_mut().set_search_text(rest);
            render::print_favorites(&session.favorites_view());
        }
        "settings" => render::print_settings(&session.settings().view()),
        "set" => {
            let (Some(name), Some(value)) = (args.first(), args.get(1)) else {
                bail!("Usage: set <notifications|email|push> <on|off>");
            };
            let toggle = parse_setting(name)?;
            let value = parse_switch(value)?;
            session.settings_mut().set(toggle, value);
            render::print_settings(&session.settings().view());
        }
        "about" => render::print_about(&session.about_view()),
        other => bail!("Unknown command '{other}'. Type `help` for commands."),
    }

    Ok(Control::Continue)
}

fn show_tab(session: &AppSession) {
    match session.tab() {
        Tab::Home => render::print_home(&session.home_view()),
        Tab::Rules => render::print_rules(&session.rules_view()),
        Tab::Profile => render::print_profile(&session.profile_view()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session() -> AppSession {
        let mut session = AppSession::default();
        session.skip_splash();
        session
    }

    #[test]
    fn test_quoted_search_and_category() {
        let mut session = session();
        execute(&mut session, r#"search "seat belt""#).unwrap();
        assert_eq!(session.tab(), Tab::Rules);
        assert_eq!(session.rules().query().search_text, "seat belt");

        execute(&mut session, "category Dress Code").unwrap();
        assert_eq!(
            session.rules().query().category,
            CategoryFilter::only("Dress Code")
        );
    }

    #[test]
    fn test_toggle_then_remove() {
        let mut session = session();
        execute(&mut session, "toggle seat-belt-required").unwrap();
        assert_eq!(session.store().favorite_count(), 4);

        execute(&mut session, "remove seat-belt-required").unwrap();
        assert_eq!(session.store().favorite_count(), 3);
    }

    #[test]
    fn test_share_requires_a_favorite() {
        let mut session = session();
        execute(&mut session, "share no-smoking-indoors").unwrap();
        assert!(execute(&mut session, "share seat-belt-required").is_err());
        assert!(execute(&mut session, "share").is_err());
    }

    #[test]
    fn test_country_by_name_or_code() {
        let mut session = session();
        execute(&mut session, "country united").unwrap();
        assert_eq!(
            session.home().selected_country().map(|c| c.iso_code.as_str()),
            Some("GB")
        );

        execute(&mut session, "country us").unwrap();
        assert_eq!(
            session.home().selected_country().map(|c| c.name.as_str()),
            Some("United States")
        );

        assert!(execute(&mut session, "country Narnia").is_err());
    }

    #[test]
    fn test_settings_commands() {
        let mut session = session();
        execute(&mut session, "set notifications off").unwrap();
        assert!(!session.settings().notifications_enabled);
        assert!(execute(&mut session, "set vibration on").is_err());
        assert!(execute(&mut session, "set push maybe").is_err());
    }

    #[test]
    fn test_blank_unknown_and_quit() {
        let mut session = session();
        assert_eq!(execute(&mut session, "   ").unwrap(), Control::Continue);
        assert!(execute(&mut session, "fly").is_err());
        assert_eq!(execute(&mut session, "quit").unwrap(), Control::Quit);
    }
}
