//! RuleGo - Know the rules. Travel safely.
//!
//! Command-line front end over the bundled travel rules.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rulego_core::auth::{AuthOutcome, AuthProvider, Credentials, InertAuthProvider};
use rulego_core::config::AppConfig;
use rulego_core::{AppSession, CategoryFilter, RuleId};

mod render;
mod shell;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "rulego",
    about = "Travel rules, emergency numbers and favorites for your destination",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Use this configuration file instead of the default location
    #[clap(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
enum Command {
    /// List destinations
    Countries {
        /// Filter by country name
        #[clap(long)]
        search: Option<String>,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// List rule categories
    Categories {
        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show emergency phone numbers
    Emergency {
        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Search and filter rules
    Rules {
        /// Search text (matches title and description, case-insensitive)
        #[clap(long, short)]
        search: Option<String>,

        /// Category title, or "All"
        #[clap(long, short, default_value = "All")]
        category: CategoryFilter,

        /// ISO code of the country shown in the header
        #[clap(long)]
        country: Option<String>,

        /// Toggle the favorite flag of a rule before listing (repeatable)
        #[clap(long = "toggle", value_name = "RULE_ID")]
        toggles: Vec<String>,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show favorite rules
    Favorites {
        /// Search within favorites
        #[clap(long, short)]
        search: Option<String>,

        /// Toggle the favorite flag of a rule before listing (repeatable)
        #[clap(long = "toggle", value_name = "RULE_ID")]
        toggles: Vec<String>,

        /// Unfavorite a rule before listing (repeatable)
        #[clap(long = "remove", value_name = "RULE_ID")]
        removals: Vec<String>,

        /// Print the share text of a favorite instead of the list
        #[clap(long, value_name = "RULE_ID", conflicts_with = "json")]
        share: Option<String>,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// About RuleGO
    About,

    /// Show notification settings
    Settings,

    /// Submit the login form
    Login {
        /// Email or username
        #[clap(long)]
        identifier: String,

        #[clap(long)]
        password: String,
    },

    /// Submit the sign-up form
    Signup {
        #[clap(long)]
        email: String,

        #[clap(long)]
        username: String,

        #[clap(long)]
        contact_number: String,

        #[clap(long)]
        password: String,

        #[clap(long)]
        confirm_password: String,
    },

    /// Interactive session over stdin
    Shell {
        /// Go straight to the main view
        #[clap(long)]
        skip_splash: bool,
    },
}

/// Initialize tracing with CLI flags
///
/// Logs go to stderr so that stdout stays clean for tables and JSON.
fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level);

    let config = AppConfig::load(cli.config.as_deref())?;
    debug!(?config, "Configuration loaded");

    match cli.command {
        Command::Countries { search, json } => {
            countries_command(search.as_deref().unwrap_or_default(), json)
        }
        Command::Categories { json } => categories_command(json),
        Command::Emergency { json } => emergency_command(json),
        Command::Rules {
            search,
            category,
            country,
            toggles,
            json,
        } => {
            let mut session = AppSession::new(&config);
            rules_command(&mut session, search, category, country, &toggles, json)
        }
        Command::Favorites {
            search,
            toggles,
            removals,
            share,
            json,
        } => {
            let mut session = AppSession::new(&config);
            favorites_command(&mut session, search, &toggles, &removals, share, json)
        }
        Command::About => {
            render::print_about(&AppSession::new(&config).about_view());
            Ok(())
        }
        Command::Settings => {
            render::print_settings(&config.settings.view());
            Ok(())
        }
        Command::Login {
            identifier,
            password,
        } => auth_command(Credentials::Login {
            identifier,
            password,
        })
        .await,
        Command::Signup {
            email,
            username,
            contact_number,
            password,
            confirm_password,
        } => auth_command(Credentials::SignUp {
            email,
            username,
            contact_number,
            password,
            confirm_password,
        })
        .await,
        Command::Shell { skip_splash } => shell::run(AppSession::new(&config), skip_splash).await,
    }
}

fn countries_command(search: &str, json_output: bool) -> Result<()> {
    let session = AppSession::default();
    let countries = session
        .home()
        .country_choices(session.catalog(), search);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&countries)?);
    } else if countries.is_empty() {
        println!("No countries found.");
    } else {
        println!("{}", render::countries_table(&countries));
    }
    Ok(())
}

fn categories_command(json_output: bool) -> Result<()> {
    let categories = AppSession::default().home_view().categories;
    if json_output {
        println!("{}", serde_json::to_string_pretty(&categories)?);
    } else {
        println!("{}", render::categories_table(&categories));
    }
    Ok(())
}

fn emergency_command(json_output: bool) -> Result<()> {
    let contacts = AppSession::default().home_view().emergency_contacts;
    if json_output {
        println!("{}", serde_json::to_string_pretty(&contacts)?);
    } else {
        println!("{}", render::contacts_table(&contacts));
    }
    Ok(())
}

/// Apply `--toggle` flags, reporting ids that match nothing
fn apply_toggles(session: &mut AppSession, toggles: &[String]) {
    for id in toggles {
        match session.toggle_favorite(&RuleId::new(id.as_str())) {
            Some(state) => debug!(id = %id, ?state, "Applied toggle"),
            None => eprintln!("No rule with id '{id}'; ignored."),
        }
    }
}

fn rules_command(
    session: &mut AppSession,
    search: Option<String>,
    category: CategoryFilter,
    country: Option<String>,
    toggles: &[String],
    json_output: bool,
) -> Result<()> {
    if let Some(code) = country {
        let country = session
            .catalog()
            .find_country_by_code(&code)
            .with_context(|| format!("Unknown country code '{code}'"))?
            .clone();
        session.rules_mut().set_country(country);
    }
    if let Some(text) = search {
        session.rules_mut().set_search_text(text);
    }
    session.rules_mut().select_category(category);
    apply_toggles(session, toggles);

    let view = session.rules_view();
    if json_output {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        render::print_rules(&view);
    }
    Ok(())
}

fn favorites_command(
    session: &mut AppSession,
    search: Option<String>,
    toggles: &[String],
    removals: &[String],
    share: Option<String>,
    json_output: bool,
) -> Result<()> {
    apply_toggles(session, toggles);
    for id in removals {
        if !session.remove_favorite(&RuleId::new(id.as_str())) {
            debug!(id = %id, "Nothing to remove");
        }
    }
    if let Some(id) = share {
        return share_command(session, &id);
    }
    if let Some(text) = search {
        session.favorites_mut().set_search_text(text);
    }

    let view = session.favorites_view();
    if json_output {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        render::print_favorites(&view);
    }
    Ok(())
}

fn share_command(session: &AppSession, id: &str) -> Result<()> {
    let text = session
        .share_favorite(&RuleId::new(id))
        .with_context(|| format!("'{id}' is not a favorite"))?;
    println!("{text}");
    Ok(())
}

async fn auth_command(credentials: Credentials) -> Result<()> {
    let provider = InertAuthProvider;
    let outcome = provider
        .authenticate(&credentials)
        .await
        .with_context(|| format!("{} sign-in failed", provider.name()))?;

    match outcome {
        AuthOutcome::Authenticated { display_name } => println!("Signed in as {display_name}."),
        AuthOutcome::Unverified { identity } => {
            println!("Received form for {identity}. No account system is configured; nothing was verified.")
        }
    }
    Ok(())
}
