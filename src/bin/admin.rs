//! CLI administration tool for homepage-cms.
//!
//! Mints and inspects the bearer tokens accepted by the content API, and
//! checks the service configuration without starting the server.
//!
//! # Usage
//!
//! ```bash
//! # Issue a token for an admin user
//! cargo run --bin admin -- token issue --user-id 64f1c2a9e4b0a1b2c3d4e5f6
//!
//! # Inspect a token
//! cargo run --bin admin -- token inspect eyJhbGciOi...
//!
//! # Validate configuration
//! cargo run --bin admin -- config check
//! ```
//!
//! # Environment Variables
//!
//! - `JWT_SECRET` (required): secret the service verifies tokens with
//! - `ADMIN_USER_IDS` (optional): used to flag whether a token's subject is an admin

use homepage_cms::config;
use homepage_cms::domain::entities::UserId;
use homepage_cms::infrastructure::auth::{ConfiguredAdmins, JwtVerifier};

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};

/// CLI tool for managing homepage-cms.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Issue and inspect bearer tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Configuration tools
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Token subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Issue a token for a user
    Issue {
        /// User id to put in the token subject (prompted when omitted)
        #[arg(short, long)]
        user_id: Option<String>,

        /// Token lifetime in hours
        #[arg(short, long, default_value_t = 24)]
        ttl_hours: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Verify a token and show its claims
    Inspect {
        /// The encoded token
        token: String,
    },
}

/// Configuration subcommands.
#[derive(Subcommand)]
enum ConfigAction {
    /// Load and validate configuration from the environment
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Token { action } => handle_token_action(action)?,
        Commands::Config { action } => match action {
            ConfigAction::Check => check_config()?,
        },
    }

    Ok(())
}

/// Dispatches token commands.
fn handle_token_action(action: TokenAction) -> Result<()> {
    let secret = std::env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
    let verifier = JwtVerifier::new(&secret);
    let admins = admins_from_env();

    match action {
        TokenAction::Issue {
            user_id,
            ttl_hours,
            yes,
        } => issue_token(&verifier, &admins, user_id, ttl_hours, yes),
        TokenAction::Inspect { token } => inspect_token(&verifier, &admins, &token),
    }
}

fn admins_from_env() -> ConfiguredAdmins {
    let raw = std::env::var("ADMIN_USER_IDS").unwrap_or_default();
    ConfiguredAdmins::new(
        raw.split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string),
    )
}

/// Issues a token after an optional confirmation.
///
/// # Flow
///
/// 1. Prompt for the user id (or use provided)
/// 2. Warn when the user is not in `ADMIN_USER_IDS`
/// 3. Confirm (unless `--yes`)
/// 4. Print the token and a usage example
fn issue_token(
    verifier: &JwtVerifier,
    admins: &ConfiguredAdmins,
    user_id: Option<String>,
    ttl_hours: i64,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Issue bearer token".bright_blue().bold());
    println!();

    if ttl_hours <= 0 {
        anyhow::bail!("--ttl-hours must be positive, got {ttl_hours}");
    }

    let user_id = match user_id {
        Some(id) => id,
        None => Input::new().with_prompt("User id").interact_text()?,
    };
    let user_id = UserId::new(user_id.trim());

    println!("  User:    {}", user_id.as_str().cyan());
    println!("  Expires: {}", format!("in {ttl_hours}h").cyan());
    if !admins.contains(&user_id) {
        println!(
            "{}",
            "  Warning: this user is not in ADMIN_USER_IDS, create endpoints will answer 403"
                .yellow()
        );
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Issue this token?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let token = verifier
        .issue(&user_id, Duration::hours(ttl_hours))
        .context("Failed to sign token")?;

    println!("{}", token.bright_yellow().bold());
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -H \"Authorization: Bearer {}\" -H \"Content-Type: application/json\" \\",
        token.bright_yellow()
    );
    println!("       -d '{{\"footer\": {{\"companyName\": \"Acme\"}}}}' http://localhost:3000/home/footer");
    println!();

    Ok(())
}

/// Verifies a token and prints its subject and expiry.
fn inspect_token(verifier: &JwtVerifier, admins: &ConfiguredAdmins, token: &str) -> Result<()> {
    println!("{}", "Inspect bearer token".bright_blue().bold());
    println!();

    let claims = match verifier.verify(token.trim()) {
        Ok(claims) => claims,
        Err(e) => {
            println!("  Status:  {}", "INVALID".red().bold());
            println!("  Reason:  {}", e.to_string().bright_black());
            return Ok(());
        }
    };

    let user_id = claims.user_id();
    let expires = DateTime::<Utc>::from_timestamp(claims.exp, 0)
        .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| claims.exp.to_string());
    let role = if admins.contains(&user_id) {
        "ADMIN".green()
    } else {
        "USER".yellow()
    };

    println!("  Status:  {}", "VALID".green().bold());
    println!("  Subject: {}", user_id.as_str().cyan());
    println!("  Expires: {}", expires.bright_black());
    println!("  Role:    {}", role);
    println!();

    Ok(())
}

/// Loads and validates the service configuration, then prints a summary.
fn check_config() -> Result<()> {
    println!("{}", "Configuration check".bright_blue().bold());
    println!();

    match config::load_from_env() {
        Ok(cfg) => {
            println!("  Listen:       {}", cfg.listen_addr.cyan());
            println!("  Log:          {} ({})", cfg.log_level.cyan(), cfg.log_format);
            println!("  JWT secret:   {}", "set".green());
            println!(
                "  Admin users:  {}",
                cfg.admin_user_ids.len().to_string().bright_white().bold()
            );
            println!("  Upload dir:   {}", cfg.upload_dir.display());
            println!("  Max upload:   {} bytes", cfg.max_upload_bytes);
            match &cfg.market_data_path {
                Some(path) => println!("  Market data:  {}", path.display()),
                None => println!("  Market data:  {}", "none".bright_black()),
            }
            println!();
            println!("{}", "Configuration OK".green().bold());
            Ok(())
        }
        Err(e) => {
            println!("{} {:#}", "Configuration invalid:".red().bold(), e);
            Err(e)
        }
    }
}
