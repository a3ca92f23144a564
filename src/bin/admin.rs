//! CLI administration tool for linkhub.
//!
//! Provides commands for managing users, inspecting labels, and performing
//! database checks without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Register a user (prompts for missing fields)
//! cargo run --bin admin -- user create --email ferris@example.com --name Ferris
//!
//! # List users, deleted ones included
//! cargo run --bin admin -- user list
//!
//! # Soft-delete a user
//! cargo run --bin admin -- user delete 3
//!
//! # List all tags
//! cargo run --bin admin -- labels tags
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` (or `DB_*` parts).

use linkhub::application::services::{LabelService, NewUserRequest, UserService};
use linkhub::config;
use linkhub::domain::entities::LabelKind;
use linkhub::infrastructure::persistence::{PgLabelRepository, PgUserRepository};
use linkhub::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing linkhub.
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
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// List categories, types or tags
    Labels {
        /// One of: categories, types, tags
        kind: LabelKind,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Register a new user
    Create {
        #[arg(short, long)]
        email: Option<String>,

        #[arg(short, long)]
        name: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all users
    List,

    /// Soft-delete a user
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::User { action } => {
            let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));
            let service = UserService::new(repo);
            handle_user_action(action, &service).await?
        }
        Commands::Labels { kind } => handle_labels(kind, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(
    action: UserAction,
    service: &UserService<PgUserRepository>,
) -> Result<()> {
    match action {
        UserAction::Create { email, name, yes } => create_user(service, email, name, yes).await,
        UserAction::List => list_users(service).await,
        UserAction::Delete { id, yes } => delete_user(service, id, yes).await,
    }
}

/// Registers a user, prompting for whatever was not passed as a flag.
///
/// The password is always read interactively and never echoed.
async fn create_user(
    service: &UserService<PgUserRepository>,
    email: Option<String>,
    name: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    println!();
    println!("{}", "User details:".bright_white().bold());
    println!("  Email: {}", email.cyan());
    println!("  Name:  {}", name.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let user = service
        .create_user(NewUserRequest {
            email,
            name,
            password,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!("{}", "✅ User created successfully!".green().bold());
    println!();
    println!("{}", "Act as this user with:".bright_white());
    println!(
        "  {}: {}",
        "X-User-Id".bright_cyan(),
        user.id.to_string().bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all users with status indicators.
///
/// # Output Format
///
/// ```text
/// 📋 Users
///
///   ID  Email                          Name                 Created           Status
///   ──────────────────────────────────────────────────────────────────────────────────
///   1   ferris@example.com             Ferris               2024-01-15 10:30  ACTIVE
///   2   old@example.com                Old Account          2024-01-16 14:20  DELETED
/// ```
async fn list_users(service: &UserService<PgUserRepository>) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let users = service
        .list_users()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<30} {:<20} {:<17} {:<8}",
        "ID".bright_white().bold(),
        "Email".bright_white().bold(),
        "Name".bright_white().bold(),
        "Created".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(82).bright_black());

    for user in &users {
        let status = if user.is_active() {
            "ACTIVE".green()
        } else {
            "DELETED".red()
        };

        println!(
            "  {:<3} {:<30} {:<20} {:<17} {}",
            user.id.to_string().bright_black(),
            user.email.cyan(),
            user.name,
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Soft-deletes a user after confirmation (default: No).
async fn delete_user(
    service: &UserService<PgUserRepository>,
    id: i64,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🗑️  Delete User".bright_blue().bold());
    println!();

    let user = service
        .get_user(id)
        .await
        .map_err(|e| anyhow::anyhow!("Cannot delete user {}: {}", id, e))?;

    println!("  Email: {}", user.email.cyan());
    println!("  Name:  {}", user.name.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this user?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_user(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete user: {}", e))?;

    println!();
    println!("{}", "✅ User deleted".green().bold());
    println!();

    Ok(())
}

/// Lists every label of one kind.
async fn handle_labels(kind: LabelKind, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgLabelRepository::new(Arc::new(pool.clone())));
    let service = LabelService::new(repo, kind);

    println!(
        "{}",
        format!("🏷️  {}", kind.table()).bright_blue().bold()
    );
    println!();

    let labels = service
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list {}: {}", kind.table(), e))?;

    if labels.is_empty() {
        println!("{}", "  None yet".yellow());
        return Ok(());
    }

    for label in &labels {
        println!(
            "  {:<5} {}",
            label.id.to_string().bright_black(),
            label.title.cyan()
        );
    }

    println!();
    println!("  Total: {}", labels.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();

            for table in ["users", "links", "categories", "types", "tags", "likes"] {
                let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
                    .fetch_one(pool)
                    .await
                    .with_context(|| format!("Failed to count {table}"))?;

                println!(
                    "  {:<11} {}",
                    format!("{table}:"),
                    count.to_string().bright_green().bold()
                );
            }
            println!();
        }
    }

    Ok(())
}
