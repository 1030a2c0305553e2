//! CLI administration tool for url-alias.
//!
//! Provides commands for provisioning user accounts and performing
//! database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a new user
//! cargo run --bin admin -- user create --username alice
//!
//! # List all users
//! cargo run --bin admin -- user list
//!
//! # Deactivate / reactivate a user
//! cargo run --bin admin -- user deactivate alice
//! cargo run --bin admin -- user activate alice
//!
//! # Delete a user (links and clicks go with it)
//! cargo run --bin admin -- user delete alice
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use url_alias::application::services::AuthService;
use url_alias::domain::repositories::UserRepository;
use url_alias::infrastructure::persistence::PgUserRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing url-alias.
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
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
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
    /// Create a new user account
    Create {
        /// Username (prompted if not provided)
        #[arg(short, long)]
        username: Option<String>,
    },

    /// List all users
    List,

    /// Reactivate a user account
    Activate {
        /// Username to activate
        username: String,
    },

    /// Deactivate a user account (credentials stop working)
    Deactivate {
        /// Username to deactivate
        username: String,
    },

    /// Delete a user and all their links
    Delete {
        /// Username to delete
        username: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));

    match action {
        UserAction::Create { username } => {
            create_user(repo, username).await?;
        }
        UserAction::List => {
            list_users(repo).await?;
        }
        UserAction::Activate { username } => {
            set_user_active(repo, &username, true).await?;
        }
        UserAction::Deactivate { username } => {
            set_user_active(repo, &username, false).await?;
        }
        UserAction::Delete { username } => {
            delete_user(repo, &username).await?;
        }
    }

    Ok(())
}

/// Creates a new user account with interactive prompts.
///
/// The password is read twice without echo and hashed with Argon2id
/// before storage; the plaintext never touches the database.
async fn create_user(repo: Arc<PgUserRepository>, username: Option<String>) -> Result<()> {
    println!("{}", "Create User".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    let service = AuthService::new(repo);
    let user = service
        .register(&username, &password)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!("{}", "User created successfully!".green().bold());
    println!("  ID:       {}", user.id.to_string().bright_black());
    println!("  Username: {}", user.username.cyan());
    println!();
    println!("{}", "Authenticate API requests with:".bright_white());
    println!(
        "  curl -u {}:<password> http://localhost:3000/api/links",
        username.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all user accounts with status indicators.
async fn list_users(repo: Arc<PgUserRepository>) -> Result<()> {
    println!("{}", "Users".bright_blue().bold());
    println!();

    let users = repo
        .list()
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
        "  {:<5} {:<30} {:<10}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(47).bright_black());

    for user in &users {
        let status = if user.is_active {
            "ACTIVE".green()
        } else {
            "INACTIVE".red()
        };

        println!(
            "  {:<5} {:<30} {}",
            user.id.to_string().bright_black(),
            user.username.cyan(),
            status
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Flips a user's active flag by username.
async fn set_user_active(repo: Arc<PgUserRepository>, username: &str, active: bool) -> Result<()> {
    let user = repo
        .find_by_username(username)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("User not found")?;

    let changed = repo
        .set_active(user.id, active)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    if changed {
        let verb = if active { "activated" } else { "deactivated" };
        println!("{}", format!("User '{}' {}", username, verb).green());
    } else {
        println!("{}", "User not found".yellow());
    }

    Ok(())
}

/// Deletes a user after confirmation; their links and clicks cascade.
async fn delete_user(repo: Arc<PgUserRepository>, username: &str) -> Result<()> {
    println!("{}", "Delete User".bright_blue().bold());
    println!();

    let user = repo
        .find_by_username(username)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("User not found")?;

    println!("  Username: {}", user.username.cyan());
    println!("  ID:       {}", user.id.to_string().bright_black());
    println!();
    println!(
        "{}",
        "All of this user's links and click history will be deleted."
            .red()
            .bold()
    );
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Delete this user?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "Cancelled".red());
        return Ok(());
    }

    repo.delete(user.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete user: {}", e))?;

    println!("{}", "User deleted".green().bold());

    Ok(())
}

/// Dispatches database operation commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            sqlx::query_scalar::<_, i32>("SELECT 1")
                .fetch_one(pool)
                .await
                .context("Database check failed")?;

            println!("{}", "Database connection OK".green().bold());
        }
    }

    Ok(())
}
