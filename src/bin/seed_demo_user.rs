// ABOUTME: Demo user seeder for local development and smoke testing
// ABOUTME: Idempotently creates the default EverGain login in the configured database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EverGain

//! Demo user seeder for the EverGain backend.
//!
//! Creates the default login used by local frontends and smoke tests.
//! Running it twice is safe: an existing account is left untouched.
//!
//! Usage:
//! ```bash
//! # Seed the default demo account
//! cargo run --bin seed-demo-user
//!
//! # Seed into a specific database
//! cargo run --bin seed-demo-user -- --database-url sqlite:./dev.db
//! ```

use std::env;

use anyhow::{anyhow, Result};
use clap::Parser;
use evergain_server::{
    constants::{defaults, env_vars, limits},
    database::{Database, UserStore},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Default demo credentials - allows login for local testing
const DEMO_EMAIL: &str = "admin@evergain.com";
const DEMO_PASSWORD: &str = "password123";
const DEMO_FULL_NAME: &str = "Admin EverGain";

#[derive(Parser)]
#[command(
    name = "seed-demo-user",
    about = "EverGain demo user seeder",
    long_about = "Idempotently create the demo login used by local frontends and smoke tests"
)]
struct SeedArgs {
    /// Database URL override (defaults to DATABASE_URL from the environment)
    #[arg(long)]
    database_url: Option<String>,

    /// Demo account email
    #[arg(long, default_value = DEMO_EMAIL)]
    email: String,

    /// Demo account password
    #[arg(long, default_value = DEMO_PASSWORD)]
    password: String,

    /// Demo account display name
    #[arg(long, default_value = DEMO_FULL_NAME)]
    full_name: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    // .env is optional for the seeder
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

    let database_url = args.database_url.unwrap_or_else(|| {
        env::var(env_vars::DATABASE_URL).unwrap_or_else(|_| defaults::DATABASE_URL.to_owned())
    });

    let database = Database::new(&database_url, limits::DB_MAX_CONNECTIONS).await?;
    let users = UserStore::new(database.pool().clone());

    if let Some(existing) = users.find_by_email(&args.email).await? {
        info!(
            user_id = existing.id,
            email = %args.email,
            "Demo user already exists, nothing to do"
        );
        return Ok(());
    }

    info!(email = %args.email, "Creating demo user");
    let password_hash = bcrypt::hash(&args.password, bcrypt::DEFAULT_COST)?;
    let user = users.create(&args.full_name, &args.email, &password_hash).await?;

    info!(user_id = user.id, "Demo user created successfully");
    info!("Email: {}", args.email);
    info!("Password: {}", args.password);

    Ok(())
}
