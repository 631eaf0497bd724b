//! Seed binary for provisioning the initial administrator account
//!
//! Account creation is out-of-band: there is no registration endpoint.
//! Run with: cargo run --bin seed

use auth::PgAccountRepository;
use auth::domain::entity::account::Account;
use auth::domain::repository::AccountRepository;
use auth::domain::value_object::{
    account_password::{AccountPassword, RawPassword},
    account_role::AccountRole,
    email::Email,
};
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");
    let admin_email = std::env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL must be set");
    let admin_password = std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set");

    let email =
        Email::new(admin_email).map_err(|e| anyhow::anyhow!("Invalid ADMIN_EMAIL: {}", e))?;
    let raw = RawPassword::new(admin_password)
        .map_err(|e| anyhow::anyhow!("Invalid ADMIN_PASSWORD: {}", e))?;
    let password_hash =
        AccountPassword::from_raw(&raw).map_err(|e| anyhow::anyhow!("{}", e))?;

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await?;

    let existing: Option<(String,)> =
        sqlx::query_as("SELECT email FROM accounts WHERE email = $1")
            .bind(email.as_str())
            .fetch_optional(&pool)
            .await?;

    if existing.is_some() {
        // Re-running the seed rotates the password
        sqlx::query(
            "UPDATE accounts SET password_hash = $1, updated_at = now() WHERE email = $2",
        )
        .bind(password_hash.as_phc_string())
        .bind(email.as_str())
        .execute(&pool)
        .await?;

        println!("Updated password for {}", email);
    } else {
        let account = Account::new(email.clone(), password_hash, AccountRole::Admin);

        let repo = PgAccountRepository::new(pool);
        repo.create(&account)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create account: {}", e))?;

        println!("Created administrator {}", email);
    }

    Ok(())
}
