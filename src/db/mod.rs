//! Database module - AppState and store access
//!
//! Split into submodules per entity:
//! - `customer` - customer + subscription lookups
//! - `ticket` - support ticket + contact lookups
//!
//! Every lookup opens its own read-only connection and releases it before
//! returning, success or failure. Nothing here holds a connection across
//! calls.

mod customer;
mod ticket;

use std::env;
use std::path::PathBuf;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection, SqliteConnection};
use thiserror::Error;

pub const DEFAULT_DATABASE_PATH: &str = "data/technova.db";
pub const DEFAULT_LOGS_DIR: &str = "logs";

/// Errors raised by the store layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open database at {path}: {source}")]
    Connect {
        path: String,
        #[source]
        source: sqlx::Error,
    },
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),
}

#[derive(Clone)]
pub struct AppState {
    pub database_path: String,
    pub logs_dir: PathBuf,
    pub feeds: crate::feed::FeedClient,
}

impl AppState {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let database_path = env::var("TECHNOVA_DATABASE_PATH")
            .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());
        let logs_dir = env::var("TECHNOVA_LOGS_DIR").unwrap_or_else(|_| DEFAULT_LOGS_DIR.to_string());
        Self::new(database_path, logs_dir)
    }

    pub fn new(database_path: impl Into<String>, logs_dir: impl Into<PathBuf>) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent("technova-support-server/0.4")
            .build()
            .expect("Failed to create reqwest client");

        AppState {
            database_path: database_path.into(),
            logs_dir: logs_dir.into(),
            feeds: crate::feed::FeedClient::new(http_client),
        }
    }

    /// Open a read-only connection scoped to a single invocation.
    pub(crate) async fn acquire(&self) -> Result<SqliteConnection, StoreError> {
        SqliteConnectOptions::new()
            .filename(&self.database_path)
            .read_only(true)
            .connect()
            .await
            .map_err(|source| StoreError::Connect {
                path: self.database_path.clone(),
                source,
            })
    }

    /// Create the store tables if the database file does not have them yet.
    /// The request path is strictly read-only; this is the only writer.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        let mut conn = SqliteConnectOptions::new()
            .filename(&self.database_path)
            .create_if_missing(true)
            .connect()
            .await
            .map_err(|source| StoreError::Connect {
                path: self.database_path.clone(),
                source,
            })?;

        let mut result = Ok(());
        for statement in SCHEMA {
            if let Err(err) = sqlx::query(statement).execute(&mut conn).await {
                result = Err(StoreError::Query(err));
                break;
            }
        }

        conn.close().await.ok();
        result
    }
}

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS customers (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        industry TEXT NOT NULL,
        size TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS subscriptions (
        customer_id TEXT PRIMARY KEY REFERENCES customers(id),
        plan TEXT NOT NULL,
        seats INTEGER NOT NULL,
        renewal_date TEXT NOT NULL,
        status TEXT NOT NULL,
        monthly_value REAL NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS contacts (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        title TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS support_tickets (
        id TEXT PRIMARY KEY,
        customer_id TEXT NOT NULL REFERENCES customers(id),
        subject TEXT NOT NULL,
        description TEXT NOT NULL,
        status TEXT NOT NULL,
        priority TEXT NOT NULL,
        created_date TEXT NOT NULL,
        resolved_date TEXT,
        contact_id TEXT
    )",
];
