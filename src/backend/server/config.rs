/**
 * Server Configuration
 *
 * This module handles loading the optional PostgreSQL database connection.
 *
 * # Error Handling
 *
 * Database errors are logged but do not prevent server startup. When the
 * pool cannot be created it is set to `None` and the server continues
 * without chat history; generation keeps working.
 */

#[cfg(feature = "ssr")]
use sqlx::PgPool;

/// Database configuration result
///
/// Contains the database connection pool if successfully configured,
/// or `None` if the database is not available.
#[cfg(feature = "ssr")]
pub type DatabaseConfig = Option<PgPool>;

/// Load and initialize database connection pool
///
/// This function:
/// 1. Takes the configured `DATABASE_URL`, if any
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs the embedded migrations
///
/// # Returns
///
/// - `Some(PgPool)` if the database is reachable
/// - `None` if no URL is configured or the connection fails
///
/// # Example
///
/// ```rust,no_run
/// use blogverse::backend::server::config::load_database;
///
/// # async fn example() {
/// let db_pool = load_database(Some("postgres://localhost/blogverse")).await;
/// if db_pool.is_none() {
///     // Chat history disabled
/// }
/// # }
/// ```
#[cfg(feature = "ssr")]
pub async fn load_database(database_url: Option<&str>) -> DatabaseConfig {
    let Some(database_url) = database_url else {
        tracing::warn!("DATABASE_URL not set. Chat history will be disabled.");
        return None;
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Chat history will be disabled.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}
