use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{config::ConfigError, AppError},
    service::user::UserService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema, including the booking overlap trigger, is up-to-date. This function must complete
/// successfully before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions are stored in the same Sqlite database as the application data and expire after
/// seven days of inactivity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the router
/// - `Err(AppError::InternalError)` - The session table could not be created
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {e}")))?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(7)));

    Ok(session)
}

/// HTTP client used for the email API.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap_or_default()
}

/// Allows the frontend at `APP_URL` to call the API with its session cookie.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = config.app_url.trim_end_matches('/');
    let origin = HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidEnvVar {
        name: "APP_URL".to_string(),
        value: config.app_url.clone(),
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]))
}

/// Creates the default admin account when no admin exists.
///
/// Does nothing beyond logging when the `DEFAULT_ADMIN_*` variables are not set.
pub async fn ensure_default_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let Some(admin) = &config.default_admin else {
        if !UserRepository::new(db).admin_exists().await? {
            tracing::warn!(
                "No admin account exists; set DEFAULT_ADMIN_EMAIL and DEFAULT_ADMIN_PASSWORD to create one"
            );
        }
        return Ok(());
    };

    if UserService::new(db).ensure_default_admin(admin).await?.is_none() {
        tracing::info!("Admin account present, skipping default admin creation");
    }

    Ok(())
}
