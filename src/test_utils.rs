//! Test utilities shared by the unit and integration tests.

use crate::config::{Config, DatabaseSettings};
use mongodb::{Client, Database, bson::oid::ObjectId};

/// Build a configuration pointing at `url`/`database` with the default
/// collection name. Port 0 keeps test servers off real interfaces.
pub fn create_test_config(url: &str, database: &str) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: None,
        database: DatabaseSettings {
            url: url.to_string(),
            name: database.to_string(),
            collection: "products".to_string(),
        },
    }
}

/// Build a test server with no live store behind it.
///
/// The driver connects lazily, so routing-level behavior (health, malformed
/// identifiers, body rejections) is testable without a running MongoDB.
pub async fn create_test_app() -> axum_test::TestServer {
    let config = create_test_config("mongodb://localhost:27017", "catalogd_test");
    let app = crate::Application::new(config).await.expect("Failed to create application");
    app.into_test_server()
}

/// Handle to a uniquely-named throwaway database on the store named by
/// `MONGODB_URI`.
pub struct TestDatabase {
    pub uri: String,
    pub name: String,
    pub database: Database,
}

impl TestDatabase {
    /// Drop the throwaway database. Best-effort: a failure here only leaves
    /// a stray test database behind.
    pub async fn drop(self) {
        if let Err(e) = self.database.drop().await {
            eprintln!("failed to drop test database {}: {e}", self.name);
        }
    }
}

/// Connect to the store named by `MONGODB_URI` and create a uniquely-named
/// database for one test. Returns `None` when the variable is unset, in
/// which case the caller should skip.
pub async fn test_database(label: &str) -> Option<TestDatabase> {
    let uri = std::env::var("MONGODB_URI").ok()?;

    let client = Client::with_uri_str(&uri)
        .await
        .expect("failed to build MongoDB client for tests");
    let name = format!("catalogd_test_{label}_{}", ObjectId::new().to_hex());
    let database = client.database(&name);

    Some(TestDatabase { uri, name, database })
}
