use sea_orm::DatabaseConnection;

/// Shared application state, constructed once at startup and handed to the
/// router. The database handle lives here rather than in a global.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub weather_url: String,
}

impl AppState {
    pub fn new(db: DatabaseConnection, weather_url: String) -> Self {
        Self { db, weather_url }
    }
}
