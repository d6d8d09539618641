use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub admin_username: String,
    pub admin_password: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://library.db?mode=rwc".to_string()),
            admin_username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "diet".to_string()),
            admin_password: env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| "dietlb1983".to_string()),
        }
    }
}
