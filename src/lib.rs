pub mod domain;
pub mod infrastructure;
pub mod models;
pub mod services;

// Convenience re-exports for the embedding application
pub use infrastructure::auth;
pub use infrastructure::config;
pub use infrastructure::db;
pub use infrastructure::seed;
