//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{BookRepository, CategoryRepository};
use crate::infrastructure::{SeaOrmBookRepository, SeaOrmCategoryRepository};

/// Application state shared with the presentation layer
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    /// Category repository
    pub category_repo: Arc<dyn CategoryRepository>,
    /// Book repository
    pub book_repo: Arc<dyn BookRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let category_repo = Arc::new(SeaOrmCategoryRepository::new(db.clone()));
        let book_repo = Arc::new(SeaOrmBookRepository::new(db.clone()));

        Self {
            db,
            category_repo,
            book_repo,
        }
    }

    /// Get the underlying database connection
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl AsRef<DatabaseConnection> for AppState {
    fn as_ref(&self) -> &DatabaseConnection {
        &self.db
    }
}
