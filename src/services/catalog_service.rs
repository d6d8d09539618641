//! Catalog Service - Business rules on top of the storage layer
//!
//! Validation, whitespace normalization, search filtering, and the
//! read/write capability checks live here; the repositories stay mechanical.

use std::sync::Arc;

use crate::domain::{BookRepository, CategoryRepository, CreateBookInput, DomainError};
use crate::infrastructure::auth::Session;
use crate::infrastructure::state::AppState;
use crate::models::Book;

/// Catalog operations exposed to the presentation layer.
#[derive(Clone)]
pub struct CatalogService {
    categories: Arc<dyn CategoryRepository>,
    books: Arc<dyn BookRepository>,
}

impl CatalogService {
    pub fn new(categories: Arc<dyn CategoryRepository>, books: Arc<dyn BookRepository>) -> Self {
        Self { categories, books }
    }

    /// Build a service from the shared application state.
    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.category_repo.clone(), state.book_repo.clone())
    }

    /// List every category name, alphabetically.
    pub async fn list_categories(&self, session: &Session) -> Result<Vec<String>, DomainError> {
        session.authorize_read()?;
        self.categories.list().await
    }

    /// List all books in a category (exact, case-sensitive match).
    pub async fn list_books(
        &self,
        session: &Session,
        category: &str,
    ) -> Result<Vec<Book>, DomainError> {
        session.authorize_read()?;
        self.books.find_by_category(category).await
    }

    /// List books in a category whose name contains `term`,
    /// case-insensitively. An empty or whitespace-only term disables the
    /// filter. Filtering happens in memory after the category fetch.
    pub async fn search_books(
        &self,
        session: &Session,
        category: &str,
        term: &str,
    ) -> Result<Vec<Book>, DomainError> {
        session.authorize_read()?;

        let books = self.books.find_by_category(category).await?;

        let term = term.trim();
        if term.is_empty() {
            return Ok(books);
        }

        let needle = term.to_lowercase();
        Ok(books
            .into_iter()
            .filter(|b| b.name.to_lowercase().contains(&needle))
            .collect())
    }

    /// Count all books across every category.
    pub async fn total_book_count(&self, session: &Session) -> Result<u64, DomainError> {
        session.authorize_read()?;
        self.books.count().await
    }

    /// Add a book. String fields are trimmed; name and number must be
    /// non-empty; an empty author becomes `None`; the target category must
    /// exist.
    pub async fn add_book(
        &self,
        session: &Session,
        input: CreateBookInput,
    ) -> Result<Book, DomainError> {
        session.authorize_write()?;

        let name = input.name.trim().to_string();
        let number = input.number.trim().to_string();
        let category = input.category.trim().to_string();
        let author = input
            .author
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string);

        if name.is_empty() {
            return Err(DomainError::Validation(
                "book name cannot be empty".to_string(),
            ));
        }
        if number.is_empty() {
            return Err(DomainError::Validation(
                "book number cannot be empty".to_string(),
            ));
        }
        if !self.categories.exists(&category).await? {
            return Err(DomainError::Validation(format!(
                "category '{}' does not exist",
                category
            )));
        }

        tracing::info!("Adding book '{}' to category '{}'", name, category);

        self.books
            .insert(CreateBookInput {
                name,
                number,
                author,
                category,
            })
            .await
    }

    /// Delete a book by id. Already-gone ids succeed silently.
    pub async fn delete_book(&self, session: &Session, id: i32) -> Result<(), DomainError> {
        session.authorize_write()?;

        tracing::info!("Deleting book {}", id);
        self.books.delete(id).await
    }

    /// Add a category. Duplicate names are tolerated.
    pub async fn add_category(&self, session: &Session, name: &str) -> Result<(), DomainError> {
        session.authorize_write()?;

        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation(
                "category name cannot be empty".to_string(),
            ));
        }

        tracing::info!("Adding category '{}'", name);
        self.categories.insert(name).await
    }

    /// Delete a category and all of its books. Confirmation is the
    /// presentation layer's concern; the cascade here is unconditional.
    pub async fn delete_category(&self, session: &Session, name: &str) -> Result<(), DomainError> {
        session.authorize_write()?;

        tracing::info!("Deleting category '{}' and its books", name);
        self.categories.delete(name).await
    }
}
