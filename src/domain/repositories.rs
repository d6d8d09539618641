//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;
use crate::models::Book;

/// Input for creating a book
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CreateBookInput {
    pub name: String,
    pub number: String,
    pub author: Option<String>,
    pub category: String,
}

/// Repository trait for Category entity
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Every category name, alphabetical
    async fn list(&self) -> Result<Vec<String>, DomainError>;

    /// True when a category with this exact name exists
    async fn exists(&self, name: &str) -> Result<bool, DomainError>;

    /// Insert if absent; succeeds silently when the name is already present
    async fn insert(&self, name: &str) -> Result<(), DomainError>;

    /// Delete the category and every book referencing it, in one transaction
    async fn delete(&self, name: &str) -> Result<(), DomainError>;
}

/// Repository trait for Book entity
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All books whose category exactly equals the argument
    async fn find_by_category(&self, category: &str) -> Result<Vec<Book>, DomainError>;

    /// Create a new book
    async fn insert(&self, input: CreateBookInput) -> Result<Book, DomainError>;

    /// Delete a book by ID; a missing id is a no-op
    async fn delete(&self, id: i32) -> Result<(), DomainError>;

    /// Count all books across every category
    async fn count(&self) -> Result<u64, DomainError>;
}
