//! SeaORM implementation of BookRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::{BookRepository, CreateBookInput, DomainError};
use crate::models::Book;
use crate::models::book::{ActiveModel, Column, Entity as BookEntity};

/// SeaORM-based implementation of BookRepository
pub struct SeaOrmBookRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepository for SeaOrmBookRepository {
    async fn find_by_category(&self, category: &str) -> Result<Vec<Book>, DomainError> {
        let books = BookEntity::find()
            .filter(Column::Category.eq(category))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(books.into_iter().map(Book::from).collect())
    }

    async fn insert(&self, input: CreateBookInput) -> Result<Book, DomainError> {
        let book = ActiveModel {
            name: Set(input.name),
            number: Set(input.number),
            author: Set(input.author),
            category: Set(input.category),
            ..Default::default()
        };

        let model = book.insert(&self.db).await?;
        Ok(Book::from(model))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        // Deleting an id that is already gone is not an error
        BookEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count = BookEntity::find().count(&self.db).await?;
        Ok(count)
    }
}
