//! SeaORM implementation of CategoryRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::domain::{CategoryRepository, DomainError};
use crate::models::book::{Column as BookColumn, Entity as BookEntity};
use crate::models::category::{ActiveModel, Column, Entity as CategoryEntity};

/// SeaORM-based implementation of CategoryRepository
pub struct SeaOrmCategoryRepository {
    db: DatabaseConnection,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn list(&self) -> Result<Vec<String>, DomainError> {
        let categories = CategoryEntity::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await?;

        Ok(categories.into_iter().map(|c| c.name).collect())
    }

    async fn exists(&self, name: &str) -> Result<bool, DomainError> {
        let found = CategoryEntity::find()
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await?;

        Ok(found.is_some())
    }

    async fn insert(&self, name: &str) -> Result<(), DomainError> {
        // Find-then-insert keeps duplicate adds silent
        let existing = CategoryEntity::find()
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await?;

        if existing.is_none() {
            let category = ActiveModel {
                name: Set(name.to_string()),
                ..Default::default()
            };
            category.insert(&self.db).await?;
        }

        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<(), DomainError> {
        // The category row and its books go in one transaction so a reader
        // never observes a half-deleted cascade.
        let txn = self.db.begin().await?;

        CategoryEntity::delete_many()
            .filter(Column::Name.eq(name))
            .exec(&txn)
            .await?;

        BookEntity::delete_many()
            .filter(BookColumn::Category.eq(name))
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Ok(())
    }
}
