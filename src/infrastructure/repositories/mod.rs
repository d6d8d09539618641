//! Repository implementations using SeaORM

pub mod book_repository;
pub mod category_repository;

pub use book_repository::SeaOrmBookRepository;
pub use category_repository::SeaOrmCategoryRepository;
