use sea_orm::*;

use crate::models::{book, category};

pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    // 1. Create Categories
    let categories = vec!["Fiction", "History", "Science"];

    for name in &categories {
        category::Entity::insert(category::ActiveModel {
            name: Set((*name).to_owned()),
            ..Default::default()
        })
        .on_conflict(
            sea_orm::sea_query::OnConflict::column(category::Column::Name)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;
    }

    // 2. Create Books
    let books = vec![
        ("War and Peace", "F-001", Some("Leo Tolstoy"), "Fiction"),
        ("Hamlet", "F-002", Some("William Shakespeare"), "Fiction"),
        (
            "A Brief History of Time",
            "S-001",
            Some("Stephen Hawking"),
            "Science",
        ),
        (
            "The Discovery of India",
            "H-001",
            Some("Jawaharlal Nehru"),
            "History",
        ),
    ];

    for (name, number, author, cat) in books {
        book::Entity::insert(book::ActiveModel {
            name: Set(name.to_owned()),
            number: Set(number.to_owned()),
            author: Set(author.map(str::to_owned)),
            category: Set(cat.to_owned()),
            ..Default::default()
        })
        .exec(db)
        .await?;
    }

    Ok(())
}
