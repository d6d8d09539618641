use bibliodesk::db;
use bibliodesk::domain::{BookRepository, CategoryRepository, CreateBookInput};
use bibliodesk::infrastructure::{SeaOrmBookRepository, SeaOrmCategoryRepository, seed};
use sea_orm::{DatabaseConnection, EntityTrait};

// Helper to create a test database
async fn setup_test_db() -> DatabaseConnection {
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

fn book_input(name: &str, number: &str, author: Option<&str>, category: &str) -> CreateBookInput {
    CreateBookInput {
        name: name.to_string(),
        number: number.to_string(),
        author: author.map(str::to_string),
        category: category.to_string(),
    }
}

#[tokio::test]
async fn test_init_db_is_idempotent_on_disk() {
    let path = std::env::temp_dir().join(format!("bibliodesk_test_{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite://{}?mode=rwc", path.display());

    let db = db::init_db(&url).await.expect("first init");
    let repo = SeaOrmCategoryRepository::new(db.clone());
    repo.insert("Fiction").await.unwrap();
    drop(repo);
    drop(db);

    // A second startup must keep the schema and the data
    let db = db::init_db(&url).await.expect("second init");
    let repo = SeaOrmCategoryRepository::new(db);
    assert_eq!(repo.list().await.unwrap(), vec!["Fiction"]);

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn test_duplicate_category_insert_is_silent() {
    let db = setup_test_db().await;
    let repo = SeaOrmCategoryRepository::new(db);

    repo.insert("Fiction").await.unwrap();
    repo.insert("Fiction").await.unwrap();

    assert_eq!(repo.list().await.unwrap(), vec!["Fiction"]);
    assert!(repo.exists("Fiction").await.unwrap());
    assert!(!repo.exists("fiction").await.unwrap());
}

#[tokio::test]
async fn test_book_ids_are_assigned_sequentially() {
    let db = setup_test_db().await;
    let categories = SeaOrmCategoryRepository::new(db.clone());
    let books = SeaOrmBookRepository::new(db);

    categories.insert("Fiction").await.unwrap();
    let first = books
        .insert(book_input("Hamlet", "F-001", None, "Fiction"))
        .await
        .unwrap();
    let second = books
        .insert(book_input("Dune", "F-002", Some("Frank Herbert"), "Fiction"))
        .await
        .unwrap();

    assert!(second.id > first.id);

    // Insertion order within a category
    let listed = books.find_by_category("Fiction").await.unwrap();
    assert_eq!(listed[0], first);
    assert_eq!(listed[1], second);
}

#[tokio::test]
async fn test_duplicate_name_number_pairs_are_allowed() {
    let db = setup_test_db().await;
    let categories = SeaOrmCategoryRepository::new(db.clone());
    let books = SeaOrmBookRepository::new(db);

    categories.insert("Fiction").await.unwrap();
    books
        .insert(book_input("Hamlet", "F-001", None, "Fiction"))
        .await
        .unwrap();
    books
        .insert(book_input("Hamlet", "F-001", None, "Fiction"))
        .await
        .unwrap();

    assert_eq!(books.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_category_match_is_exact_and_case_sensitive() {
    let db = setup_test_db().await;
    let categories = SeaOrmCategoryRepository::new(db.clone());
    let books = SeaOrmBookRepository::new(db);

    categories.insert("Fiction").await.unwrap();
    books
        .insert(book_input("Hamlet", "F-001", None, "Fiction"))
        .await
        .unwrap();

    assert_eq!(books.find_by_category("Fiction").await.unwrap().len(), 1);
    assert!(books.find_by_category("fiction").await.unwrap().is_empty());
    assert!(books.find_by_category("Fict").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_cascade_delete_removes_category_and_books() {
    let db = setup_test_db().await;
    let categories = SeaOrmCategoryRepository::new(db.clone());
    let books = SeaOrmBookRepository::new(db.clone());

    categories.insert("Fiction").await.unwrap();
    categories.insert("History").await.unwrap();
    books
        .insert(book_input("Hamlet", "F-001", None, "Fiction"))
        .await
        .unwrap();
    books
        .insert(book_input("War and Peace", "F-002", None, "Fiction"))
        .await
        .unwrap();
    books
        .insert(book_input("The Discovery of India", "H-001", None, "History"))
        .await
        .unwrap();

    categories.delete("Fiction").await.unwrap();

    assert_eq!(categories.list().await.unwrap(), vec!["History"]);
    assert!(books.find_by_category("Fiction").await.unwrap().is_empty());
    assert_eq!(books.count().await.unwrap(), 1);

    // No orphan rows remain in the books table
    let rows = bibliodesk::models::book::Entity::find()
        .all(&db)
        .await
        .unwrap();
    assert!(rows.iter().all(|b| b.category == "History"));
}

#[tokio::test]
async fn test_delete_book_by_missing_id_is_noop() {
    let db = setup_test_db().await;
    let books = SeaOrmBookRepository::new(db);

    books.delete(42).await.unwrap();
    assert_eq!(books.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_seed_demo_data() {
    let db = setup_test_db().await;
    seed::seed_demo_data(&db).await.expect("seed");

    let categories = SeaOrmCategoryRepository::new(db.clone());
    let books = SeaOrmBookRepository::new(db);

    assert_eq!(
        categories.list().await.unwrap(),
        vec!["Fiction", "History", "Science"]
    );
    assert_eq!(books.count().await.unwrap(), 4);
    assert_eq!(books.find_by_category("Fiction").await.unwrap().len(), 2);
}
