mod repository;

pub use repository::SqliteKvStore;
