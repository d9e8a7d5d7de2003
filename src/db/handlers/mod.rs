//! Repository implementations for database access.
//!
//! Each repository wraps a collection handle and provides strongly-typed CRUD
//! operations, returning domain models from [`crate::db::models`]. The
//! [`Repository`] trait defines the common operation set.
//!
//! # Common Pattern
//!
//! ```ignore
//! use catalogd::db::handlers::{Products, Repository};
//!
//! async fn example(db: &mongodb::Database) -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = Products::new(db, "products");
//!
//!     let products = repo.list().await?;
//!     if let Some(product) = repo.get_by_id(id).await? {
//!         println!("Found product: {}", product.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod products;
pub mod repository;

pub use products::Products;
pub use repository::Repository;
