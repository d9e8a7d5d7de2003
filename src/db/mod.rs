//! Database layer for data persistence and access.
//!
//! This module implements the data access layer over a MongoDB collection.
//! It follows the Repository pattern to provide clean abstractions over
//! database operations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  (API request handlers)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │ Repositories│  (db::handlers - collection operations)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   Models    │  (db::models - stored documents)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   MongoDB   │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`handlers`]: Repository implementations for CRUD operations
//! - [`models`]: Document structures as stored in the collection
//! - [`errors`]: Database-specific error types
//!
//! The repository holds a [`mongodb::Collection`] handle opened once at
//! process start. Collection handles are cheap to clone and safe to share
//! across concurrent request tasks, so a single shared instance serves the
//! whole process.

pub mod errors;
pub mod handlers;
pub mod models;
