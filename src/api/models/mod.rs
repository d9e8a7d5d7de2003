//! Request/response data structures for API communication.

pub mod products;
