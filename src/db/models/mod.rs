//! Document structures as stored in the database.
//!
//! These are the persistence-side counterparts of the API models in
//! [`crate::api::models`]. Conversions between the two live next to the API
//! models; identifiers are real [`mongodb::bson::oid::ObjectId`] values here
//! and hex strings on the wire.

pub mod products;
