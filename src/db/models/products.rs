//! Database models for catalog products.

use crate::api::models::products::{ProductCreate, ProductUpdate};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A catalog product as stored in the collection.
///
/// `id` is the store-assigned `_id`; it is `None` on a record that has not
/// been inserted yet and is skipped during serialization so the store
/// generates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub description: String,
}

/// Database request for creating a new product
#[derive(Debug, Clone)]
pub struct ProductCreateDBRequest {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub description: String,
}

impl From<ProductCreate> for ProductCreateDBRequest {
    fn from(api: ProductCreate) -> Self {
        Self {
            name: api.name,
            price: api.price,
            category: api.category,
            description: api.description,
        }
    }
}

/// Database request for replacing an existing product.
///
/// Carries no identifier: the replacement is keyed by the id the caller looked
/// up, never by anything the client supplied in the body.
#[derive(Debug, Clone)]
pub struct ProductUpdateDBRequest {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub description: String,
}

impl From<ProductUpdate> for ProductUpdateDBRequest {
    fn from(api: ProductUpdate) -> Self {
        Self {
            name: api.name,
            price: api.price,
            category: api.category,
            description: api.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{from_document, to_document};

    fn widget() -> Product {
        Product {
            id: None,
            name: "Widget".to_string(),
            price: 9.99,
            category: "Tools".to_string(),
            description: "A widget".to_string(),
        }
    }

    #[test]
    fn test_unsaved_product_omits_id() {
        let doc = to_document(&widget()).unwrap();

        // The store assigns `_id` at insert time; an unsaved record must not
        // serialize one.
        assert!(!doc.contains_key("_id"));
        assert_eq!(doc.get_str("name").unwrap(), "Widget");
        assert_eq!(doc.get_f64("price").unwrap(), 9.99);
        assert_eq!(doc.get_str("category").unwrap(), "Tools");
        assert_eq!(doc.get_str("description").unwrap(), "A widget");
    }

    #[test]
    fn test_saved_product_roundtrips_through_bson() {
        let id = ObjectId::new();
        let product = Product {
            id: Some(id),
            ..widget()
        };

        let doc = to_document(&product).unwrap();
        assert_eq!(doc.get_object_id("_id").unwrap(), id);

        let back: Product = from_document(doc).unwrap();
        assert_eq!(back, product);
    }
}
