//! API request/response models for catalog products.

use crate::db::models::products::Product;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating a product.
///
/// Carries no identifier: the store assigns one at insert time. A client
/// that sends an `id` field anyway has it dropped during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub description: String,
}

/// Request body for replacing a product.
///
/// Updates are wholesale replacements, not partial patches; the body has the
/// same shape as a create request. Any client-supplied `id` is discarded and
/// the path identifier is used instead.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductUpdate {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub description: String,
}

/// A catalog product as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    /// Store-assigned identifier, rendered as a 24-character hex string
    #[schema(example = "65f0c0d2a7e4b9d3a1f2c3d4")]
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub description: String,
}

impl From<Product> for ProductResponse {
    fn from(record: Product) -> Self {
        Self {
            id: record.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: record.name,
            price: record.price,
            category: record.category,
            description: record.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;
    use serde_json::json;

    #[test]
    fn test_response_renders_store_id_as_hex() {
        let id = ObjectId::new();
        let record = Product {
            id: Some(id),
            name: "Widget".to_string(),
            price: 9.99,
            category: "Tools".to_string(),
            description: "A widget".to_string(),
        };

        let response = ProductResponse::from(record);
        assert_eq!(response.id, id.to_hex());
        assert_eq!(response.id.len(), 24);
        assert!(response.id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_create_request_drops_client_supplied_id() {
        let create: ProductCreate = serde_json::from_value(json!({
            "id": "65f0c0d2a7e4b9d3a1f2c3d4",
            "name": "Widget",
            "price": 9.99,
            "category": "Tools",
            "description": "A widget"
        }))
        .unwrap();

        assert_eq!(create.name, "Widget");
        // No id field exists to round-trip
        let value = serde_json::to_value(&create).unwrap();
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_create_request_requires_all_fields() {
        let missing_price = serde_json::from_value::<ProductCreate>(json!({
            "name": "Widget",
            "category": "Tools",
            "description": "A widget"
        }));
        assert!(missing_price.is_err());
    }

    #[test]
    fn test_response_serializes_price_as_json_number() {
        let response = ProductResponse {
            id: "65f0c0d2a7e4b9d3a1f2c3d4".to_string(),
            name: "Widget".to_string(),
            price: 9.99,
            category: "Tools".to_string(),
            description: "A widget".to_string(),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert!(value["price"].is_f64());
        assert_eq!(value["id"], "65f0c0d2a7e4b9d3a1f2c3d4");
    }
}
