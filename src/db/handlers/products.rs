//! Database repository for catalog products.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::products::{Product, ProductCreateDBRequest, ProductUpdateDBRequest},
};
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{doc, oid::ObjectId},
};
use tracing::instrument;

/// Repository over the product catalog collection.
///
/// Holds the collection handle opened once at startup. Cloning is cheap (the
/// driver shares the underlying client), so the same instance is handed to
/// every request task through the application state.
#[derive(Clone)]
pub struct Products {
    collection: Collection<Product>,
}

impl Products {
    /// Create a new Products repository over `collection` in `db`
    pub fn new(db: &Database, collection: &str) -> Self {
        Self {
            collection: db.collection(collection),
        }
    }
}

#[async_trait::async_trait]
impl Repository for Products {
    type CreateRequest = ProductCreateDBRequest;
    type UpdateRequest = ProductUpdateDBRequest;
    type Response = Product;
    type Id = ObjectId;

    /// Insert a new product; the store assigns the identifier, which is read
    /// back from the insert result.
    #[instrument(skip(self, request), fields(name = %request.name), err)]
    async fn create(&self, request: &ProductCreateDBRequest) -> Result<Product> {
        let mut product = Product {
            id: None,
            name: request.name.clone(),
            price: request.price,
            category: request.category.clone(),
            description: request.description.clone(),
        };

        let result = self.collection.insert_one(&product).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| DbError::Other(anyhow::anyhow!("store returned a non-ObjectId identifier")))?;
        product.id = Some(id);

        Ok(product)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&self, id: ObjectId) -> Result<Option<Product>> {
        let product = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(product)
    }

    /// Every record in the collection, in store order.
    ///
    /// Unbounded: large collections materialize fully in memory.
    #[instrument(skip(self), err)]
    async fn list(&self) -> Result<Vec<Product>> {
        let products = self.collection.find(doc! {}).await?.try_collect().await?;
        Ok(products)
    }

    /// Replace the full record matching `id`.
    ///
    /// The replacement carries the looked-up id, never one supplied by the
    /// client. No-op when no record matches; callers check existence first.
    #[instrument(skip(self, request), err)]
    async fn update(&self, id: ObjectId, request: &ProductUpdateDBRequest) -> Result<()> {
        let replacement = Product {
            id: Some(id),
            name: request.name.clone(),
            price: request.price,
            category: request.category.clone(),
            description: request.description.clone(),
        };

        self.collection.replace_one(doc! { "_id": id }, &replacement).await?;
        Ok(())
    }

    #[instrument(skip(self), err)]
    async fn delete(&self, id: ObjectId) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
