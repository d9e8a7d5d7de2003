use crate::{
    AppState,
    api::models::products::{ProductCreate, ProductResponse, ProductUpdate},
    db::handlers::Repository,
    errors::{Error, Result},
};
use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
};
use mongodb::bson::oid::ObjectId;

/// Parse a path identifier into an ObjectId.
///
/// Identifiers that are not exactly 24 hex characters cannot name any stored
/// record, so they get the same generic 404 an unmatched route would - the
/// persistence layer is never reached.
fn parse_product_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| Error::NotFound {
        resource: "product".to_string(),
        id: id.to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    summary = "List products",
    description = "List every product in the catalog, in store order",
    responses(
        (status = 200, description = "All catalog products", body = Vec<ProductResponse>),
        (status = 500, description = "Internal server error"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<ProductResponse>>> {
    let products = state.products.list().await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    summary = "Get a product",
    params(
        ("id" = String, Path, description = "24-character hex product identifier")
    ),
    responses(
        (status = 200, description = "The requested product", body = ProductResponse),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_product(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<ProductResponse>> {
    let oid = parse_product_id(&id)?;

    let product = state.products.get_by_id(oid).await?.ok_or_else(|| Error::NotFound {
        resource: "product".to_string(),
        id,
    })?;

    Ok(Json(product.into()))
}

#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    summary = "Create a product",
    request_body = ProductCreate,
    responses(
        (status = 201, description = "Product created", body = ProductResponse,
            headers(("Location" = String, description = "URL of the created product"))),
        (status = 422, description = "Request body does not bind to the product shape"),
        (status = 500, description = "Internal server error"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<ProductCreate>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<ProductResponse>)> {
    let created = state.products.create(&request.into()).await?;

    let response = ProductResponse::from(created);
    let location = format!("/products/{}", response.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(response)))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "products",
    summary = "Replace a product",
    description = "Wholesale replacement of the record; the identifier is taken from the path, \
                   never from the body",
    params(
        ("id" = String, Path, description = "24-character hex product identifier")
    ),
    request_body = ProductUpdate,
    responses(
        (status = 204, description = "Product replaced"),
        (status = 404, description = "Product not found"),
        (status = 422, description = "Request body does not bind to the product shape"),
        (status = 500, description = "Internal server error"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ProductUpdate>,
) -> Result<StatusCode> {
    let oid = parse_product_id(&id)?;

    // Read-before-write: absence is a 404 before anything is replaced. Not
    // atomic with the write below; a concurrent delete makes the replacement
    // a silent no-op at the store.
    if state.products.get_by_id(oid).await?.is_none() {
        return Err(Error::NotFound {
            resource: "product".to_string(),
            id,
        });
    }

    state.products.update(oid, &request.into()).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    summary = "Delete a product",
    params(
        ("id" = String, Path, description = "24-character hex product identifier")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_product(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let oid = parse_product_id(&id)?;

    if state.products.get_by_id(oid).await?.is_none() {
        return Err(Error::NotFound {
            resource: "product".to_string(),
            id,
        });
    }

    state.products.delete(oid).await?;

    Ok(StatusCode::NO_CONTENT)
}
