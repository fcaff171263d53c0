use std::sync::Arc;

use bigdecimal::BigDecimal;
use poem_openapi::{
    OpenApi,
    param::{Header, Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::product::use_cases::create::{
    AttributeParams, CreateProductParams, CreateProductUseCase,
};
use business::domain::product::use_cases::get_detail::{
    GetProductDetailParams, GetProductDetailUseCase,
};
use business::domain::product::use_cases::inactivate::{
    InactivateProductParams, InactivateProductUseCase,
};
use business::domain::product::use_cases::search::{ProductListQuery, SearchProductsUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    AttributeDto, CreateProductRequest, ProductCreatedResponse, ProductDetailResponse,
    ProductPageResponse, UpdateProductRequest,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_detail_use_case: Arc<dyn GetProductDetailUseCase>,
    search_use_case: Arc<dyn SearchProductsUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    inactivate_use_case: Arc<dyn InactivateProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_detail_use_case: Arc<dyn GetProductDetailUseCase>,
        search_use_case: Arc<dyn SearchProductsUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        inactivate_use_case: Arc<dyn InactivateProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_detail_use_case,
            search_use_case,
            update_use_case,
            inactivate_use_case,
        }
    }
}

fn validation_error(message: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: message.to_string(),
    })
}

fn parse_attributes(attributes: Vec<AttributeDto>) -> Vec<AttributeParams> {
    attributes
        .into_iter()
        .map(|a| AttributeParams {
            name: a.name,
            value: a.value,
        })
        .collect()
}

/// Product catalog API
///
/// Endpoints for creating, reading, updating, searching and soft-deleting
/// catalog products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// Requires an Idempotency-Key header; retries with the same key return
    /// the originally created product id instead of creating a duplicate.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        #[oai(name = "Idempotency-Key")] idempotency_key: Header<Option<String>>,
        body: Json<CreateProductRequest>,
    ) -> CreateProductResponse {
        let key = match idempotency_key.0 {
            Some(key) if !key.trim().is_empty() => key,
            _ => {
                return CreateProductResponse::BadRequest(validation_error(
                    "product.idempotency_key_required",
                ));
            }
        };

        let price = match BigDecimal::try_from(body.0.price) {
            Ok(price) => price,
            Err(_) => {
                return CreateProductResponse::BadRequest(validation_error(
                    "product.invalid_price",
                ));
            }
        };

        let params = CreateProductParams {
            product_id: Uuid::new_v4(),
            title: body.0.title,
            brand: body.0.brand,
            model: body.0.model,
            condition: body.0.condition,
            price,
            currency: body.0.currency,
            stock: body.0.stock,
            description: body.0.description,
            attributes: parse_attributes(body.0.attributes),
            pictures: body.0.pictures,
        };

        match self.create_use_case.execute(params, &key).await {
            Ok(id) => CreateProductResponse::Created(Json(ProductCreatedResponse { id })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by ID
    ///
    /// Returns the full product detail. Served from the read cache when a
    /// fresh entry exists.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_detail(&self, id: Path<String>) -> GetProductDetailResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetProductDetailResponse::BadRequest(validation_error(
                    "product.invalid_id",
                ));
            }
        };

        match self
            .get_detail_use_case
            .execute(GetProductDetailParams { product_id: uuid })
            .await
        {
            Ok(Some(detail)) => GetProductDetailResponse::Ok(Json(detail.into())),
            Ok(None) => GetProductDetailResponse::NotFound(Json(ErrorResponse {
                name: "NotFound".to_string(),
                message: "product.not_found".to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductDetailResponse::NotFound(json),
                    _ => GetProductDetailResponse::InternalError(json),
                }
            }
        }
    }

    /// Search products
    ///
    /// Lists products with text search, brand and condition filters, and
    /// pagination. Always reads the latest committed state.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn search_products(
        &self,
        q: Query<Option<String>>,
        brand: Query<Option<String>>,
        condition: Query<Option<String>>,
        page: Query<Option<u32>>,
        #[oai(name = "pageSize")] page_size: Query<Option<u32>>,
    ) -> SearchProductsResponse {
        let query = ProductListQuery {
            term: q.0,
            brand: brand.0,
            condition: condition.0,
            page: page.0.unwrap_or(1),
            page_size: page_size.0.unwrap_or(10),
        };

        match self.search_use_case.execute(query).await {
            Ok(result) => SearchProductsResponse::Ok(Json(result.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                SearchProductsResponse::InternalError(json)
            }
        }
    }

    /// Update a product
    ///
    /// Full replace of the mutable fields; attribute and picture lists are
    /// replaced wholesale.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateProductResponse::BadRequest(validation_error("product.invalid_id"));
            }
        };

        let price = match BigDecimal::try_from(body.0.price) {
            Ok(price) => price,
            Err(_) => {
                return UpdateProductResponse::BadRequest(validation_error(
                    "product.invalid_price",
                ));
            }
        };

        let params = UpdateProductParams {
            product_id: uuid,
            title: body.0.title,
            brand: body.0.brand,
            model: body.0.model,
            condition: body.0.condition,
            price,
            currency: body.0.currency,
            stock: body.0.stock,
            description: body.0.description,
            attributes: parse_attributes(body.0.attributes),
            pictures: body.0.pictures,
        };

        match self.update_use_case.execute(params).await {
            Ok(()) => UpdateProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Inactivate a product
    ///
    /// Soft delete: the product stays stored but disappears from detail
    /// lookups and search results. Inactivating twice succeeds.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn inactivate_product(&self, id: Path<String>) -> InactivateProductResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return InactivateProductResponse::BadRequest(validation_error(
                    "product.invalid_id",
                ));
            }
        };

        match self
            .inactivate_use_case
            .execute(InactivateProductParams { product_id: uuid })
            .await
        {
            Ok(()) => InactivateProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => InactivateProductResponse::NotFound(json),
                    _ => InactivateProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductCreatedResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductDetailResponse {
    #[oai(status = 200)]
    Ok(Json<ProductDetailResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductPageResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum InactivateProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
