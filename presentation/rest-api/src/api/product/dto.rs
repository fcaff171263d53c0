use bigdecimal::ToPrimitive;
use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::product::views::{PagedResult, ProductDetail, ProductListItem};

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct AttributeDto {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CreateProductRequest {
    pub title: String,
    pub brand: String,
    pub model: String,
    /// Product condition, "new" or "used" (any casing).
    pub condition: String,
    pub price: f64,
    pub currency: String,
    pub stock: i32,
    pub description: Option<String>,
    #[oai(default)]
    pub attributes: Vec<AttributeDto>,
    #[oai(default)]
    pub pictures: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UpdateProductRequest {
    pub title: String,
    pub brand: String,
    pub model: String,
    pub condition: String,
    pub price: f64,
    pub currency: String,
    pub stock: i32,
    pub description: Option<String>,
    #[oai(default)]
    pub attributes: Vec<AttributeDto>,
    #[oai(default)]
    pub pictures: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductCreatedResponse {
    pub id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct InstallmentsDto {
    pub quantity: i32,
    pub amount: f64,
    pub interest_free: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ShippingDto {
    pub free_shipping: bool,
    pub estimated_delivery_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ReturnsDto {
    pub allowed: bool,
    pub window_days: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct RatingDto {
    pub average: f64,
    pub total_reviews: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductDetailResponse {
    pub id: Uuid,
    pub title: String,
    pub brand: String,
    pub model: String,
    pub condition: String,
    pub price: f64,
    pub currency: String,
    pub installments: Option<InstallmentsDto>,
    pub available_quantity: i32,
    pub pictures: Vec<String>,
    pub highlights: Vec<String>,
    pub attributes: Vec<AttributeDto>,
    pub shipping: Option<ShippingDto>,
    pub returns: Option<ReturnsDto>,
    pub purchase_protection: bool,
    pub rating: Option<RatingDto>,
    pub description: Option<String>,
}

impl From<ProductDetail> for ProductDetailResponse {
    fn from(detail: ProductDetail) -> Self {
        Self {
            id: detail.id,
            title: detail.title,
            brand: detail.brand,
            model: detail.model,
            condition: detail.condition,
            price: detail.price.to_f64().unwrap_or_default(),
            currency: detail.currency,
            installments: detail.installments.map(|i| InstallmentsDto {
                quantity: i.quantity,
                amount: i.amount.to_f64().unwrap_or_default(),
                interest_free: i.interest_free,
            }),
            available_quantity: detail.available_quantity,
            pictures: detail.pictures,
            highlights: detail.highlights,
            attributes: detail
                .attributes
                .into_iter()
                .map(|a| AttributeDto {
                    name: a.name,
                    value: a.value,
                })
                .collect(),
            shipping: detail.shipping.map(|s| ShippingDto {
                free_shipping: s.free_shipping,
                estimated_delivery_date: s.estimated_delivery_date,
            }),
            returns: detail.returns.map(|r| ReturnsDto {
                allowed: r.allowed,
                window_days: r.window_days,
            }),
            purchase_protection: detail.purchase_protection,
            rating: detail.rating.map(|r| RatingDto {
                average: r.average.to_f64().unwrap_or_default(),
                total_reviews: r.total_reviews,
            }),
            description: detail.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductListItemResponse {
    pub id: Uuid,
    pub title: String,
    pub brand: String,
    pub model: String,
    pub condition: String,
    pub price: f64,
    pub currency: String,
    pub thumbnail_url: Option<String>,
    pub available_quantity: i32,
    pub rating_average: Option<f64>,
    pub rating_total_reviews: Option<i32>,
}

impl From<ProductListItem> for ProductListItemResponse {
    fn from(item: ProductListItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            brand: item.brand,
            model: item.model,
            condition: item.condition,
            price: item.price.to_f64().unwrap_or_default(),
            currency: item.currency,
            thumbnail_url: item.thumbnail_url,
            available_quantity: item.available_quantity,
            rating_average: item.rating_average.and_then(|a| a.to_f64()),
            rating_total_reviews: item.rating_total_reviews,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductPageResponse {
    pub items: Vec<ProductListItemResponse>,
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
}

impl From<PagedResult<ProductListItem>> for ProductPageResponse {
    fn from(result: PagedResult<ProductListItem>) -> Self {
        Self {
            items: result.items.into_iter().map(|i| i.into()).collect(),
            page: result.page,
            page_size: result.page_size,
            total_items: result.total_items,
        }
    }
}
