use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::Product;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeView {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentsView {
    pub quantity: i32,
    pub amount: BigDecimal,
    pub interest_free: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingView {
    pub free_shipping: bool,
    pub estimated_delivery_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnsView {
    pub allowed: bool,
    pub window_days: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingView {
    pub average: BigDecimal,
    pub total_reviews: i32,
}

/// Full projection served by detail lookups. This is also the record stored in
/// the detail cache, so it must stay serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub id: Uuid,
    pub title: String,
    pub brand: String,
    pub model: String,
    pub condition: String,
    pub price: BigDecimal,
    pub currency: String,
    pub installments: Option<InstallmentsView>,
    pub available_quantity: i32,
    pub pictures: Vec<String>,
    pub highlights: Vec<String>,
    pub attributes: Vec<AttributeView>,
    pub shipping: Option<ShippingView>,
    pub returns: Option<ReturnsView>,
    pub purchase_protection: bool,
    pub rating: Option<RatingView>,
    pub description: Option<String>,
}

impl From<&Product> for ProductDetail {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id(),
            title: product.title().to_string(),
            brand: product.brand().to_string(),
            model: product.model().to_string(),
            condition: product.condition().to_string(),
            price: product.price().amount().clone(),
            currency: product.price().currency().to_string(),
            installments: product.installments().map(|i| InstallmentsView {
                quantity: i.quantity(),
                amount: i.amount().clone(),
                interest_free: i.interest_free(),
            }),
            available_quantity: product.stock().available_quantity(),
            pictures: product
                .pictures()
                .iter()
                .map(|p| p.url().to_string())
                .collect(),
            highlights: product
                .highlights()
                .iter()
                .map(|h| h.text().to_string())
                .collect(),
            attributes: product
                .attributes()
                .iter()
                .map(|a| AttributeView {
                    name: a.name().to_string(),
                    value: a.value().to_string(),
                })
                .collect(),
            shipping: product.shipping().map(|s| ShippingView {
                free_shipping: s.free_shipping(),
                estimated_delivery_date: s.estimated_delivery_date(),
            }),
            returns: product.returns().map(|r| ReturnsView {
                allowed: r.allowed(),
                window_days: r.window_days(),
            }),
            purchase_protection: product.purchase_protection(),
            rating: product.rating().map(|r| RatingView {
                average: r.average().clone(),
                total_reviews: r.total_reviews(),
            }),
            description: product.description().map(|d| d.to_string()),
        }
    }
}

/// Lightweight projection for search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListItem {
    pub id: Uuid,
    pub title: String,
    pub brand: String,
    pub model: String,
    pub condition: String,
    pub price: BigDecimal,
    pub currency: String,
    pub thumbnail_url: Option<String>,
    pub available_quantity: i32,
    pub rating_average: Option<BigDecimal>,
    pub rating_total_reviews: Option<i32>,
}

impl From<&Product> for ProductListItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id(),
            title: product.title().to_string(),
            brand: product.brand().to_string(),
            model: product.model().to_string(),
            condition: product.condition().to_string(),
            price: product.price().amount().clone(),
            currency: product.price().currency().to_string(),
            thumbnail_url: product.pictures().first().map(|p| p.url().to_string()),
            available_quantity: product.stock().available_quantity(),
            rating_average: product.rating().map(|r| r.average().clone()),
            rating_total_reviews: product.rating().map(|r| r.total_reviews()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
}
