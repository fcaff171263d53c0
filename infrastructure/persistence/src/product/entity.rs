use bigdecimal::BigDecimal;
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::product::model::{Product, ProductSnapshot};
use business::domain::product::value_objects::{
    Installments, Money, ProductAttribute, ProductCondition, ProductHighlight, ProductPicture,
    Rating, ReturnsPolicy, ShippingInfo, Stock,
};

/// Row shape of the `products` table. Sub-collections and optional value
/// objects are stored as JSONB columns.
#[derive(Debug, FromRow)]
pub struct ProductRow {
    pub id: Uuid,
    pub title: String,
    pub brand: String,
    pub model: String,
    pub condition: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub price_amount: BigDecimal,
    pub price_currency: String,
    pub stock_quantity: i32,
    pub purchase_protection: bool,
    pub rating_average: Option<BigDecimal>,
    pub rating_total_reviews: Option<i32>,
    pub attributes: Json<Vec<ProductAttribute>>,
    pub pictures: Json<Vec<ProductPicture>>,
    pub highlights: Json<Vec<ProductHighlight>>,
    pub installments: Option<Json<Installments>>,
    pub shipping: Option<Json<ShippingInfo>>,
    pub returns_policy: Option<Json<ReturnsPolicy>>,
}

impl ProductRow {
    pub fn into_domain(self) -> Product {
        let rating = match (self.rating_average, self.rating_total_reviews) {
            (Some(average), Some(total)) => Some(Rating::new(average, total)),
            _ => None,
        };

        Product::from_repository(ProductSnapshot {
            id: self.id,
            title: self.title,
            brand: self.brand,
            model: self.model,
            condition: self
                .condition
                .parse::<ProductCondition>()
                .unwrap_or(ProductCondition::New),
            description: self.description,
            is_active: self.is_active,
            price: Money::from_repository(self.price_amount, self.price_currency),
            installments: self.installments.map(|i| i.0),
            stock: Stock::from_repository(self.stock_quantity),
            shipping: self.shipping.map(|s| s.0),
            returns: self.returns_policy.map(|r| r.0),
            purchase_protection: self.purchase_protection,
            rating,
            attributes: self.attributes.0,
            pictures: self.pictures.0,
            highlights: self.highlights.0,
        })
    }
}
