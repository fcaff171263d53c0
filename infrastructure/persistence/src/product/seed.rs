use std::path::Path;

use bigdecimal::BigDecimal;
use serde::Deserialize;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use business::domain::product::model::{Product, ProductSnapshot};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::{
    Money, ProductAttribute, ProductCondition, ProductHighlight, ProductPicture, Rating, Stock,
};

use super::repository::ProductRepositoryPostgres;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("seed.io_error")]
    Io(#[from] std::io::Error),
    #[error("seed.invalid_json")]
    InvalidJson(#[from] serde_json::Error),
    #[error("seed.invalid_record")]
    InvalidRecord,
    #[error("seed.database_error")]
    Database,
}

#[derive(Debug, Deserialize)]
pub struct MoneySeed {
    pub amount: BigDecimal,
    pub currency: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSeed {
    pub available_quantity: i32,
}

#[derive(Debug, Deserialize)]
pub struct AttributeSeed {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct PictureSeed {
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSeed {
    pub average: BigDecimal,
    pub total_reviews: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSeed {
    pub id: Uuid,
    pub title: String,
    pub brand: String,
    pub model: String,
    pub condition: String,
    pub price: MoneySeed,
    pub stock: StockSeed,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeSeed>,
    #[serde(default)]
    pub pictures: Vec<PictureSeed>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub rating: Option<RatingSeed>,
    #[serde(default)]
    pub purchase_protection: bool,
}

impl ProductSeed {
    pub fn into_domain(self) -> Result<Product, SeedError> {
        let condition = self
            .condition
            .parse::<ProductCondition>()
            .map_err(|_| SeedError::InvalidRecord)?;

        Ok(Product::from_repository(ProductSnapshot {
            id: self.id,
            title: self.title,
            brand: self.brand,
            model: self.model,
            condition,
            description: self.description,
            is_active: true,
            price: Money::from_repository(self.price.amount, self.price.currency),
            installments: None,
            stock: Stock::from_repository(self.stock.available_quantity),
            shipping: None,
            returns: None,
            purchase_protection: self.purchase_protection,
            rating: self.rating.map(|r| Rating::new(r.average, r.total_reviews)),
            attributes: self
                .attributes
                .into_iter()
                .map(|a| ProductAttribute::new(a.name, a.value))
                .collect(),
            pictures: self
                .pictures
                .into_iter()
                .map(|p| ProductPicture::new(p.url))
                .collect(),
            highlights: self
                .highlights
                .into_iter()
                .map(ProductHighlight::new)
                .collect(),
        }))
    }
}

/// Seeds the products table from a JSON file. Runs only when the table is
/// empty; a missing file is skipped so deployments without seed data keep
/// working.
pub async fn seed_from_json(pool: &PgPool, path: &Path) -> Result<u64, SeedError> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await
        .map_err(|_| SeedError::Database)?;

    if existing > 0 {
        return Ok(0);
    }

    if !path.exists() {
        return Ok(0);
    }

    let json = tokio::fs::read_to_string(path).await?;
    let seeds: Vec<ProductSeed> = serde_json::from_str(&json)?;

    let repository = ProductRepositoryPostgres::new(pool.clone());
    let mut inserted = 0;

    for seed in seeds {
        let product = seed.into_domain()?;
        repository
            .add(&product)
            .await
            .map_err(|_| SeedError::Database)?;
        inserted += 1;
    }

    info!("Seeded {} products", inserted);
    Ok(inserted)
}
