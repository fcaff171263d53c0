use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::{ProductFilter, ProductRepository};

use super::entity::ProductRow;

const SELECT_COLUMNS: &str = "id, title, brand, model, condition, description, is_active, \
     price_amount, price_currency, stock_quantity, purchase_protection, \
     rating_average, rating_total_reviews, attributes, pictures, highlights, \
     installments, shipping, returns_policy";

// Shared predicate for search and its total count. Null parameters disable
// the corresponding filter.
const SEARCH_PREDICATE: &str = "is_active = TRUE \
     AND ($1::text IS NULL \
          OR title ILIKE '%' || $1 || '%' \
          OR brand ILIKE '%' || $1 || '%' \
          OR model ILIKE '%' || $1 || '%') \
     AND ($2::text IS NULL OR brand = $2) \
     AND ($3::text IS NULL OR condition = $3)";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM products WHERE id = $1 AND is_active = TRUE"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(row.map(|r| r.into_domain()))
    }

    async fn get_by_id_for_update(&self, id: Uuid) -> Result<Option<Product>, RepositoryError> {
        // No is_active filter: repeated inactivations must find their target.
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(row.map(|r| r.into_domain()))
    }

    async fn add(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO products (id, title, brand, model, condition, description, is_active,
                price_amount, price_currency, stock_quantity, purchase_protection,
                rating_average, rating_total_reviews, attributes, pictures, highlights,
                installments, shipping, returns_policy)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)"#,
        )
        .bind(product.id())
        .bind(product.title())
        .bind(product.brand())
        .bind(product.model())
        .bind(product.condition().to_string())
        .bind(product.description())
        .bind(product.is_active())
        .bind(product.price().amount())
        .bind(product.price().currency())
        .bind(product.stock().available_quantity())
        .bind(product.purchase_protection())
        .bind(product.rating().map(|r| r.average().clone()))
        .bind(product.rating().map(|r| r.total_reviews()))
        .bind(Json(product.attributes()))
        .bind(Json(product.pictures()))
        .bind(Json(product.highlights()))
        .bind(product.installments().map(Json))
        .bind(product.shipping().map(Json))
        .bind(product.returns().map(Json))
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
            _ => RepositoryError::DatabaseError,
        })?;

        Ok(())
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE products SET
                title = $2,
                brand = $3,
                model = $4,
                condition = $5,
                description = $6,
                is_active = $7,
                price_amount = $8,
                price_currency = $9,
                stock_quantity = $10,
                attributes = $11,
                pictures = $12
            WHERE id = $1"#,
        )
        .bind(product.id())
        .bind(product.title())
        .bind(product.brand())
        .bind(product.model())
        .bind(product.condition().to_string())
        .bind(product.description())
        .bind(product.is_active())
        .bind(product.price().amount())
        .bind(product.price().currency())
        .bind(product.stock().available_quantity())
        .bind(Json(product.attributes()))
        .bind(Json(product.pictures()))
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn search(
        &self,
        filter: &ProductFilter,
        page: u32,
        page_size: u32,
    ) -> Result<(Vec<Product>, u64), RepositoryError> {
        let term = filter.term.as_deref();
        let brand = filter.brand.as_deref();
        let condition = filter.condition.map(|c| c.to_string());

        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM products WHERE {SEARCH_PREDICATE}"
        ))
        .bind(term)
        .bind(brand)
        .bind(condition.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        let offset = i64::from(page.saturating_sub(1)) * i64::from(page_size);

        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM products \
             WHERE {SEARCH_PREDICATE} \
             ORDER BY COALESCE(rating_average, 0) DESC, title ASC \
             LIMIT $4 OFFSET $5"
        ))
        .bind(term)
        .bind(brand)
        .bind(condition.as_deref())
        .bind(i64::from(page_size))
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        let products = rows.into_iter().map(|r| r.into_domain()).collect();

        Ok((products, total as u64))
    }
}
