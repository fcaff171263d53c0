#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.not_found")]
    NotFound,
    #[error("product.invalid_condition")]
    InvalidCondition,
    #[error("product.price_not_positive")]
    PriceNotPositive,
    #[error("product.negative_stock")]
    NegativeStock,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
