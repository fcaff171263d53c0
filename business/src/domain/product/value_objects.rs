use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::ProductError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCondition {
    New,
    Used,
}

impl std::fmt::Display for ProductCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductCondition::New => write!(f, "new"),
            ProductCondition::Used => write!(f, "used"),
        }
    }
}

impl std::str::FromStr for ProductCondition {
    type Err = String;

    // Accepts any casing ("New", "USED", ...); unknown values fail.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "new" => Ok(ProductCondition::New),
            "used" => Ok(ProductCondition::Used),
            _ => Err(format!("Invalid product condition: {}", s)),
        }
    }
}

/// Monetary amount plus ISO currency code. The amount must be positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    amount: BigDecimal,
    currency: String,
}

impl Money {
    pub fn new(amount: BigDecimal, currency: impl Into<String>) -> Result<Self, ProductError> {
        if amount <= BigDecimal::from(0) {
            return Err(ProductError::PriceNotPositive);
        }
        Ok(Self {
            amount,
            currency: currency.into(),
        })
    }

    /// Constructor for amounts already persisted in the repository (no validation).
    pub fn from_repository(amount: BigDecimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    pub fn amount(&self) -> &BigDecimal {
        &self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    available_quantity: i32,
}

impl Stock {
    pub fn new(available_quantity: i32) -> Result<Self, ProductError> {
        if available_quantity < 0 {
            return Err(ProductError::NegativeStock);
        }
        Ok(Self { available_quantity })
    }

    /// Constructor for quantities already persisted in the repository (no validation).
    pub fn from_repository(available_quantity: i32) -> Self {
        Self { available_quantity }
    }

    pub fn available_quantity(&self) -> i32 {
        self.available_quantity
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    average: BigDecimal,
    total_reviews: i32,
}

impl Rating {
    pub fn new(average: BigDecimal, total_reviews: i32) -> Self {
        Self {
            average,
            total_reviews,
        }
    }

    pub fn average(&self) -> &BigDecimal {
        &self.average
    }

    pub fn total_reviews(&self) -> i32 {
        self.total_reviews
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAttribute {
    name: String,
    value: String,
}

impl ProductAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPicture {
    url: String,
}

impl ProductPicture {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductHighlight {
    text: String,
}

impl ProductHighlight {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installments {
    quantity: i32,
    amount: BigDecimal,
    interest_free: bool,
}

impl Installments {
    pub fn new(quantity: i32, amount: BigDecimal, interest_free: bool) -> Self {
        Self {
            quantity,
            amount,
            interest_free,
        }
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn amount(&self) -> &BigDecimal {
        &self.amount
    }

    pub fn interest_free(&self) -> bool {
        self.interest_free
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingInfo {
    free_shipping: bool,
    estimated_delivery_date: Option<DateTime<Utc>>,
}

impl ShippingInfo {
    pub fn new(free_shipping: bool, estimated_delivery_date: Option<DateTime<Utc>>) -> Self {
        Self {
            free_shipping,
            estimated_delivery_date,
        }
    }

    pub fn free_shipping(&self) -> bool {
        self.free_shipping
    }

    pub fn estimated_delivery_date(&self) -> Option<DateTime<Utc>> {
        self.estimated_delivery_date
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnsPolicy {
    allowed: bool,
    window_days: i32,
}

impl ReturnsPolicy {
    pub fn new(allowed: bool, window_days: i32) -> Self {
        Self {
            allowed,
            window_days,
        }
    }

    pub fn allowed(&self) -> bool {
        self.allowed
    }

    pub fn window_days(&self) -> i32 {
        self.window_days
    }
}
