use uuid::Uuid;

use super::value_objects::{
    Installments, Money, ProductAttribute, ProductCondition, ProductHighlight, ProductPicture,
    Rating, ReturnsPolicy, ShippingInfo, Stock,
};

/// Catalog product. Fields are private; state changes go through [`Product::update`]
/// and [`Product::inactivate`] so condition, price and stock stay valid after
/// construction.
#[derive(Debug, Clone)]
pub struct Product {
    id: Uuid,
    title: String,
    brand: String,
    model: String,
    condition: ProductCondition,
    description: Option<String>,
    is_active: bool,
    price: Money,
    installments: Option<Installments>,
    stock: Stock,
    shipping: Option<ShippingInfo>,
    returns: Option<ReturnsPolicy>,
    purchase_protection: bool,
    rating: Option<Rating>,
    attributes: Vec<ProductAttribute>,
    pictures: Vec<ProductPicture>,
    highlights: Vec<ProductHighlight>,
}

pub struct NewProductProps {
    pub id: Uuid,
    pub title: String,
    pub brand: String,
    pub model: String,
    pub condition: ProductCondition,
    pub price: Money,
    pub stock: Stock,
    pub description: Option<String>,
    pub attributes: Vec<ProductAttribute>,
    pub pictures: Vec<ProductPicture>,
}

/// Full-replace changes applied by [`Product::update`]. Attribute and picture
/// lists replace the existing ones wholesale.
pub struct ProductUpdate {
    pub title: String,
    pub brand: String,
    pub model: String,
    pub condition: ProductCondition,
    pub price: Money,
    pub stock: Stock,
    pub description: Option<String>,
    pub attributes: Vec<ProductAttribute>,
    pub pictures: Vec<ProductPicture>,
}

/// Persisted state of a product, used to rehydrate the entity from a repository.
pub struct ProductSnapshot {
    pub id: Uuid,
    pub title: String,
    pub brand: String,
    pub model: String,
    pub condition: ProductCondition,
    pub description: Option<String>,
    pub is_active: bool,
    pub price: Money,
    pub installments: Option<Installments>,
    pub stock: Stock,
    pub shipping: Option<ShippingInfo>,
    pub returns: Option<ReturnsPolicy>,
    pub purchase_protection: bool,
    pub rating: Option<Rating>,
    pub attributes: Vec<ProductAttribute>,
    pub pictures: Vec<ProductPicture>,
    pub highlights: Vec<ProductHighlight>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Self {
        Self {
            id: props.id,
            title: props.title,
            brand: props.brand,
            model: props.model,
            condition: props.condition,
            description: props.description,
            is_active: true,
            price: props.price,
            installments: None,
            stock: props.stock,
            shipping: None,
            returns: None,
            purchase_protection: false,
            rating: None,
            attributes: props.attributes,
            pictures: props.pictures,
            highlights: Vec::new(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(snapshot: ProductSnapshot) -> Self {
        Self {
            id: snapshot.id,
            title: snapshot.title,
            brand: snapshot.brand,
            model: snapshot.model,
            condition: snapshot.condition,
            description: snapshot.description,
            is_active: snapshot.is_active,
            price: snapshot.price,
            installments: snapshot.installments,
            stock: snapshot.stock,
            shipping: snapshot.shipping,
            returns: snapshot.returns,
            purchase_protection: snapshot.purchase_protection,
            rating: snapshot.rating,
            attributes: snapshot.attributes,
            pictures: snapshot.pictures,
            highlights: snapshot.highlights,
        }
    }

    pub fn update(&mut self, changes: ProductUpdate) {
        self.title = changes.title;
        self.brand = changes.brand;
        self.model = changes.model;
        self.condition = changes.condition;
        self.price = changes.price;
        self.stock = changes.stock;
        self.description = changes.description;
        self.attributes = changes.attributes;
        self.pictures = changes.pictures;
    }

    /// Soft delete. Calling it on an already-inactive product is a no-op.
    pub fn inactivate(&mut self) {
        if !self.is_active {
            return;
        }
        self.is_active = false;
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn condition(&self) -> ProductCondition {
        self.condition
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn price(&self) -> &Money {
        &self.price
    }

    pub fn installments(&self) -> Option<&Installments> {
        self.installments.as_ref()
    }

    pub fn stock(&self) -> Stock {
        self.stock
    }

    pub fn shipping(&self) -> Option<&ShippingInfo> {
        self.shipping.as_ref()
    }

    pub fn returns(&self) -> Option<&ReturnsPolicy> {
        self.returns.as_ref()
    }

    pub fn purchase_protection(&self) -> bool {
        self.purchase_protection
    }

    pub fn rating(&self) -> Option<&Rating> {
        self.rating.as_ref()
    }

    pub fn attributes(&self) -> &[ProductAttribute] {
        &self.attributes
    }

    pub fn pictures(&self) -> &[ProductPicture] {
        &self.pictures
    }

    pub fn highlights(&self) -> &[ProductHighlight] {
        &self.highlights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    fn make_product() -> Product {
        Product::new(NewProductProps {
            id: Uuid::new_v4(),
            title: "Galaxy S24".to_string(),
            brand: "Samsung".to_string(),
            model: "S24".to_string(),
            condition: ProductCondition::New,
            price: Money::new(BigDecimal::from(4200), "BRL").unwrap(),
            stock: Stock::new(7).unwrap(),
            description: None,
            attributes: vec![ProductAttribute::new("Color", "Black")],
            pictures: vec![ProductPicture::new("https://cdn.example.com/s24.jpg")],
        })
    }

    #[test]
    fn should_be_active_after_construction() {
        let product = make_product();
        assert!(product.is_active());
    }

    #[test]
    fn should_stay_inactive_when_inactivated_twice() {
        let mut product = make_product();
        product.inactivate();
        product.inactivate();
        assert!(!product.is_active());
    }

    #[test]
    fn should_replace_collections_wholesale_on_update() {
        let mut product = make_product();
        product.update(ProductUpdate {
            title: "Galaxy S24 Ultra".to_string(),
            brand: "Samsung".to_string(),
            model: "S24U".to_string(),
            condition: ProductCondition::Used,
            price: Money::new(BigDecimal::from(3900), "BRL").unwrap(),
            stock: Stock::new(2).unwrap(),
            description: Some("Showroom unit".to_string()),
            attributes: vec![
                ProductAttribute::new("Color", "Gray"),
                ProductAttribute::new("Storage", "512GB"),
            ],
            pictures: Vec::new(),
        });

        assert_eq!(product.title(), "Galaxy S24 Ultra");
        assert_eq!(product.condition(), ProductCondition::Used);
        assert_eq!(product.attributes().len(), 2);
        assert_eq!(product.attributes()[0].value(), "Gray");
        assert!(product.pictures().is_empty());
    }

    #[test]
    fn should_reject_non_positive_price() {
        let result = Money::new(BigDecimal::from(0), "BRL");
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_negative_stock() {
        let result = Stock::new(-1);
        assert!(result.is_err());
    }
}
