use derive_more::{Deref, Display, From};

use crate::{Amount, CreateError, DeleteError, Name, Price, ReadError, UpdateError};

pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";

#[allow(async_fn_in_trait)]
pub trait ProductService {
    async fn get_products(&self) -> Result<Vec<Product>, ReadError>;
    async fn get_inventory_summary(&self) -> Result<InventorySummary, ReadError>;
    async fn create_product(&self, product: ProductDraft) -> Result<Product, CreateError>;
    async fn replace_product(&self, product: Product) -> Result<Product, UpdateError>;
    async fn delete_product(&self, id: ProductID) -> Result<ProductID, DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait ProductRepository {
    async fn read_products(&self) -> Result<Vec<Product>, ReadError>;
    async fn read_inventory_summary(&self) -> Result<InventorySummary, ReadError>;
    async fn create_product(&self, product: ProductDraft) -> Result<Product, CreateError>;
    async fn replace_product(&self, product: Product) -> Result<Product, UpdateError>;
    async fn delete_product(&self, id: ProductID) -> Result<ProductID, DeleteError>;
}

/// A catalog entry as served by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductID,
    pub name: Name,
    pub price: Price,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub stock: Option<u32>,
    pub description: Option<String>,
}

impl Product {
    #[must_use]
    pub fn image_url_or_placeholder(&self) -> &str {
        self.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE_URL)
    }

    #[must_use]
    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            price: self.price,
            image_url: self.image_url.clone(),
            category: self.category.clone(),
            stock: self.stock,
            description: self.description.clone(),
        }
    }
}

/// The content of a product which has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: Name,
    pub price: Price,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub stock: Option<u32>,
    pub description: Option<String>,
}

impl ProductDraft {
    #[must_use]
    pub fn with_id(self, id: ProductID) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            image_url: self.image_url,
            category: self.category,
            stock: self.stock,
            description: self.description,
        }
    }
}

#[derive(Deref, Display, From, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductID(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySummary {
    pub product_count: u32,
    pub total_items: u64,
    pub total_value: Amount,
}

/// Turns an optional free text field into `None` when it is blank.
#[must_use]
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
