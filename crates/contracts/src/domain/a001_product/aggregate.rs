use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Product
// ============================================================================

/// Товар витрины: название, цена и ссылка на изображение
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Отображаемое название товара
    #[serde(rename = "productName")]
    pub product_name: String,

    /// Цена товара
    #[serde(rename = "productPrice")]
    pub product_price: f64,

    /// Адрес изображения
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl Product {
    pub fn new(
        product_name: impl Into<String>,
        product_price: f64,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            product_price,
            image_url: image_url.into(),
        }
    }

    /// Строка цены для карточки: "Price: $19.99"
    pub fn price_label(&self) -> String {
        format!("Price: ${}", self.product_price)
    }
}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Каталог в формате `{ "record": [...] }`.
///
/// Соседние ключи документа (например `metadata`) игнорируются.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductCatalog {
    #[serde(default)]
    pub record: Vec<Product>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Wrapped(ProductCatalog),
    Bare(Vec<Product>),
}

impl ProductCatalog {
    pub fn new(record: Vec<Product>) -> Self {
        Self { record }
    }

    /// Разбирает каталог из JSON: принимается как обёртка `record`, так и голый массив
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(raw)?;
        Ok(match doc {
            CatalogDocument::Wrapped(catalog) => catalog,
            CatalogDocument::Bare(record) => Self { record },
        })
    }

    pub fn len(&self) -> usize {
        self.record.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record.is_empty()
    }
}
