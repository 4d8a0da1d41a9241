use indexmap::IndexMap;
use serde::Deserialize;

/// Root of `prosmart_products.json`.
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogFile {
    /// main category name -> category name -> category
    pub products: IndexMap<String, IndexMap<String, CategoryNode>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CategoryNode {
    #[serde(default)]
    pub category_id: Option<String>,
    pub subcategories: IndexMap<String, SubcategoryNode>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SubcategoryNode {
    #[serde(default)]
    pub subcategory_id: Option<String>,
    pub products: Vec<ProductNode>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProductNode {
    pub product_id: String,
    pub product_name: String,
    pub product_title: String,
    pub product_description: String,
    /// Passed through as written: numbers, strings like "1,200", or null.
    #[serde(default)]
    pub product_price: Option<serde_json::Value>,
    /// Absent and null both load as an empty image list.
    #[serde(default)]
    pub image_urls: Option<Vec<String>>,
}
