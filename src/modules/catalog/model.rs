use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::schema::CatalogFile;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CategoryRecord {
    pub category_id: Option<String>,
    pub category_name: String,
    pub main_category: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SubcategoryRecord {
    pub subcategory_id: Option<String>,
    pub subcategory_name: String,
    pub category_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProductRecord {
    pub main_category: String,
    pub category_id: Option<String>,
    pub subcategory_id: Option<String>,
    pub product_id: String,
    pub product_name: String,
    pub product_title: String,
    pub product_description: String,
    pub product_price: Option<serde_json::Value>,
    pub product_images: Vec<String>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// The three flat sequences produced from one catalog tree.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CatalogBatch {
    pub categories: Vec<CategoryRecord>,
    pub subcategories: Vec<SubcategoryRecord>,
    pub products: Vec<ProductRecord>,
}

impl CatalogBatch {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.subcategories.is_empty() && self.products.is_empty()
    }
}

impl CatalogFile {
    pub fn flatten(&self) -> CatalogBatch {
        self.flatten_at(Utc::now())
    }

    /// Walk main category -> category -> subcategory -> product once, in file
    /// order. `loaded_at` stamps every product record.
    pub fn flatten_at(&self, loaded_at: DateTime<Utc>) -> CatalogBatch {
        let mut batch = CatalogBatch::default();

        for (main_category, categories) in &self.products {
            for (category_name, category) in categories {
                batch.categories.push(CategoryRecord {
                    category_id: category.category_id.clone(),
                    category_name: category_name.clone(),
                    main_category: main_category.clone(),
                });

                for (subcategory_name, subcategory) in &category.subcategories {
                    batch.subcategories.push(SubcategoryRecord {
                        subcategory_id: subcategory.subcategory_id.clone(),
                        subcategory_name: subcategory_name.clone(),
                        category_id: category.category_id.clone(),
                    });

                    batch
                        .products
                        .extend(subcategory.products.iter().map(|p| ProductRecord {
                            main_category: main_category.clone(),
                            category_id: category.category_id.clone(),
                            subcategory_id: subcategory.subcategory_id.clone(),
                            product_id: p.product_id.clone(),
                            product_name: p.product_name.clone(),
                            product_title: p.product_title.clone(),
                            product_description: p.product_description.clone(),
                            product_price: p.product_price.clone(),
                            product_images: p.image_urls.clone().unwrap_or_default(),
                            created_at: loaded_at,
                            updated_at: loaded_at,
                        }));
                }
            }
        }

        batch
    }
}
