use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A catalog entry as handlers and stores see it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
}

/// Create body. `name` and `price` are passed to the store as given, absent ones
/// included; the `products` table's NOT NULL and `price > 0` constraints decide.
/// Any `id` the client sends is dropped.
#[derive(Debug, Serialize, Deserialize, Clone, Default, ToSchema)]
pub struct CreateProductRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Mug")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 10.0)]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Partial update body. Absent fields leave the stored value alone.
#[derive(Debug, Serialize, Deserialize, Clone, Default, ToSchema)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ProductPatch {
    /// Applies the overwrite rules: `name` and `description` only when non-empty,
    /// `price` only when strictly positive, `image` whenever present (even empty).
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name.filter(|name| !name.is_empty()) {
            product.name = name;
        }
        if let Some(description) = self.description.filter(|d| !d.is_empty()) {
            product.description = Some(description);
        }
        if let Some(price) = self.price.filter(|price| *price > 0.0) {
            product.price = price;
        }
        if let Some(image) = self.image {
            product.image = Some(image);
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            image: product.image,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub ok: bool,
    #[schema(example = "Development")]
    pub env: String,
}
