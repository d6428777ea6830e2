use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::db::schema::products;
use crate::models::{CreateProductRequest, Product};

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductRecord {
    pub id: uuid::Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Product {
            id: record.id,
            name: record.name,
            description: record.description,
            price: record.price,
            image: record.image,
        }
    }
}

/// `None` fields insert `DEFAULT`; `created_at` always does. A missing `name` or
/// `price` therefore trips the NOT NULL constraint.
#[derive(Insertable)]
#[diesel(table_name = products)]
pub struct NewProduct<'a> {
    pub id: uuid::Uuid,
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub price: Option<f64>,
    pub image: Option<&'a str>,
}

impl<'a> NewProduct<'a> {
    pub fn new(id: uuid::Uuid, request: &'a CreateProductRequest) -> Self {
        NewProduct {
            id,
            name: request.name.as_deref(),
            description: request.description.as_deref(),
            price: request.price,
            image: request.image.as_deref(),
        }
    }
}

/// Full overwrite of the mutable columns after a patch has been applied in memory.
#[derive(AsChangeset)]
#[diesel(table_name = products)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateProduct<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price: f64,
    pub image: Option<&'a str>,
}

impl<'a> From<&'a Product> for UpdateProduct<'a> {
    fn from(product: &'a Product) -> Self {
        UpdateProduct {
            name: &product.name,
            description: product.description.as_deref(),
            price: product.price,
            image: product.image.as_deref(),
        }
    }
}
