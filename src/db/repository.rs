use diesel::prelude::*;
use uuid::Uuid;

use crate::db::connection::{PgPool, PgPooledConnection};
use crate::db::models::{NewProduct, ProductRecord, UpdateProduct};
use crate::db::schema::products;
use crate::error::CatalogError;
use crate::models::{CreateProductRequest, Product, ProductPatch};
use crate::store::ProductStore;

/// Diesel-backed store over the `products` table.
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        PgProductStore { pool }
    }

    fn conn(&self) -> Result<PgPooledConnection, CatalogError> {
        Ok(self.pool.get()?)
    }
}

impl ProductStore for PgProductStore {
    fn list(&self) -> Result<Vec<Product>, CatalogError> {
        let conn = &mut self.conn()?;
        let records = products::table
            .order((products::created_at.asc(), products::id.asc()))
            .select(ProductRecord::as_select())
            .load(conn)?;
        Ok(records.into_iter().map(Product::from).collect())
    }

    fn get(&self, id: Uuid) -> Result<Product, CatalogError> {
        let conn = &mut self.conn()?;
        find_product(conn, id)
    }

    fn insert(&self, id: Uuid, request: CreateProductRequest) -> Result<Product, CatalogError> {
        let conn = &mut self.conn()?;
        let record = diesel::insert_into(products::table)
            .values(&NewProduct::new(id, &request))
            .returning(ProductRecord::as_returning())
            .get_result(conn)?;
        Ok(record.into())
    }

    fn update(&self, id: Uuid, patch: ProductPatch) -> Result<Product, CatalogError> {
        let conn = &mut self.conn()?;
        let mut product = find_product(conn, id)?;
        patch.apply(&mut product);
        let record = diesel::update(products::table.find(id))
            .set(&UpdateProduct::from(&product))
            .returning(ProductRecord::as_returning())
            .get_result(conn)
            .optional()?
            .ok_or(CatalogError::NotFound(id))?;
        Ok(record.into())
    }

    fn delete(&self, id: Uuid) -> Result<(), CatalogError> {
        let conn = &mut self.conn()?;
        let deleted = diesel::delete(products::table.find(id)).execute(conn)?;
        if deleted == 0 {
            return Err(CatalogError::NotFound(id));
        }
        Ok(())
    }
}

fn find_product(conn: &mut PgConnection, id: Uuid) -> Result<Product, CatalogError> {
    products::table
        .find(id)
        .select(ProductRecord::as_select())
        .first(conn)
        .optional()?
        .map(Product::from)
        .ok_or(CatalogError::NotFound(id))
}
