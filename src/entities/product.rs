//! Catalog products

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::field::FieldValue;
use crate::{impl_record, wire_enum};

/// Stock level below which a product counts as low-stock
pub const LOW_STOCK_THRESHOLD: i64 = 20;

wire_enum!(
    /// Availability bucket derived from the stock level
    StockStatus {
        InStock => "in-stock",
        LowStock => "low-stock",
        OutOfStock => "out-of-stock",
    }
);

impl StockStatus {
    /// The bucket for a given stock level
    pub fn for_level(stock: i64) -> Self {
        if stock <= 0 {
            StockStatus::OutOfStock
        } else if stock < LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }
}

wire_enum!(
    /// Catalog lifecycle of a product
    ProductStatus {
        Active => "active",
        Discontinued => "discontinued",
        Draft => "draft",
    }
);

/// One catalog product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Stock keeping unit (e.g., "ELC-4821")
    pub sku: String,
    pub name: String,
    pub category: String,
    pub brand: String,

    /// Units on hand
    pub stock: i64,

    /// Derived from `stock`; kept in sync by [`Product::set_stock`]
    pub stock_status: StockStatus,

    pub unit_price: f64,

    /// Minimum order quantity
    pub moq: i64,

    pub status: ProductStatus,
}

impl Product {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        brand: impl Into<String>,
        stock: i64,
        unit_price: f64,
        moq: i64,
        status: ProductStatus,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            sku: sku.into(),
            name: name.into(),
            category: category.into(),
            brand: brand.into(),
            stock,
            stock_status: StockStatus::for_level(stock),
            unit_price,
            moq,
            status,
        }
    }

    /// Update the stock level, recomputing the availability bucket
    pub fn set_stock(&mut self, stock: i64) {
        self.stock = stock;
        self.stock_status = StockStatus::for_level(stock);
        self.touch();
    }

    /// Update the unit price
    pub fn set_unit_price(&mut self, unit_price: f64) {
        self.unit_price = unit_price;
        self.touch();
    }

    /// Whether partners can put this product on a request
    pub fn is_orderable(&self) -> bool {
        self.status == ProductStatus::Active
    }
}

impl_record!(
    Product,
    singular: "product",
    plural: "products",
    status: |this| this.status.to_string(),
    display_name: |this| &this.name,
    search: ["name", "sku"],
    sort: ["name", "unit_price", "stock"],
    filter: ["category", "brand", "stock_status", "status"],
    field_value: |this, field| match field {
        "sku" => Some(FieldValue::String(this.sku.clone())),
        "name" => Some(FieldValue::String(this.name.clone())),
        "category" => Some(FieldValue::String(this.category.clone())),
        "brand" => Some(FieldValue::String(this.brand.clone())),
        "stock" => Some(FieldValue::Integer(this.stock)),
        "stock_status" => Some(FieldValue::String(this.stock_status.to_string())),
        "unit_price" => Some(FieldValue::Float(this.unit_price)),
        "moq" => Some(FieldValue::Integer(this.moq)),
        "status" => Some(FieldValue::String(this.status.to_string())),
        _ => None,
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::Record;

    fn relay() -> Product {
        Product::new(
            "ELC-4821",
            "Industrial Relay Module 24V",
            "Electronics",
            "Siemens",
            1240,
            84.5,
            10,
            ProductStatus::Active,
        )
    }

    #[test]
    fn test_stock_status_buckets() {
        assert_eq!(StockStatus::for_level(0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::for_level(-5), StockStatus::OutOfStock);
        assert_eq!(StockStatus::for_level(8), StockStatus::LowStock);
        assert_eq!(StockStatus::for_level(19), StockStatus::LowStock);
        assert_eq!(StockStatus::for_level(20), StockStatus::InStock);
        assert_eq!(StockStatus::for_level(1240), StockStatus::InStock);
    }

    #[test]
    fn test_set_stock_keeps_bucket_in_sync() {
        let mut product = relay();
        assert_eq!(product.stock_status, StockStatus::InStock);

        product.set_stock(3);
        assert_eq!(product.stock_status, StockStatus::LowStock);

        product.set_stock(0);
        assert_eq!(product.stock_status, StockStatus::OutOfStock);
    }

    #[test]
    fn test_orderable() {
        let mut product = relay();
        assert!(product.is_orderable());
        product.status = ProductStatus::Discontinued;
        assert!(!product.is_orderable());
    }

    #[test]
    fn test_field_values_for_query_engine() {
        let product = relay();
        assert_eq!(
            product.field_value("sku"),
            Some(FieldValue::String("ELC-4821".to_string()))
        );
        assert_eq!(product.field_value("stock"), Some(FieldValue::Integer(1240)));
        assert_eq!(
            product.field_value("stock_status"),
            Some(FieldValue::String("in-stock".to_string()))
        );
        assert_eq!(product.field_value("weight"), None);
    }
}
