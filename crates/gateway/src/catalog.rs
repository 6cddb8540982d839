// Product catalog
// Decision: The catalog is a constant rebuilt per request; creates are acknowledged, not stored
//
// Whether create should eventually persist is an open product question; until
// it is answered the list never changes.

use chrono::{DateTime, Utc};
use multiapp_core::ApiError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";
pub const INVALID_PRICE_MESSAGE: &str = "Invalid price";
pub const CREATED_MESSAGE: &str = "Product created successfully";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Catalog id, or creation time in epoch milliseconds for created products.
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Laptop")]
    pub name: String,
    #[schema(example = 999.99)]
    pub price: f64,
    #[schema(example = "Electronics")]
    pub category: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductList {
    pub products: Vec<Product>,
    pub total: usize,
}

impl From<Vec<Product>> for ProductList {
    fn from(products: Vec<Product>) -> Self {
        Self {
            total: products.len(),
            products,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductCreated {
    #[schema(example = "Product created successfully")]
    pub message: String,
    pub product: Product,
}

/// Create request body. Price may be a number or a numeric string.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "Desk Lamp")]
    pub name: String,
    #[schema(value_type = f64, example = 24.5)]
    pub price: Value,
    #[schema(example = "Home")]
    pub category: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProductError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid price")]
    InvalidPrice,
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// The served catalog. Identical on every call.
pub fn catalog() -> Vec<Product> {
    let product = |id, name: &str, price, category: &str| Product {
        id,
        name: name.to_string(),
        price,
        category: category.to_string(),
        created_at: None,
    };

    vec![
        product(1, "Laptop", 999.99, "Electronics"),
        product(2, "Book", 29.99, "Education"),
        product(3, "Coffee Mug", 12.99, "Kitchen"),
    ]
}

/// A validated create request
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl NewProduct {
    /// Presence of all three fields is checked before the price is coerced.
    pub fn from_json(body: &Value) -> Result<Self, ProductError> {
        let name = non_empty_str(body.get("name"));
        let category = non_empty_str(body.get("category"));
        let price = body.get("price").filter(|p| is_present(p));

        let (Some(name), Some(price), Some(category)) = (name, price, category) else {
            return Err(ProductError::MissingFields);
        };

        Ok(Self {
            name: name.to_string(),
            price: coerce_price(price)?,
            category: category.to_string(),
        })
    }

    /// Stamp the product; the id is `now` in epoch milliseconds.
    pub fn into_product(self, now: DateTime<Utc>) -> Product {
        Product {
            id: now.timestamp_millis(),
            name: self.name,
            price: self.price,
            category: self.category,
            created_at: Some(now),
        }
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

fn coerce_price(value: &Value) -> Result<f64, ProductError> {
    let price = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    price
        .filter(|p| p.is_finite())
        .ok_or(ProductError::InvalidPrice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_catalog_is_constant() {
        let products = catalog();
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].name, "Laptop");
        assert_eq!(products[2].price, 12.99);
        assert_eq!(catalog(), products);
    }

    #[test]
    fn test_product_list_total() {
        let list = ProductList::from(catalog());
        assert_eq!(list.total, 3);
    }

    #[test]
    fn test_valid_request() {
        let product = NewProduct::from_json(&json!({
            "name": "Desk Lamp",
            "price": 24.5,
            "category": "Home"
        }))
        .unwrap();
        assert_eq!(product.price, 24.5);
    }

    #[test]
    fn test_price_as_string() {
        let product = NewProduct::from_json(&json!({
            "name": "Desk Lamp",
            "price": " 19.90 ",
            "category": "Home"
        }))
        .unwrap();
        assert_eq!(product.price, 19.9);
    }

    #[test]
    fn test_zero_price_is_present() {
        let product = NewProduct::from_json(&json!({
            "name": "Sample",
            "price": 0,
            "category": "Free"
        }))
        .unwrap();
        assert_eq!(product.price, 0.0);
    }

    #[test]
    fn test_missing_fields() {
        for body in [
            json!({ "price": 1, "category": "Home" }),
            json!({ "name": "Lamp", "category": "Home" }),
            json!({ "name": "Lamp", "price": 1 }),
            json!({ "name": "", "price": 1, "category": "Home" }),
            json!({ "name": "Lamp", "price": null, "category": "Home" }),
            json!({ "name": "Lamp", "price": "", "category": "Home" }),
            json!({ "name": "Lamp", "price": 1, "category": "   " }),
            json!("not an object"),
        ] {
            assert_eq!(
                NewProduct::from_json(&body),
                Err(ProductError::MissingFields),
                "{}",
                body
            );
        }
    }

    #[test]
    fn test_invalid_price() {
        for price in [json!("cheap"), json!(true), json!([1]), json!("NaN"), json!("inf")] {
            let body = json!({ "name": "Lamp", "price": price, "category": "Home" });
            assert_eq!(
                NewProduct::from_json(&body),
                Err(ProductError::InvalidPrice),
                "{}",
                body
            );
        }
    }

    #[test]
    fn test_into_product_uses_millisecond_id() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let product = NewProduct {
            name: "Lamp".to_string(),
            price: 10.0,
            category: "Home".to_string(),
        }
        .into_product(now);

        assert_eq!(product.id, now.timestamp_millis());
        assert_eq!(product.created_at, Some(now));

        let json = serde_json::to_value(&product).unwrap();
        assert!(json["createdAt"].is_string());
    }
}
