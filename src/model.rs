//! Product record, request input, and the loose value coercions the API accepts.
//!
//! Request bodies are accepted loosely: `price: "1500"` is a valid price and
//! `stock: 0` counts as supplied while `price: 0` does not. The helpers here
//! define exactly what "supplied" and "integer" mean for incoming JSON.

use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const MISSING_FIELDS_MESSAGE: &str = "Please provide name, price, and stock";
pub const INVALID_INTEGER_MESSAGE: &str = "price and stock must be integers";
pub const INVALID_NAME_MESSAGE: &str = "name must be text";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub stock: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Writable columns of a product, already coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFields {
    pub name: String,
    pub price: i64,
    pub stock: i64,
}

/// Body of `POST /products` and `PUT /products/:id`.
///
/// A field is `None` only when the key is absent; an explicit `null` is `Some(Value::Null)`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductInput {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub price: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub stock: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl ProductInput {
    /// Fields for a new product. name and price must be truthy; stock only has to be there.
    pub fn into_new_fields(self) -> Result<ProductFields, AppError> {
        let (Some(name), Some(price), Some(stock)) = (
            self.name.filter(is_truthy),
            self.price.filter(is_truthy),
            self.stock,
        ) else {
            return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.into()));
        };
        Ok(ProductFields {
            name: text_field(&name)?,
            price: integer_field(&price)?,
            stock: integer_field(&stock)?,
        })
    }

    /// Full replacement fields; anything not supplied keeps `existing`.
    ///
    /// Same asymmetry as creation: name and price count only when truthy,
    /// stock counts whenever the key is there.
    pub fn merge(self, existing: &Product) -> Result<ProductFields, AppError> {
        Ok(ProductFields {
            name: match self.name.filter(is_truthy) {
                Some(v) => text_field(&v)?,
                None => existing.name.clone(),
            },
            price: match self.price.filter(is_truthy) {
                Some(v) => integer_field(&v)?,
                None => existing.price,
            },
            stock: match self.stock {
                Some(v) => integer_field(&v)?,
                None => existing.stock,
            },
        })
    }
}

fn text_field(value: &Value) -> Result<String, AppError> {
    coerce_text(value).ok_or_else(|| AppError::Validation(INVALID_NAME_MESSAGE.into()))
}

fn integer_field(value: &Value) -> Result<i64, AppError> {
    coerce_integer(value).ok_or_else(|| AppError::Validation(INVALID_INTEGER_MESSAGE.into()))
}

/// `null`, `false`, `0` and `""` are falsy; everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Integer from a JSON value: numbers truncate toward zero, strings yield their leading integer.
pub fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            let f = n.as_f64()?.trunc();
            (f.is_finite() && f >= i64::MIN as f64 && f <= i64::MAX as f64).then_some(f as i64)
        }),
        Value::String(s) => parse_leading_integer(s),
        _ => None,
    }
}

/// Leading integer of `s`, skipping leading whitespace. `"12abc"` is 12, `"abc"` is `None`.
pub fn parse_leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
