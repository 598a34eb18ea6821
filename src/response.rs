//! Standard response envelope helpers.
//!
//! Every body this API returns has the shape `{ "message": ..., "data": ... }`.
//! Callers pick the helper matching the cardinality of what they return.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub message: String,
    pub data: T,
}

/// Serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmptyObject {}

/// Payload of an item envelope: the entity, or `{}` when there is none.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ItemData<T> {
    Found(T),
    Empty(EmptyObject),
}

impl<T> From<Option<T>> for ItemData<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => ItemData::Found(v),
            None => ItemData::Empty(EmptyObject {}),
        }
    }
}

/// Free-form payload, passed through unchanged (including `null`).
pub fn basic<T: Serialize>(message: impl Into<String>, data: T) -> Envelope<T> {
    Envelope {
        message: message.into(),
        data,
    }
}

/// Collection payload; absent data becomes `[]`.
pub fn list<T: Serialize>(message: impl Into<String>, data: Option<Vec<T>>) -> Envelope<Vec<T>> {
    Envelope {
        message: message.into(),
        data: data.unwrap_or_default(),
    }
}

/// Single-entity payload; absent data becomes `{}`.
pub fn item<T: Serialize>(message: impl Into<String>, data: Option<T>) -> Envelope<ItemData<T>> {
    Envelope {
        message: message.into(),
        data: data.into(),
    }
}

/// Failure payload. Same shape as [`basic`].
pub fn error<T: Serialize>(message: impl Into<String>, data: T) -> Envelope<T> {
    basic(message, data)
}
