use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockbook_core::{DomainError, DomainResult, ItemId};

/// Reorder level applied when a draft omits the field or supplies something
/// that does not parse as a non-negative integer.
pub const DEFAULT_REORDER_LEVEL: u32 = 10;

/// A single stock record.
///
/// `id` and `date_added` are fixed at creation; everything else is replaced
/// wholesale by an update. Serializes with camelCase keys, which is also the
/// export/import wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub price: f64,
    pub reorder_level: u32,
    pub date_added: DateTime<Utc>,
}

impl InventoryItem {
    /// `quantity × price`, recomputed on every read (never stored).
    pub fn total_value(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }

    /// An item is low stock once its quantity falls to or below its reorder
    /// level.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.reorder_level
    }
}

/// Raw form values for a new item, exactly as the presentation layer read
/// them out of its inputs. Parsing and validation happen in the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub price: String,
    /// Optional on creation; falls back to [`DEFAULT_REORDER_LEVEL`].
    pub reorder_level: Option<String>,
}

/// Raw form values for editing an existing item.
///
/// Unlike [`ItemDraft`], the reorder level is required here and must parse to
/// a non-negative integer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemUpdate {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub price: String,
    pub reorder_level: String,
}

/// Draft fields after validation, ready to be applied to the store.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ValidFields {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub price: f64,
    pub reorder_level: u32,
}

impl ItemDraft {
    pub(crate) fn validate(&self) -> DomainResult<ValidFields> {
        Ok(ValidFields {
            name: non_empty(&self.name, "name")?,
            category: non_empty(&self.category, "category")?,
            quantity: non_negative_int(&self.quantity, "quantity")?,
            price: non_negative_price(&self.price)?,
            reorder_level: self
                .reorder_level
                .as_deref()
                .and_then(|raw| raw.trim().parse::<i64>().ok())
                .and_then(|value| u32::try_from(value).ok())
                .unwrap_or(DEFAULT_REORDER_LEVEL),
        })
    }
}

impl ItemUpdate {
    pub(crate) fn validate(&self) -> DomainResult<ValidFields> {
        Ok(ValidFields {
            name: non_empty(&self.name, "name")?,
            category: non_empty(&self.category, "category")?,
            quantity: non_negative_int(&self.quantity, "quantity")?,
            price: non_negative_price(&self.price)?,
            reorder_level: non_negative_int(&self.reorder_level, "reorder level")?,
        })
    }
}

fn non_empty(raw: &str, field: &str) -> DomainResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

fn non_negative_int(raw: &str, field: &str) -> DomainResult<u32> {
    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| DomainError::validation(format!("{field} is not a number")))?;
    if value < 0 {
        return Err(DomainError::validation(format!(
            "{field} cannot be negative"
        )));
    }
    u32::try_from(value)
        .map_err(|_| DomainError::validation(format!("{field} is out of range")))
}

fn non_negative_price(raw: &str) -> DomainResult<f64> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| DomainError::validation("price is not a number"))?;
    if !value.is_finite() {
        return Err(DomainError::validation("price is not a number"));
    }
    if value < 0.0 {
        return Err(DomainError::validation("price cannot be negative"));
    }
    Ok(value)
}
