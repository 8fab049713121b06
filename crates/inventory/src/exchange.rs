//! JSON interchange: export of the full collection and merge-on-import.
//!
//! The wire format is a JSON array of camelCase item objects with keys
//! `id, name, category, quantity, price, reorderLevel, dateAdded` — the same
//! shape [`InventoryItem`] serializes to.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use stockbook_core::{DomainError, DomainResult, Notice};

use crate::item::{DEFAULT_REORDER_LEVEL, InventoryItem};
use crate::store::InventoryStore;

/// Summary returned by a successful import.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ImportReport {
    /// Number of records in the payload, merged and inserted alike.
    pub processed: usize,
}

impl ImportReport {
    pub fn notice(&self) -> Notice {
        Notice::success(format!("Successfully imported {} items.", self.processed))
    }
}

/// One record of an import payload.
///
/// Only the identifying (name, category) pair is required; every other field
/// is optional. An incoming `id` key is deliberately not modeled here —
/// unknown keys are skipped during deserialization, so imported ids are
/// always discarded and re-assigned.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportRecord {
    name: String,
    category: String,
    quantity: Option<u32>,
    price: Option<f64>,
    reorder_level: Option<u32>,
    date_added: Option<DateTime<Utc>>,
}

/// Default file name for an export taken on `date`:
/// `inventory-YYYY-MM-DD.json`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("inventory-{}.json", date.format("%Y-%m-%d"))
}

impl InventoryStore {
    /// Serialize every item to pretty-printed JSON.
    ///
    /// An empty store is a reported condition, not an empty file.
    pub fn export_json(&self) -> DomainResult<String> {
        if self.items.is_empty() {
            return Err(DomainError::EmptyExport);
        }
        serde_json::to_string_pretty(&self.items)
            .map_err(|e| DomainError::serialization(e.to_string()))
    }

    /// Merge a JSON payload into the store.
    ///
    /// The whole payload must parse before anything is touched; a malformed
    /// payload leaves the store exactly as it was. Once parsed, records are
    /// applied unconditionally in order: an exact (name, category) match —
    /// case-sensitive, unlike [`add`](Self::add) — absorbs the record's
    /// quantity, anything else is inserted under a fresh id.
    pub fn import_json(&mut self, payload: &str) -> DomainResult<ImportReport> {
        let records: Vec<ImportRecord> = serde_json::from_str(payload)
            .map_err(|e| DomainError::import_format(e.to_string()))?;

        for record in &records {
            let existing = self
                .items
                .iter_mut()
                .find(|item| item.name == record.name && item.category == record.category);

            match existing {
                Some(item) => {
                    item.quantity = item.quantity.saturating_add(record.quantity.unwrap_or(0));
                }
                None => {
                    let id = self.allocate_id();
                    self.items.push(InventoryItem {
                        id,
                        name: record.name.clone(),
                        category: record.category.clone(),
                        quantity: record.quantity.unwrap_or(0),
                        price: record.price.unwrap_or(0.0),
                        reorder_level: record.reorder_level.unwrap_or(DEFAULT_REORDER_LEVEL),
                        date_added: record.date_added.unwrap_or_else(Utc::now),
                    });
                }
            }
        }

        let report = ImportReport {
            processed: records.len(),
        };
        tracing::info!(processed = report.processed, "imported inventory payload");
        Ok(report)
    }
}
