use chrono::Utc;

use stockbook_core::{DomainError, DomainResult, ItemId, Notice};

use crate::item::{InventoryItem, ItemDraft, ItemUpdate};

/// Aggregate figures for the dashboard.
///
/// Recomputed from current state on every call; there is no cache to
/// invalidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub total_item_count: usize,
    pub total_inventory_value: f64,
    pub low_stock_count: usize,
}

/// Receipt for a freshly inserted item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedReceipt {
    pub item_id: ItemId,
    pub name: String,
}

impl CreatedReceipt {
    pub fn notice(&self) -> Notice {
        Notice::success(format!(
            "\"{}\" has been added to inventory successfully!",
            self.name
        ))
    }
}

/// Token for the second phase of a duplicate add.
///
/// Returned instead of mutating when an add collides with an existing
/// (name, category) pair. Holds everything needed to apply the quantity merge
/// once the caller's confirmation dialog comes back positive; dropping it (or
/// passing it to [`InventoryStore::cancel_merge`]) declines with zero state
/// change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMerge {
    item_id: ItemId,
    name: String,
    quantity: u32,
}

impl PendingMerge {
    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Message for the caller's confirmation dialog.
    pub fn prompt(&self) -> String {
        format!(
            "\"{}\" already exists in inventory. Would you like to update the quantity instead?",
            self.name
        )
    }
}

/// Receipt for an applied merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReceipt {
    pub item_id: ItemId,
    pub name: String,
    pub new_quantity: u32,
}

impl MergeReceipt {
    pub fn notice(&self) -> Notice {
        Notice::success(format!(
            "Updated quantity of \"{}\" to {}.",
            self.name, self.new_quantity
        ))
    }
}

/// Outcome of [`InventoryStore::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new item was appended under a fresh id.
    Created(CreatedReceipt),
    /// A case-insensitive (name, category) duplicate exists; nothing was
    /// mutated yet.
    MergePending(PendingMerge),
}

/// The authoritative in-memory inventory collection.
///
/// Owns an insertion-ordered list of items and the monotonic id counter,
/// seeded at 1. Every operation runs synchronously to completion on the
/// caller's thread; after each mutation the presentation layer re-renders
/// from [`items`](Self::items) and [`statistics`](Self::statistics).
///
/// Construct one store per host application (or per test); there is no
/// global state.
#[derive(Debug)]
pub struct InventoryStore {
    pub(crate) items: Vec<InventoryItem>,
    pub(crate) next_id: u64,
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// The full ordered snapshot, for table re-render.
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub(crate) fn allocate_id(&mut self) -> ItemId {
        let id = ItemId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a new item from raw form input.
    ///
    /// When an existing item matches the draft's name (case-insensitively)
    /// and category (exactly), no insert happens: the returned
    /// [`AddOutcome::MergePending`] token must be confirmed via
    /// [`confirm_merge`](Self::confirm_merge) before any quantity moves. A
    /// validation failure leaves the store untouched.
    pub fn add(&mut self, draft: &ItemDraft) -> DomainResult<AddOutcome> {
        let fields = draft.validate()?;

        if let Some(existing) = self.items.iter().find(|item| {
            item.name.to_lowercase() == fields.name.to_lowercase()
                && item.category == fields.category
        }) {
            tracing::debug!(id = %existing.id, name = %existing.name, "duplicate add, merge pending");
            return Ok(AddOutcome::MergePending(PendingMerge {
                item_id: existing.id,
                name: existing.name.clone(),
                quantity: fields.quantity,
            }));
        }

        let id = self.allocate_id();
        self.items.push(InventoryItem {
            id,
            name: fields.name.clone(),
            category: fields.category,
            quantity: fields.quantity,
            price: fields.price,
            reorder_level: fields.reorder_level,
            date_added: Utc::now(),
        });
        tracing::info!(id = %id, name = %fields.name, "added item");

        Ok(AddOutcome::Created(CreatedReceipt {
            item_id: id,
            name: fields.name,
        }))
    }

    /// Apply a confirmed merge: increment the target's quantity by the
    /// pending amount. Consumes no new id.
    pub fn confirm_merge(&mut self, pending: PendingMerge) -> DomainResult<MergeReceipt> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == pending.item_id)
            .ok_or(DomainError::NotFound)?;

        item.quantity = item.quantity.saturating_add(pending.quantity);
        tracing::info!(id = %item.id, quantity = item.quantity, "merged duplicate add");

        Ok(MergeReceipt {
            item_id: item.id,
            name: item.name.clone(),
            new_quantity: item.quantity,
        })
    }

    /// Decline a pending merge. Zero state change.
    pub fn cancel_merge(&self, pending: PendingMerge) -> Notice {
        tracing::debug!(id = %pending.item_id, "merge declined");
        Notice::info(format!("\"{}\" was left unchanged.", pending.name))
    }

    /// Replace an item's mutable fields in place, preserving `id` and
    /// `date_added`.
    ///
    /// No (name, category) uniqueness check happens here, so an edit can make
    /// two items share the pair; that matches the add path's contract being
    /// an add-only invariant.
    pub fn update(&mut self, id: ItemId, update: &ItemUpdate) -> DomainResult<&InventoryItem> {
        let fields = update.validate()?;
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(DomainError::NotFound)?;

        item.name = fields.name;
        item.category = fields.category;
        item.quantity = fields.quantity;
        item.price = fields.price;
        item.reorder_level = fields.reorder_level;
        tracing::info!(id = %id, name = %item.name, "updated item");

        Ok(item)
    }

    /// Remove the item with this id and hand it back (the caller usually
    /// wants the name for its notification). Confirmation dialogs are the
    /// caller's concern.
    pub fn remove(&mut self, id: ItemId) -> DomainResult<InventoryItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(DomainError::NotFound)?;
        let removed = self.items.remove(index);
        tracing::info!(id = %removed.id, name = %removed.name, "deleted item");
        Ok(removed)
    }

    /// Case-insensitive substring filter over name OR category.
    ///
    /// An empty term matches everything. Insertion order is preserved among
    /// matches; the store is not mutated.
    pub fn search(&self, term: &str) -> Vec<&InventoryItem> {
        let needle = term.to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                item.name.to_lowercase().contains(&needle)
                    || item.category.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Compute the dashboard statistics fresh from current state.
    pub fn statistics(&self) -> Statistics {
        Statistics {
            total_item_count: self.items.len(),
            total_inventory_value: self.items.iter().map(InventoryItem::total_value).sum(),
            low_stock_count: self.items.iter().filter(|item| item.is_low_stock()).count(),
        }
    }
}
