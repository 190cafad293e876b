// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use crate::models::{Decoded, ExpenseInput, ExpenseRecord};
use crate::store::BlobStore;
use crate::view::{self, ViewModel};

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid amount '{0}': expected a positive number")]
    InvalidAmount(String),

    #[error("Failed to persist ledger: {0:#}")]
    Storage(anyhow::Error),
}

/// Owns the ordered expense collection and the only mutable handle to it.
/// Every public operation runs validate -> mutate -> persist -> recompute to
/// completion; the presentation layer only ever sees the derived `ViewModel`.
pub struct Ledger<S: BlobStore> {
    store: S,
    key: String,
    records: Vec<ExpenseRecord>,
}

impl<S: BlobStore> Ledger<S> {
    /// Load the ledger from the store. Never fails: a missing blob, an
    /// unreadable store, or an unparsable blob all recover to an empty
    /// ledger, and individually invalid entries are dropped. Filtering is a
    /// read-time view only; the stored blob is left untouched until the next
    /// mutation overwrites it.
    pub fn hydrate(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let records = match store.get(&key) {
            Ok(Some(blob)) => match crate::models::decode_records(&blob) {
                Ok(decoded) => {
                    let mut records = Vec::with_capacity(decoded.len());
                    for entry in decoded {
                        match entry {
                            Decoded::Valid(r) => records.push(r),
                            Decoded::Rejected(reason) => {
                                warn!(%reason, "dropping invalid stored expense");
                            }
                        }
                    }
                    records
                }
                Err(e) => {
                    warn!("discarding unparsable ledger blob: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("ledger read failed, starting empty: {e:#}");
                Vec::new()
            }
        };
        Self {
            store,
            key,
            records,
        }
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn view(&self) -> ViewModel {
        view::compute(&self.records)
    }

    /// Validate a submit intent and append the resulting record.
    ///
    /// Rejection happens before any state mutation. A persistence failure is
    /// surfaced as `LedgerError::Storage`, but the record stays in memory:
    /// the in-memory ledger remains authoritative for the session.
    pub fn add_expense(&mut self, input: ExpenseInput) -> Result<ViewModel, LedgerError> {
        let description = input.description.trim();
        if description.is_empty() {
            return Err(LedgerError::MissingField("description"));
        }
        let raw_amount = input.amount.trim();
        if raw_amount.is_empty() {
            return Err(LedgerError::MissingField("amount"));
        }
        if input.category.trim().is_empty() {
            return Err(LedgerError::MissingField("category"));
        }
        if input.date.trim().is_empty() {
            return Err(LedgerError::MissingField("date"));
        }

        let amount: Decimal = raw_amount
            .parse()
            .map_err(|_| LedgerError::InvalidAmount(raw_amount.to_string()))?;
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(raw_amount.to_string()));
        }

        self.records.push(ExpenseRecord {
            id: Uuid::new_v4(),
            description: description.to_string(),
            amount,
            category: input.category,
            date: input.date,
        });
        self.save()?;
        Ok(self.view())
    }

    /// Delete the record at a position in the current sequence. An
    /// out-of-range index is a logged no-op, never a fault: indices are only
    /// valid against the view model they came from.
    pub fn delete_at(&mut self, index: usize) -> Result<ViewModel, LedgerError> {
        if index >= self.records.len() {
            warn!(index, len = self.records.len(), "delete index out of range");
            return Ok(self.view());
        }
        self.records.remove(index);
        self.save()?;
        Ok(self.view())
    }

    /// Delete a record by its stable id. Immune to the index staleness that
    /// positional addressing suffers across renders; an unknown id is a
    /// logged no-op.
    pub fn delete_by_id(&mut self, id: Uuid) -> Result<ViewModel, LedgerError> {
        let Some(index) = self.records.iter().position(|r| r.id == id) else {
            warn!(%id, "delete id not found");
            return Ok(self.view());
        };
        self.records.remove(index);
        self.save()?;
        Ok(self.view())
    }

    // Full rewrite of the blob on every mutation; the ledger is small and
    // the store contract is a single opaque value.
    fn save(&self) -> Result<(), LedgerError> {
        let blob = serde_json::to_string(&self.records)
            .map_err(|e| LedgerError::Storage(anyhow::Error::new(e)))?;
        self.store
            .set(&self.key, &blob)
            .map_err(LedgerError::Storage)
    }
}
