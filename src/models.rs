// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

// Sentinels substituted for empty display fields.
pub const UNKNOWN_DESCRIPTION: &str = "Unknown";
pub const UNCATEGORIZED: &str = "Uncategorized";
pub const NO_DATE: &str = "No date";

/// One logged expense. Amounts are positive and finite by construction:
/// user input is validated in `Ledger::add_expense`, stored entries pass
/// through `decode_entry`.
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseRecord {
    pub id: Uuid,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: String,
    pub date: String,
}

/// Raw submit intent from the presentation layer, all fields untrusted text.
#[derive(Debug, Clone, Default)]
pub struct ExpenseInput {
    pub description: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

/// Outcome of decoding one stored entry.
#[derive(Debug)]
pub enum Decoded {
    Valid(ExpenseRecord),
    Rejected(RejectReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    NotAnObject,
    MissingAmount,
    InvalidAmount,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::NotAnObject => write!(f, "entry is not an object"),
            RejectReason::MissingAmount => write!(f, "entry has no amount field"),
            RejectReason::InvalidAmount => write!(f, "amount is not a finite number"),
        }
    }
}

/// Decode one entry from the stored blob into a strongly-typed record.
/// Storage may be hand-edited or partially corrupted, so nothing about the
/// entry's shape is trusted: it must be an object whose `amount` is a finite
/// number. Entries written before ids existed get a fresh one.
pub fn decode_entry(value: &Value) -> Decoded {
    let Some(obj) = value.as_object() else {
        return Decoded::Rejected(RejectReason::NotAnObject);
    };
    let Some(amount) = obj.get("amount") else {
        return Decoded::Rejected(RejectReason::MissingAmount);
    };
    let Some(amount) = amount.as_f64().filter(|f| f.is_finite()) else {
        return Decoded::Rejected(RejectReason::InvalidAmount);
    };
    let Ok(amount) = Decimal::try_from(amount) else {
        return Decoded::Rejected(RejectReason::InvalidAmount);
    };

    let text = |key: &str| {
        obj.get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let id = obj
        .get("id")
        .and_then(Value::as_str)
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::new_v4);

    Decoded::Valid(ExpenseRecord {
        id,
        description: text("description"),
        amount,
        category: text("category"),
        date: text("date"),
    })
}

/// Parse a serialized ledger blob into per-entry decode outcomes.
/// A blob that is not a JSON array at all is a parse error for the caller to
/// recover from; per-entry problems are reported as `Decoded::Rejected`.
pub fn decode_records(blob: &str) -> Result<Vec<Decoded>, serde_json::Error> {
    let entries: Vec<Value> = serde_json::from_str(blob)?;
    Ok(entries.iter().map(decode_entry).collect())
}
