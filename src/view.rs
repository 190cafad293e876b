// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{ExpenseRecord, NO_DATE, UNCATEGORIZED, UNKNOWN_DESCRIPTION};

/// Read-only projection of the ledger handed to the presentation layer.
/// Derived, never stored; recomputed after every mutation.
#[derive(Debug, Clone, Serialize)]
pub struct ViewModel {
    pub rows: Vec<Row>,
    pub total: String,
    pub categories: Vec<CategoryTotal>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Row {
    /// Position in the current ledger sequence. Valid for delete addressing
    /// only until the next mutation; stale indices must be re-derived from a
    /// fresh view model.
    pub index: usize,
    pub id: Uuid,
    pub description: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: String,
}

/// Format a monetary amount to exactly two decimal places,
/// rounding halves away from zero (10.005 -> "10.01").
pub fn fmt_amount(d: Decimal) -> String {
    format!(
        "{:.2}",
        d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Pure reduction of the record sequence into the view model.
pub fn compute(records: &[ExpenseRecord]) -> ViewModel {
    let total: Decimal = records.iter().map(|r| r.amount).sum();

    // Category order is first-seen order, which the linear scan preserves.
    // Ledgers are small enough that a map would buy nothing.
    let mut categories: Vec<(String, Decimal)> = Vec::new();
    for r in records {
        let key = display_or(&r.category, UNCATEGORIZED);
        match categories.iter_mut().find(|(c, _)| *c == key) {
            Some((_, sum)) => *sum += r.amount,
            None => categories.push((key.to_string(), r.amount)),
        }
    }

    let rows = records
        .iter()
        .enumerate()
        .map(|(index, r)| Row {
            index,
            id: r.id,
            description: display_or(&r.description, UNKNOWN_DESCRIPTION).to_string(),
            amount: fmt_amount(r.amount),
            category: display_or(&r.category, UNCATEGORIZED).to_string(),
            date: display_or(&r.date, NO_DATE).to_string(),
        })
        .collect();

    ViewModel {
        rows,
        total: fmt_amount(total),
        categories: categories
            .into_iter()
            .map(|(category, amount)| CategoryTotal {
                category,
                amount: fmt_amount(amount),
            })
            .collect(),
    }
}

fn display_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}
