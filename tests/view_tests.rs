// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use spendlog::models::ExpenseRecord;
use spendlog::view;
use uuid::Uuid;

fn record(description: &str, amount: &str, category: &str, date: &str) -> ExpenseRecord {
    ExpenseRecord {
        id: Uuid::new_v4(),
        description: description.to_string(),
        amount: amount.parse::<Decimal>().unwrap(),
        category: category.to_string(),
        date: date.to_string(),
    }
}

#[test]
fn empty_ledger_views_as_zero() {
    let view = view::compute(&[]);
    assert!(view.rows.is_empty());
    assert!(view.categories.is_empty());
    assert_eq!(view.total, "0.00");
}

#[test]
fn total_rounds_halves_away_from_zero() {
    let records = [
        record("Coffee", "10.005", "Food", "2024-01-01"),
        record("Bus", "5", "Travel", "2024-01-02"),
    ];
    let view = view::compute(&records);
    assert_eq!(view.total, "15.01");
    assert_eq!(view.rows[0].amount, "10.01");
    assert_eq!(view.rows[1].amount, "5.00");
}

#[test]
fn category_summary_sums_in_first_seen_order() {
    let records = [
        record("Lunch", "10", "Food", "2024-01-01"),
        record("Dinner", "5", "Food", "2024-01-02"),
        record("Train", "20", "Travel", "2024-01-03"),
    ];
    let view = view::compute(&records);

    let summary: Vec<(&str, &str)> = view
        .categories
        .iter()
        .map(|c| (c.category.as_str(), c.amount.as_str()))
        .collect();
    assert_eq!(summary, [("Food", "15.00"), ("Travel", "20.00")]);
}

#[test]
fn category_order_follows_first_contributing_record() {
    let records = [
        record("Train", "20", "Travel", "2024-01-01"),
        record("Lunch", "10", "Food", "2024-01-02"),
        record("Taxi", "7", "Travel", "2024-01-03"),
    ];
    let view = view::compute(&records);
    let order: Vec<&str> = view.categories.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(order, ["Travel", "Food"]);
}

#[test]
fn empty_display_fields_get_sentinels() {
    let records = [record("", "1", "", "")];
    let view = view::compute(&records);

    assert_eq!(view.rows[0].description, "Unknown");
    assert_eq!(view.rows[0].category, "Uncategorized");
    assert_eq!(view.rows[0].date, "No date");
    assert_eq!(view.categories[0].category, "Uncategorized");
    assert_eq!(view.categories[0].amount, "1.00");
}

#[test]
fn rows_carry_their_current_index() {
    let records = [
        record("a", "1", "Misc", "2024-01-01"),
        record("b", "2", "Misc", "2024-01-02"),
        record("c", "3", "Misc", "2024-01-03"),
    ];
    let view = view::compute(&records);
    let indices: Vec<usize> = view.rows.iter().map(|r| r.index).collect();
    assert_eq!(indices, [0, 1, 2]);
}
