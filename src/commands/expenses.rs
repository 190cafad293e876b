// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger::Ledger;
use crate::models::ExpenseInput;
use crate::store::BlobStore;
use crate::utils::{maybe_print_json, parse_date, pretty_table};

pub fn add<S: BlobStore>(ledger: &mut Ledger<S>, sub: &clap::ArgMatches) -> Result<()> {
    let description = sub.get_one::<String>("description").unwrap();
    let amount = sub.get_one::<String>("amount").unwrap();
    let category = sub.get_one::<String>("category").unwrap();
    // Date format is a presentation concern; the ledger only requires the
    // field to be present.
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?.to_string(),
        None => chrono::Local::now().date_naive().to_string(),
    };

    let view = ledger.add_expense(ExpenseInput {
        description: description.clone(),
        amount: amount.clone(),
        category: category.clone(),
        date: date.clone(),
    })?;

    let logged = view.rows.last().expect("just appended");
    println!(
        "Logged {} for '{}' ({} on {})",
        logged.amount, logged.description, logged.category, logged.date
    );
    println!("Total spent: {}", view.total);
    Ok(())
}

pub fn rm<S: BlobStore>(ledger: &mut Ledger<S>, sub: &clap::ArgMatches) -> Result<()> {
    let index = *sub.get_one::<usize>("index").unwrap();
    let before = ledger.len();
    let view = ledger.delete_at(index)?;
    if view.rows.len() < before {
        println!("Removed row {}", index);
        println!("Total spent: {}", view.total);
    } else {
        println!("No expense at row {} (ledger has {} rows)", index, before);
    }
    Ok(())
}

pub fn list<S: BlobStore>(ledger: &Ledger<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let view = ledger.view();
    if !maybe_print_json(json_flag, jsonl_flag, &view.rows)? {
        let rows: Vec<Vec<String>> = view
            .rows
            .iter()
            .map(|r| {
                vec![
                    r.index.to_string(),
                    r.description.clone(),
                    r.amount.clone(),
                    r.category.clone(),
                    r.date.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["#", "Description", "Amount", "Category", "Date"], rows)
        );
        println!("Total spent: {}", view.total);
    }
    Ok(())
}
