// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger::Ledger;
use crate::store::BlobStore;
use crate::utils::{maybe_print_json, pretty_table};

pub fn summary<S: BlobStore>(ledger: &Ledger<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let view = ledger.view();
    if !maybe_print_json(json_flag, jsonl_flag, &view.categories)? {
        let rows: Vec<Vec<String>> = view
            .categories
            .iter()
            .map(|c| vec![c.category.clone(), c.amount.clone()])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], rows));
        println!("Total spent: {}", view.total);
    }
    Ok(())
}
