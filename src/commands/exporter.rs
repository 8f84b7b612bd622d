// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::sheets::SheetsBackend;
use crate::store::ExpenseStore;
use anyhow::Result;

pub fn handle<B: SheetsBackend>(store: &ExpenseStore<B>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("expenses", sub)) => export_expenses(store, sub),
        _ => Ok(()),
    }
}

fn export_expenses<B: SheetsBackend>(
    store: &ExpenseStore<B>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let expenses = store.list(None)?;
    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "date",
                "category",
                "subcategory",
                "amount",
                "project",
                "method",
                "label",
                "currency",
                "note",
                "id",
            ])?;
            for e in &expenses {
                wtr.write_record([
                    e.date.clone(),
                    e.category.clone(),
                    e.subcategory.clone(),
                    e.amount.to_string(),
                    e.project.clone(),
                    e.method.clone(),
                    e.label.clone(),
                    e.currency.clone(),
                    e.note.clone(),
                    e.id.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&expenses)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} expenses to {}", expenses.len(), out);
    Ok(())
}
