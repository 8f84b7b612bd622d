// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Expense, ExpenseDraft};
use crate::sheets::SheetsBackend;
use crate::store::ExpenseStore;
use crate::utils::{maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;

pub fn handle<B: SheetsBackend>(store: &ExpenseStore<B>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("delete", sub)) => delete(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add<B: SheetsBackend>(store: &ExpenseStore<B>, sub: &clap::ArgMatches) -> Result<()> {
    let date = sub.get_one::<String>("date").unwrap().trim().to_string();
    let category = sub.get_one::<String>("category").unwrap().trim().to_string();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap().trim())?;
    if category.is_empty() {
        return Err(anyhow::anyhow!("Category must not be empty"));
    }
    if amount <= Decimal::ZERO {
        return Err(anyhow::anyhow!("Amount must be a positive number"));
    }

    let opt = |name: &str| {
        sub.get_one::<String>(name)
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    };
    let project = match sub.get_one::<String>("project") {
        Some(p) => p.trim().to_string(),
        None => store.default_project()?,
    };
    let currency = match sub.get_one::<String>("currency") {
        Some(c) => c.trim().to_string(),
        None => store.default_currency()?,
    };

    let expense = store.append(ExpenseDraft {
        date,
        category,
        subcategory: opt("subcategory"),
        amount,
        project,
        method: opt("method"),
        label: opt("label"),
        currency,
        note: opt("note"),
    })?;
    println!(
        "Recorded {} {} for {} on {} (id: {})",
        expense.currency, expense.amount, expense.category, expense.date, expense.id
    );
    Ok(())
}

fn list<B: SheetsBackend>(store: &ExpenseStore<B>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|e| {
                vec![
                    e.date.clone(),
                    e.category.clone(),
                    e.subcategory.clone(),
                    e.amount.to_string(),
                    e.currency.clone(),
                    e.note.clone(),
                    e.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Category", "Subcategory", "Amount", "CCY", "Note", "ID"],
                rows,
            )
        );
    }
    Ok(())
}

/// Filter dispatch: a full date range wins over a category filter, which wins
/// over a plain limited listing.
pub fn query_rows<B: SheetsBackend>(
    store: &ExpenseStore<B>,
    sub: &clap::ArgMatches,
) -> Result<Vec<Expense>> {
    if let (Some(from), Some(to)) = (
        sub.get_one::<String>("from"),
        sub.get_one::<String>("to"),
    ) {
        return store.list_by_date_range(from, to);
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        return store.list_by_category(cat);
    }
    store.list(sub.get_one::<usize>("limit").copied())
}

fn delete<B: SheetsBackend>(store: &ExpenseStore<B>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    if store.delete_by_id(id)? {
        println!("Deleted expense {}", id);
    } else {
        println!("No expense found with id {}", id);
    }
    Ok(())
}
