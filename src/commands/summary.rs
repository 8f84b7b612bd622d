// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::sheets::SheetsBackend;
use crate::store::ExpenseStore;
use crate::summary::summarize;
use crate::utils::{fmt_money, maybe_print_json, month_range, pretty_table};
use anyhow::Result;
use chrono::Datelike;

pub fn handle<B: SheetsBackend>(store: &ExpenseStore<B>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let today = chrono::Local::now().date_naive();
    let year = *sub.get_one::<i32>("year").unwrap_or(&today.year());
    let month = *sub.get_one::<u32>("month").unwrap_or(&today.month());

    let (start, end) = month_range(year, month)?;
    let expenses = store.list_by_date_range(&start.to_string(), &end.to_string())?;
    let budget = store.budget()?;
    let summary = summarize(&format!("{}/{}", year, month), &expenses, budget);

    if maybe_print_json(json_flag, jsonl_flag, &summary)? {
        return Ok(());
    }

    let ccy = store.default_currency()?;
    println!(
        "Summary for {}: {} across {} expenses",
        summary.month,
        fmt_money(&summary.total, &ccy),
        expenses.len()
    );
    if !summary.budget.is_zero() {
        println!(
            "Budget {} | remaining {}",
            fmt_money(&summary.budget, &ccy),
            fmt_money(&(summary.budget - summary.total), &ccy)
        );
    }

    let cat_rows: Vec<Vec<String>> = summary
        .categories
        .iter()
        .map(|c| {
            vec![
                c.category.clone(),
                format!("{:.2}", c.total),
                c.count.to_string(),
                format!("{:.1}%", c.percentage),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Total", "Count", "Share"], cat_rows)
    );

    let top_rows: Vec<Vec<String>> = summary
        .top_expenses
        .iter()
        .map(|e| {
            vec![
                e.date.clone(),
                e.category.clone(),
                format!("{:.2}", e.amount),
                e.note.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Category", "Amount", "Note"], top_rows)
    );
    Ok(())
}
