// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::sheets::SheetsBackend;
use crate::store::ExpenseStore;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle<B: SheetsBackend>(store: &ExpenseStore<B>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("categories", _)) => categories(store)?,
        Some(("methods", _)) => simple_list("Method", store.payment_methods()?),
        Some(("projects", _)) => simple_list("Project", store.projects()?),
        Some(("labels", _)) => simple_list("Label", store.labels()?),
        Some(("defaults", _)) => defaults(store)?,
        _ => {}
    }
    Ok(())
}

fn categories<B: SheetsBackend>(store: &ExpenseStore<B>) -> Result<()> {
    let rows = store
        .category_config()?
        .into_iter()
        .map(|c| vec![c.category, c.subcategories.join(", ")])
        .collect();
    println!("{}", pretty_table(&["Category", "Subcategories"], rows));
    Ok(())
}

fn simple_list(header: &str, values: Vec<String>) {
    let rows = values.into_iter().map(|v| vec![v]).collect();
    println!("{}", pretty_table(&[header], rows));
}

fn defaults<B: SheetsBackend>(store: &ExpenseStore<B>) -> Result<()> {
    let rows = vec![
        vec!["default_project".to_string(), store.default_project()?],
        vec!["default_currency".to_string(), store.default_currency()?],
        vec!["monthly_budget".to_string(), store.budget()?.to_string()],
    ];
    println!("{}", pretty_table(&["Key", "Value"], rows));
    Ok(())
}
