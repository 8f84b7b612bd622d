// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use spendsheet::models::ExpenseDraft;
use spendsheet::sheets::MemSheets;
use spendsheet::store::ExpenseStore;
use spendsheet::{cli, commands::expenses};

fn draft(date: &str, category: &str, amount: &str) -> ExpenseDraft {
    ExpenseDraft {
        date: date.to_string(),
        category: category.to_string(),
        subcategory: String::new(),
        amount: amount.parse().unwrap(),
        project: String::new(),
        method: String::new(),
        label: String::new(),
        currency: "TWD".to_string(),
        note: String::new(),
    }
}

fn setup() -> ExpenseStore<MemSheets> {
    let store = ExpenseStore::new(MemSheets::new());
    store.initialize().unwrap();
    for i in 1..=3 {
        store
            .append(draft(&format!("2025-01-0{}", i), "Food", "10"))
            .unwrap();
    }
    store
}

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["spendsheet", "expense", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("expense", exp_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = exp_m.subcommand() {
            return list_m.clone();
        }
        panic!("no list subcommand");
    }
    panic!("no expense subcommand");
}

#[test]
fn list_limit_respected() {
    let store = setup();
    let rows = expenses::query_rows(&store, &list_matches(&["--limit", "2"])).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2025-01-03");
}

#[test]
fn date_range_flags_win_over_category() {
    let store = setup();
    let sub = list_matches(&[
        "--from",
        "2025-01-01",
        "--to",
        "2025-01-02",
        "--category",
        "Transport",
    ]);
    // the range filter is dispatched first; the category flag is ignored
    let rows = expenses::query_rows(&store, &sub).unwrap();
    assert_eq!(rows.len(), 2);
}

#[test]
fn category_flag_filters_when_no_range_given() {
    let store = setup();
    let rows = expenses::query_rows(&store, &list_matches(&["--category", "transport"])).unwrap();
    assert!(rows.is_empty());
    let rows = expenses::query_rows(&store, &list_matches(&["--category", "FOOD"])).unwrap();
    assert_eq!(rows.len(), 3);
}
