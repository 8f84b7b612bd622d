// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde_json::json;
use spendsheet::models::ExpenseDraft;
use spendsheet::sheets::{MemSheets, SheetsBackend};
use spendsheet::store::ExpenseStore;

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
    store
}

#[test]
fn append_list_delete_round_trip() {
    let store = setup();
    let added = store.append(draft("2024/03/01", "Food", "150")).unwrap();
    assert!(!added.id.is_empty());
    assert_eq!(added.amount, Decimal::from(150));

    let listed = store.list(None).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, added.id);

    assert!(store.delete_by_id(&added.id).unwrap());
    assert!(store.list(None).unwrap().is_empty());
}

#[test]
fn list_sorts_descending_with_unparsable_dates_last() {
    let store = setup();
    store.append(draft("2024-01-05", "Food", "10")).unwrap();
    store.append(draft("2024-01-20", "Food", "20")).unwrap();
    store.append(draft("2024/01-bad", "Food", "30")).unwrap();

    let dates: Vec<String> = store
        .list(None)
        .unwrap()
        .into_iter()
        .map(|e| e.date)
        .collect();
    assert_eq!(dates, ["2024-01-20", "2024-01-05", "2024/01-bad"]);
}

#[test]
fn list_limit_truncates_after_sorting() {
    let store = setup();
    store.append(draft("2024-01-05", "Food", "10")).unwrap();
    store.append(draft("2024-01-20", "Food", "20")).unwrap();
    store.append(draft("2024-01-10", "Food", "30")).unwrap();

    let listed = store.list(Some(2)).unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].date, "2024-01-20");
    assert_eq!(listed[1].date, "2024-01-10");
}

#[test]
fn range_filter_is_a_subset_and_drops_unparsable_dates() {
    let store = setup();
    store.append(draft("2024-01-05", "Food", "10")).unwrap();
    store.append(draft("2024-01-20", "Food", "20")).unwrap();
    store.append(draft("not-a-date", "Food", "30")).unwrap();
    store.append(draft("2024-02-02", "Food", "40")).unwrap();

    let all = store.list(None).unwrap();
    let ranged = store
        .list_by_date_range("2024/01/01", "2024-01-31")
        .unwrap();
    assert_eq!(ranged.len(), 2);
    for e in &ranged {
        assert!(all.iter().any(|o| o.id == e.id));
        assert_ne!(e.date, "not-a-date");
    }
}

#[test]
fn unparsable_bounds_match_nothing() {
    let store = setup();
    store.append(draft("2024-01-05", "Food", "10")).unwrap();
    assert!(store
        .list_by_date_range("garbage", "2024-01-31")
        .unwrap()
        .is_empty());
}

#[test]
fn category_filter_is_case_insensitive() {
    let store = setup();
    store.append(draft("2024-01-05", "Food", "10")).unwrap();
    store.append(draft("2024-01-06", "Transport", "20")).unwrap();

    let food = store.list_by_category("fOOd").unwrap();
    assert_eq!(food.len(), 1);
    assert_eq!(food[0].category, "Food");
}

#[test]
fn delete_missing_id_returns_false_and_changes_nothing() {
    let store = setup();
    store.append(draft("2024-01-05", "Food", "10")).unwrap();
    assert!(!store.delete_by_id("nope").unwrap());
    assert_eq!(store.list(None).unwrap().len(), 1);
}

#[test]
fn initialize_is_idempotent() {
    let backend = MemSheets::new();
    let store = ExpenseStore::new(backend.clone());
    store.initialize().unwrap();
    store.initialize().unwrap();
    let rows = backend.get_values("Data!A:J").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], json!("Date"));
}

#[test]
fn legacy_rows_without_id_change_id_between_reads() {
    let store = setup();
    store
        .backend()
        .append_row(
            "Data!A:J",
            vec![json!("2024-01-05"), json!("Food"), json!(""), json!("10")],
        )
        .unwrap();
    let first = store.list(None).unwrap()[0].id.clone();
    let second = store.list(None).unwrap()[0].id.clone();
    assert_ne!(first, second);
    // an id that never persisted cannot be deleted
    assert!(!store.delete_by_id(&first).unwrap());
}

#[test]
fn monthly_total_sums_the_calendar_month() {
    let store = setup();
    store.append(draft("2024-01-05", "Food", "10")).unwrap();
    store.append(draft("2024-01-31", "Food", "15")).unwrap();
    store.append(draft("2024-02-01", "Food", "99")).unwrap();
    assert_eq!(store.monthly_total(2024, 1).unwrap(), Decimal::from(25));
}

fn config_row(cells: &[&str]) -> Vec<serde_json::Value> {
    cells.iter().map(|c| json!(c)).collect()
}

// Config layout: A:B settings, D:E categories, G projects, H methods, I labels
fn seed_config(store: &ExpenseStore<MemSheets>) {
    let rows = vec![
        config_row(&[
            "Key", "Value", "", "Category", "Subcategories", "", "Project", "Method", "Label",
        ]),
        config_row(&[
            "monthly_budget",
            "$20,000",
            "",
            "Food",
            "Lunch, Dinner",
            "",
            "Home",
            "Cash",
            "daily",
        ]),
        config_row(&[
            "default_currency",
            "USD",
            "",
            "Transport",
            "",
            "",
            "Travel",
            "Card",
            "trip",
        ]),
        config_row(&["default_project", "Home", "", "", "", "", "Home", "Cash", ""]),
    ];
    for row in rows {
        store.backend().append_row("Config!A:I", row).unwrap();
    }
}

#[test]
fn config_lists_deduplicate_and_skip_blanks() {
    let store = setup();
    seed_config(&store);
    assert_eq!(store.projects().unwrap(), ["Home", "Travel"]);
    assert_eq!(store.payment_methods().unwrap(), ["Cash", "Card"]);
    assert_eq!(store.labels().unwrap(), ["daily", "trip"]);
}

#[test]
fn category_config_splits_subcategories() {
    let store = setup();
    seed_config(&store);
    let cats = store.category_config().unwrap();
    assert_eq!(cats.len(), 2);
    assert_eq!(cats[0].category, "Food");
    assert_eq!(cats[0].subcategories, ["Lunch", "Dinner"]);
    assert!(cats[1].subcategories.is_empty());
}

#[test]
fn budget_and_defaults_resolve_from_settings() {
    let store = setup();
    seed_config(&store);
    assert_eq!(store.budget().unwrap(), Decimal::from(20000));
    assert_eq!(store.default_currency().unwrap(), "USD");
    assert_eq!(store.default_project().unwrap(), "Home");
}

#[test]
fn defaults_fall_back_when_unset() {
    let store = setup();
    assert_eq!(store.budget().unwrap(), Decimal::ZERO);
    assert_eq!(store.default_currency().unwrap(), "TWD");
    assert_eq!(store.default_project().unwrap(), "");
}
