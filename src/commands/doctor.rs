// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::sheets::SheetsBackend;
use crate::store::{ExpenseStore, DATA_RANGE, HEADER_RANGE};
use crate::utils::{amount_coerced, cell_text, parse_loose_date, pretty_table};
use anyhow::Result;
use serde_json::Value;

pub fn handle<B: SheetsBackend>(store: &ExpenseStore<B>) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Header row present
    let header = store.backend().get_values(HEADER_RANGE)?;
    if header.is_empty() {
        rows.push(vec![
            "missing_header".into(),
            "run `spendsheet init`".into(),
        ]);
    }

    // 2) Per-row checks against the raw grid
    let known: Vec<String> = store
        .category_config()?
        .into_iter()
        .map(|c| c.category.to_lowercase())
        .collect();
    let raw = store.backend().get_values(DATA_RANGE)?;
    for (i, row) in raw.iter().enumerate().skip(1) {
        let line = i + 1; // 1-based sheet row
        if cell_text(row, 0).is_empty() {
            continue; // blank line, skipped by every read path
        }
        if cell_text(row, 9).is_empty() {
            rows.push(vec![
                "row_missing_id".into(),
                format!("row {} reads back under a new id every time", line),
            ]);
        }
        if parse_loose_date(&cell_text(row, 0)).is_none() {
            rows.push(vec![
                "unparsable_date".into(),
                format!("row {}: '{}'", line, cell_text(row, 0)),
            ]);
        }
        if amount_coerced(row.get(3).unwrap_or(&Value::Null)) {
            rows.push(vec![
                "amount_coerced_to_zero".into(),
                format!("row {}: '{}'", line, cell_text(row, 3)),
            ]);
        }
        let cat = cell_text(row, 1);
        if !cat.is_empty() && !known.is_empty() && !known.contains(&cat.to_lowercase()) {
            rows.push(vec![
                "unknown_category".into(),
                format!("row {}: '{}'", line, cat),
            ]);
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
