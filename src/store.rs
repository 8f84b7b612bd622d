// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde_json::Value;
use std::cmp::Ordering;

use crate::models::{CategoryConfig, Expense, ExpenseDraft, COLUMNS};
use crate::sheets::SheetsBackend;
use crate::utils::{cell_text, month_range, parse_amount, parse_loose_date};

pub const DATA_SHEET: &str = "Data";
pub const DATA_RANGE: &str = "Data!A:J";
pub const HEADER_RANGE: &str = "Data!A1:J1";

const CONFIG_SETTINGS_RANGE: &str = "Config!A:B";
const CONFIG_CATEGORY_RANGE: &str = "Config!D:E";
const CONFIG_PROJECT_RANGE: &str = "Config!G:G";
const CONFIG_METHOD_RANGE: &str = "Config!H:H";
const CONFIG_LABEL_RANGE: &str = "Config!I:I";

/// Expense repository over a tabular sheet backend. Construct once with the
/// backend and pass by reference; every operation is a fresh, independent
/// round trip with no transaction spanning calls.
pub struct ExpenseStore<B: SheetsBackend> {
    backend: B,
}

impl<B: SheetsBackend> ExpenseStore<B> {
    pub fn new(backend: B) -> ExpenseStore<B> {
        ExpenseStore { backend }
    }

    /// Raw backend access for read-only diagnostics.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Write the header row if the sheet does not have one yet. Safe to call
    /// repeatedly.
    pub fn initialize(&self) -> Result<()> {
        let existing = self
            .backend
            .get_values(HEADER_RANGE)
            .context("Check Data header")?;
        if existing.is_empty() {
            let header = COLUMNS
                .iter()
                .map(|c| Value::String((*c).to_string()))
                .collect();
            self.backend
                .update_values(HEADER_RANGE, vec![header])
                .context("Write Data header")?;
        }
        Ok(())
    }

    /// Assign a fresh id and append one row. No read-after-write check.
    pub fn append(&self, draft: ExpenseDraft) -> Result<Expense> {
        let expense = Expense::from_draft(uuid::Uuid::new_v4().to_string(), draft);
        self.backend
            .append_row(DATA_RANGE, expense.to_row())
            .context("Append expense row")?;
        Ok(expense)
    }

    /// All expenses, newest first. Rows whose date does not parse sort after
    /// every row that does, keeping their relative order.
    pub fn list(&self, limit: Option<usize>) -> Result<Vec<Expense>> {
        let rows = self
            .backend
            .get_values(DATA_RANGE)
            .context("Fetch expense rows")?;
        let mut expenses: Vec<Expense> = rows
            .iter()
            .skip(1)
            .filter_map(|r| Expense::from_row(r))
            .collect();
        expenses.sort_by(
            |a, b| match (parse_loose_date(&a.date), parse_loose_date(&b.date)) {
                (Some(ta), Some(tb)) => tb.cmp(&ta),
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (None, None) => Ordering::Equal,
            },
        );
        if let Some(n) = limit {
            expenses.truncate(n);
        }
        Ok(expenses)
    }

    /// Expenses whose date falls within [start, end] inclusive. Unlike
    /// `list`, entries with unparsable dates are dropped here, not kept at
    /// the end. Unparsable bounds match nothing.
    pub fn list_by_date_range(&self, start: &str, end: &str) -> Result<Vec<Expense>> {
        let all = self.list(None)?;
        let (start, end) = match (parse_loose_date(start), parse_loose_date(end)) {
            (Some(s), Some(e)) => (s, e),
            _ => return Ok(Vec::new()),
        };
        Ok(all
            .into_iter()
            .filter(|e| match parse_loose_date(&e.date) {
                Some(d) => d >= start && d <= end,
                None => false,
            })
            .collect())
    }

    /// Case-insensitive exact match on category.
    pub fn list_by_category(&self, category: &str) -> Result<Vec<Expense>> {
        let wanted = category.to_lowercase();
        Ok(self
            .list(None)?
            .into_iter()
            .filter(|e| e.category.to_lowercase() == wanted)
            .collect())
    }

    pub fn monthly_total(&self, year: i32, month: u32) -> Result<Decimal> {
        let (start, end) = month_range(year, month)?;
        let expenses = self.list_by_date_range(&start.to_string(), &end.to_string())?;
        Ok(expenses.iter().map(|e| e.amount).sum())
    }

    /// Locate the first data row carrying this id, then delete it by index.
    /// Two reads precede the removal; a concurrent write in that window can
    /// shift the index. Accepted for the single-household usage this serves.
    pub fn delete_by_id(&self, id: &str) -> Result<bool> {
        let rows = self
            .backend
            .get_values(DATA_RANGE)
            .context("Fetch expense rows")?;
        let row_index = rows
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, row)| cell_text(row, 9) == id)
            .map(|(i, _)| i);
        let row_index = match row_index {
            Some(i) => i,
            None => return Ok(false),
        };
        let sheet_id = self.backend.sheet_id(DATA_SHEET).context("Locate Data sheet")?;
        self.backend
            .delete_row(sheet_id, row_index)
            .context("Delete expense row")?;
        Ok(true)
    }

    pub fn category_config(&self) -> Result<Vec<CategoryConfig>> {
        let rows = self
            .backend
            .get_values(CONFIG_CATEGORY_RANGE)
            .context("Fetch category config")?;
        Ok(rows
            .iter()
            .skip(1)
            .filter(|row| !cell_text(row, 0).is_empty())
            .map(|row| CategoryConfig {
                category: cell_text(row, 0),
                subcategories: cell_text(row, 1)
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            })
            .collect())
    }

    fn column_list(&self, range: &str, what: &str) -> Result<Vec<String>> {
        let rows = self
            .backend
            .get_values(range)
            .with_context(|| format!("Fetch {} list", what))?;
        let mut out = Vec::new();
        for row in rows.iter().skip(1) {
            let v = cell_text(row, 0).trim().to_string();
            if !v.is_empty() && !out.contains(&v) {
                out.push(v);
            }
        }
        Ok(out)
    }

    pub fn payment_methods(&self) -> Result<Vec<String>> {
        self.column_list(CONFIG_METHOD_RANGE, "payment method")
    }

    pub fn projects(&self) -> Result<Vec<String>> {
        self.column_list(CONFIG_PROJECT_RANGE, "project")
    }

    pub fn labels(&self) -> Result<Vec<String>> {
        self.column_list(CONFIG_LABEL_RANGE, "label")
    }

    /// Key-value lookup over the settings columns. The scan includes the
    /// first row; settings have no header.
    pub fn config_value(&self, key: &str) -> Result<Option<String>> {
        let rows = self
            .backend
            .get_values(CONFIG_SETTINGS_RANGE)
            .context("Fetch settings")?;
        Ok(rows
            .iter()
            .find(|row| cell_text(row, 0) == key)
            .map(|row| cell_text(row, 1)))
    }

    /// Monthly budget; zero when unset.
    pub fn budget(&self) -> Result<Decimal> {
        Ok(match self.config_value("monthly_budget")? {
            Some(v) => parse_amount(&Value::String(v)),
            None => Decimal::ZERO,
        })
    }

    pub fn default_project(&self) -> Result<String> {
        Ok(self.config_value("default_project")?.unwrap_or_default())
    }

    pub fn default_currency(&self) -> Result<String> {
        Ok(self
            .config_value("default_currency")?
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "TWD".to_string()))
    }
}
