// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::{cell_text, parse_amount};

/// Data sheet column order. A row is exactly these ten cells.
pub const COLUMNS: [&str; 10] = [
    "Date",
    "Category",
    "Subcategory",
    "Amount",
    "Project",
    "Method",
    "Label",
    "Currency",
    "Note",
    "ID",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub date: String,
    pub category: String,
    pub subcategory: String,
    pub amount: Decimal,
    pub project: String,
    pub method: String,
    pub label: String,
    pub currency: String,
    pub note: String,
}

/// An expense as submitted by a caller, before an id has been assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub date: String,
    pub category: String,
    pub subcategory: String,
    pub amount: Decimal,
    pub project: String,
    pub method: String,
    pub label: String,
    pub currency: String,
    pub note: String,
}

impl Expense {
    /// Decode one sheet row. Rows with an empty date cell are blank lines and
    /// yield None. A row with an empty ID cell gets a freshly generated id,
    /// which means legacy rows read back under a different id every time;
    /// `doctor` reports them.
    pub fn from_row(row: &[Value]) -> Option<Expense> {
        let date = cell_text(row, 0);
        if date.is_empty() {
            return None;
        }
        let id = match cell_text(row, 9) {
            s if s.is_empty() => uuid::Uuid::new_v4().to_string(),
            s => s,
        };
        Some(Expense {
            id,
            date,
            category: cell_text(row, 1),
            subcategory: cell_text(row, 2),
            amount: parse_amount(row.get(3).unwrap_or(&Value::Null)),
            project: cell_text(row, 4),
            method: cell_text(row, 5),
            label: cell_text(row, 6),
            currency: cell_text(row, 7),
            note: cell_text(row, 8),
        })
    }

    /// Encode into the fixed column order. Amounts are written as decimal
    /// strings; the parser on the read side accepts them back unchanged.
    pub fn to_row(&self) -> Vec<Value> {
        vec![
            Value::String(self.date.clone()),
            Value::String(self.category.clone()),
            Value::String(self.subcategory.clone()),
            Value::String(self.amount.to_string()),
            Value::String(self.project.clone()),
            Value::String(self.method.clone()),
            Value::String(self.label.clone()),
            Value::String(self.currency.clone()),
            Value::String(self.note.clone()),
            Value::String(self.id.clone()),
        ]
    }

    pub fn from_draft(id: String, draft: ExpenseDraft) -> Expense {
        Expense {
            id,
            date: draft.date,
            category: draft.category,
            subcategory: draft.subcategory,
            amount: draft.amount,
            project: draft.project,
            method: draft.method,
            label: draft.label,
            currency: draft.currency,
            note: draft.note,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub total: Decimal,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub month: String,
    pub total: Decimal,
    pub budget: Decimal,
    pub categories: Vec<CategorySummary>,
    pub top_expenses: Vec<Expense>,
}

/// One category row from the Config sheet: a name plus its comma-separated
/// subcategory list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub category: String,
    pub subcategories: Vec<String>,
}
