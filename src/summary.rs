// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::{CategorySummary, Expense, MonthlySummary};

pub const TOP_EXPENSES: usize = 5;

/// Aggregate one period's expenses into a monthly summary. Pure function of
/// its inputs: groups appear in first-encounter order before the stable sort,
/// so equal totals and equal amounts keep input order.
pub fn summarize(month: &str, expenses: &[Expense], budget: Decimal) -> MonthlySummary {
    let total: Decimal = expenses.iter().map(|e| e.amount).sum();

    let mut groups: Vec<(String, Decimal, usize)> = Vec::new();
    for e in expenses {
        match groups.iter_mut().find(|(name, _, _)| *name == e.category) {
            Some((_, sum, count)) => {
                *sum += e.amount;
                *count += 1;
            }
            None => groups.push((e.category.clone(), e.amount, 1)),
        }
    }
    groups.sort_by(|a, b| b.1.cmp(&a.1));

    let categories = groups
        .into_iter()
        .map(|(category, group_total, count)| CategorySummary {
            category,
            total: group_total,
            count,
            // zero total means zero percentages, not a division error
            percentage: if total.is_zero() {
                0.0
            } else {
                (group_total / total).to_f64().unwrap_or(0.0) * 100.0
            },
        })
        .collect();

    let mut top_expenses = expenses.to_vec();
    top_expenses.sort_by(|a, b| b.amount.cmp(&a.amount));
    top_expenses.truncate(TOP_EXPENSES);

    MonthlySummary {
        month: month.to_string(),
        total,
        budget,
        categories,
        top_expenses,
    }
}
