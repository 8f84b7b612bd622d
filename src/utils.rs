// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde_json::Value;

const UA: &str = concat!(
    "spendsheet/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/spendsheet)"
);

pub fn http_client() -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

static AMOUNT_JUNK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[$,\s]").unwrap());

/// Coerce a sheet cell into a money amount. Currency symbols, thousands
/// separators and whitespace are stripped; anything that still fails to parse
/// becomes zero. Total over its input domain, never errors.
pub fn parse_amount(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => n.to_string().parse::<Decimal>().unwrap_or(Decimal::ZERO),
        Value::String(s) => AMOUNT_JUNK
            .replace_all(s, "")
            .parse::<Decimal>()
            .unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

/// True when a non-empty amount cell only produced zero through the parser's
/// fallback, i.e. the cleaned text still fails to parse.
pub fn amount_coerced(value: &Value) -> bool {
    match value {
        Value::String(s) => {
            let cleaned = AMOUNT_JUNK.replace_all(s, "");
            !cleaned.is_empty() && cleaned.parse::<Decimal>().is_err()
        }
        _ => false,
    }
}

/// Text content of a cell. Numbers render through their decimal form,
/// anything non-scalar is treated as empty.
pub fn cell_text(row: &[Value], idx: usize) -> String {
    match row.get(idx) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Sheet dates arrive with either slash or hyphen separators.
pub fn normalize_date(s: &str) -> String {
    s.replace('/', "-")
}

/// Lenient date parse used for sorting and range filtering. Returns None for
/// anything that is not a calendar date after separator normalization.
pub fn parse_loose_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(normalize_date(s).trim(), "%Y-%m-%d").ok()
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn fmt_money(d: &Decimal, ccy: &str) -> String {
    format!("{} {}", ccy, d.round_dp(2))
}

/// First and last day of a calendar month.
pub fn month_range(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    let last_day = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
        _ => return Err(anyhow::anyhow!("Invalid month number {}", month)),
    };
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow::anyhow!("Invalid month '{}-{}'", year, month))?;
    let end = NaiveDate::from_ymd_opt(year, month, last_day)
        .ok_or_else(|| anyhow::anyhow!("Invalid month '{}-{}'", year, month))?;
    Ok((start, end))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
