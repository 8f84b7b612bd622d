// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::config::Settings;
use crate::utils::http_client;

pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

#[derive(Debug, Error)]
pub enum SheetsError {
    /// Could not reach the backend at all (DNS, TLS, timeout).
    #[error("backend unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),
    /// The backend answered with a non-success status.
    #[error("backend rejected request: HTTP {status}: {body}")]
    Api { status: u16, body: String },
    #[error("sheet '{0}' not found in spreadsheet")]
    SheetNotFound(String),
}

/// Storage collaborator. Ranges use A1 notation with a sheet title prefix,
/// e.g. `Data!A:J`. Row deletion is index-based: callers locate the row first,
/// so a concurrent append or delete between the read and the delete can shift
/// indexes. The API offers no conditional delete; the window is accepted.
pub trait SheetsBackend {
    fn get_values(&self, range: &str) -> Result<Vec<Vec<Value>>, SheetsError>;
    fn append_row(&self, range: &str, row: Vec<Value>) -> Result<(), SheetsError>;
    fn update_values(&self, range: &str, rows: Vec<Vec<Value>>) -> Result<(), SheetsError>;
    fn sheet_id(&self, title: &str) -> Result<i64, SheetsError>;
    /// Remove exactly one row. `row_index` is 0-based and counts the header.
    fn delete_row(&self, sheet_id: i64, row_index: usize) -> Result<(), SheetsError>;
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetMeta>,
}

#[derive(Debug, Deserialize)]
struct SheetMeta {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    #[serde(rename = "sheetId")]
    sheet_id: i64,
    title: String,
}

/// Google Sheets v4 REST client. One blocking round trip per call, bearer
/// token auth, 15s timeout via the shared client builder.
pub struct HttpSheets {
    client: reqwest::blocking::Client,
    base_url: String,
    spreadsheet_id: String,
    token: String,
}

impl HttpSheets {
    pub fn new(settings: &Settings) -> anyhow::Result<HttpSheets> {
        Ok(HttpSheets {
            client: http_client()?,
            base_url: settings
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            spreadsheet_id: settings.spreadsheet_id.clone(),
            token: settings.token.clone(),
        })
    }

    fn values_url(&self, range: &str) -> String {
        format!("{}/{}/values/{}", self.base_url, self.spreadsheet_id, range)
    }

    fn check(resp: reqwest::blocking::Response) -> Result<reqwest::blocking::Response, SheetsError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(SheetsError::Api {
                status: status.as_u16(),
                body: resp.text().unwrap_or_default(),
            });
        }
        Ok(resp)
    }
}

impl SheetsBackend for HttpSheets {
    fn get_values(&self, range: &str) -> Result<Vec<Vec<Value>>, SheetsError> {
        let resp = self
            .client
            .get(self.values_url(range))
            .bearer_auth(&self.token)
            .send()?;
        let vr: ValueRange = Self::check(resp)?.json()?;
        Ok(vr.values)
    }

    fn append_row(&self, range: &str, row: Vec<Value>) -> Result<(), SheetsError> {
        let resp = self
            .client
            .post(format!("{}:append", self.values_url(range)))
            .bearer_auth(&self.token)
            .query(&[("valueInputOption", "RAW")])
            .json(&json!({ "values": [row] }))
            .send()?;
        Self::check(resp)?;
        Ok(())
    }

    fn update_values(&self, range: &str, rows: Vec<Vec<Value>>) -> Result<(), SheetsError> {
        let resp = self
            .client
            .put(self.values_url(range))
            .bearer_auth(&self.token)
            .query(&[("valueInputOption", "RAW")])
            .json(&json!({ "values": rows }))
            .send()?;
        Self::check(resp)?;
        Ok(())
    }

    fn sheet_id(&self, title: &str) -> Result<i64, SheetsError> {
        let resp = self
            .client
            .get(format!("{}/{}", self.base_url, self.spreadsheet_id))
            .bearer_auth(&self.token)
            .query(&[("fields", "sheets.properties")])
            .send()?;
        let meta: SpreadsheetMeta = Self::check(resp)?.json()?;
        meta.sheets
            .into_iter()
            .find(|s| s.properties.title == title)
            .map(|s| s.properties.sheet_id)
            .ok_or_else(|| SheetsError::SheetNotFound(title.to_string()))
    }

    fn delete_row(&self, sheet_id: i64, row_index: usize) -> Result<(), SheetsError> {
        let body = json!({
            "requests": [{
                "deleteDimension": {
                    "range": {
                        "sheetId": sheet_id,
                        "dimension": "ROWS",
                        "startIndex": row_index,
                        "endIndex": row_index + 1,
                    }
                }
            }]
        });
        let resp = self
            .client
            .post(format!(
                "{}/{}:batchUpdate",
                self.base_url, self.spreadsheet_id
            ))
            .bearer_auth(&self.token)
            .json(&body)
            .send()?;
        Self::check(resp)?;
        Ok(())
    }
}

/// In-memory backend with the same range semantics, for tests and offline
/// experimentation. Sheet ids are positions in the sheet list.
#[derive(Clone)]
pub struct MemSheets {
    sheets: Arc<Mutex<Vec<(String, Vec<Vec<Value>>)>>>,
}

impl Default for MemSheets {
    fn default() -> Self {
        Self::new()
    }
}

impl MemSheets {
    pub fn new() -> MemSheets {
        MemSheets {
            sheets: Arc::new(Mutex::new(vec![
                ("Data".to_string(), Vec::new()),
                ("Config".to_string(), Vec::new()),
            ])),
        }
    }
}

/// `Sheet!A1:J5` broken into sheet title plus 0-based column span and
/// optional 1-based row span.
struct RangeRef {
    sheet: String,
    start_col: usize,
    end_col: usize,
    start_row: Option<usize>,
    end_row: Option<usize>,
}

fn col_index(letters: &str) -> usize {
    letters
        .bytes()
        .fold(0usize, |acc, b| acc * 26 + (b - b'A') as usize + 1)
        - 1
}

fn parse_cell(s: &str) -> (usize, Option<usize>) {
    let split = s.find(|c: char| c.is_ascii_digit()).unwrap_or(s.len());
    let col = col_index(&s[..split]);
    let row = s[split..].parse::<usize>().ok();
    (col, row)
}

fn parse_range(range: &str) -> RangeRef {
    let (sheet, cells) = match range.split_once('!') {
        Some((s, c)) => (s.to_string(), c),
        None => (String::new(), range),
    };
    let (start, end) = match cells.split_once(':') {
        Some((a, b)) => (a, b),
        None => (cells, cells),
    };
    let (start_col, start_row) = parse_cell(start);
    let (end_col, end_row) = parse_cell(end);
    RangeRef {
        sheet,
        start_col,
        end_col,
        start_row,
        end_row,
    }
}

impl MemSheets {
    fn with_sheet<T>(
        &self,
        title: &str,
        f: impl FnOnce(&mut Vec<Vec<Value>>) -> T,
    ) -> Result<T, SheetsError> {
        let mut sheets = self.sheets.lock().unwrap();
        match sheets.iter_mut().find(|(t, _)| t == title) {
            Some((_, rows)) => Ok(f(rows)),
            None => Err(SheetsError::SheetNotFound(title.to_string())),
        }
    }
}

impl SheetsBackend for MemSheets {
    fn get_values(&self, range: &str) -> Result<Vec<Vec<Value>>, SheetsError> {
        let r = parse_range(range);
        self.with_sheet(&r.sheet, |rows| {
            let first = r.start_row.unwrap_or(1).saturating_sub(1);
            let last = r.end_row.unwrap_or(rows.len()).min(rows.len());
            rows.iter()
                .skip(first)
                .take(last.saturating_sub(first))
                .map(|row| {
                    row.iter()
                        .skip(r.start_col)
                        .take(r.end_col - r.start_col + 1)
                        .cloned()
                        .collect()
                })
                .collect()
        })
    }

    fn append_row(&self, range: &str, row: Vec<Value>) -> Result<(), SheetsError> {
        let r = parse_range(range);
        self.with_sheet(&r.sheet, |rows| rows.push(row))
    }

    fn update_values(&self, range: &str, new_rows: Vec<Vec<Value>>) -> Result<(), SheetsError> {
        let r = parse_range(range);
        self.with_sheet(&r.sheet, |rows| {
            let mut at = r.start_row.unwrap_or(1) - 1;
            for row in new_rows {
                if at >= rows.len() {
                    rows.resize(at + 1, Vec::new());
                }
                rows[at] = row;
                at += 1;
            }
        })
    }

    fn sheet_id(&self, title: &str) -> Result<i64, SheetsError> {
        let sheets = self.sheets.lock().unwrap();
        sheets
            .iter()
            .position(|(t, _)| t == title)
            .map(|p| p as i64)
            .ok_or_else(|| SheetsError::SheetNotFound(title.to_string()))
    }

    fn delete_row(&self, sheet_id: i64, row_index: usize) -> Result<(), SheetsError> {
        let mut sheets = self.sheets.lock().unwrap();
        match sheets.get_mut(sheet_id as usize) {
            Some((_, rows)) if row_index < rows.len() => {
                rows.remove(row_index);
                Ok(())
            }
            _ => Err(SheetsError::Api {
                status: 400,
                body: format!("no row {} in sheet {}", row_index, sheet_id),
            }),
        }
    }
}
