use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The API reply split into its header row and data rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawResponse {
    /// Labels the API put on the first row (field codes plus the geography column).
    pub header: Vec<String>,
    /// One row per region; `None` where the API returned `null`.
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawResponse {
    /// Parse the JSON array-of-arrays body. The first row is the header.
    pub fn from_json(body: &str) -> Result<Self> {
        let table: Vec<Vec<Value>> = serde_json::from_str(body)?;
        Self::from_values(table)
    }

    pub fn from_values(table: Vec<Vec<Value>>) -> Result<Self> {
        let mut iter = table.into_iter();
        let header = iter
            .next()
            .ok_or_else(|| anyhow!("response has no header row"))?
            .into_iter()
            .map(|v| cell_to_string(v).unwrap_or_default())
            .collect();
        let rows = iter
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect();
        Ok(Self { header, rows })
    }

    pub fn to_json(&self) -> Result<String> {
        let mut table: Vec<Vec<Value>> = Vec::with_capacity(self.rows.len() + 1);
        table.push(self.header.iter().cloned().map(Value::String).collect());
        for row in &self.rows {
            table.push(
                row.iter()
                    .map(|c| c.clone().map(Value::String).unwrap_or(Value::Null))
                    .collect(),
            );
        }
        Ok(serde_json::to_string(&table)?)
    }
}

fn cell_to_string(v: Value) -> Option<String> {
    match v {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_header_and_keeps_nulls() {
        let body = r#"[["NAME","B01001_001E","state"],
                       ["Alabama","4893186","01"],
                       ["Puerto Rico",null,"72"]]"#;
        let raw = RawResponse::from_json(body).unwrap();
        assert_eq!(raw.header, vec!["NAME", "B01001_001E", "state"]);
        assert_eq!(raw.rows.len(), 2);
        assert_eq!(raw.rows[1][1], None);
        assert_eq!(raw.rows[0][2].as_deref(), Some("01"));
    }

    #[test]
    fn numeric_cells_become_strings() {
        let raw = RawResponse::from_json(r#"[["a","b"],["x",12]]"#).unwrap();
        assert_eq!(raw.rows[0][1].as_deref(), Some("12"));
    }

    #[test]
    fn empty_reply_is_an_error() {
        assert!(RawResponse::from_json("[]").is_err());
    }

    #[test]
    fn json_round_trip_preserves_nulls() {
        let body = r#"[["NAME","pop"],["Puerto Rico",null]]"#;
        let raw = RawResponse::from_json(body).unwrap();
        let again = RawResponse::from_json(&raw.to_json().unwrap()).unwrap();
        assert_eq!(raw, again);
    }
}
