//! Load transactions from exported CSV (amount,posted_date,category,description)

use super::Transaction;
use crate::error::EngineError;
use chrono::NaiveDate;
use csv::Reader;
use std::path::Path;

/// Date format used by the store's exports
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw CSV row matching the transaction export columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "amount")]
    amount: f64,
    #[serde(rename = "posted_date")]
    posted_date: String,
    #[serde(rename = "category", default)]
    category: String,
    #[serde(rename = "description", default)]
    description: String,
}

impl CsvRow {
    fn to_transaction(self) -> Result<Transaction, EngineError> {
        let date = NaiveDate::parse_from_str(&self.posted_date, DATE_FORMAT)
            .map_err(|_| EngineError::invalid(format!("malformed date: {}", self.posted_date)))?;

        Ok(Transaction {
            amount: self.amount,
            date,
            category: self.category,
            description: self.description,
        })
    }
}

/// Load all transactions from a CSV file
pub fn load_transactions<P: AsRef<Path>>(path: P) -> Result<Vec<Transaction>, EngineError> {
    let file = std::fs::File::open(path)?;
    let transactions = load_transactions_from_reader(file)?;

    log::debug!("loaded {} transactions", transactions.len());
    Ok(transactions)
}

/// Load transactions from any reader (e.g., string buffer, network stream)
pub fn load_transactions_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<Transaction>, EngineError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut transactions = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        transactions.push(row.to_transaction()?);
    }

    Ok(transactions)
}
