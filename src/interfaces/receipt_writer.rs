use crate::domain::purchase::PurchaseOutcome;
use crate::domain::ticket::{AccountId, Price};
use crate::error::{PurchaseError, Result};
use serde::Serialize;
use std::io::Write;

/// Output format for a purchase receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReceiptFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Debug, Serialize)]
struct Receipt {
    account: AccountId,
    seats: u64,
    price: Price,
}

/// Writes purchase receipts to any `Write` sink.
pub struct ReceiptWriter<W: Write> {
    sink: W,
    format: ReceiptFormat,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(sink: W, format: ReceiptFormat) -> Self {
        Self { sink, format }
    }

    pub fn write_receipt(&mut self, account: AccountId, outcome: &PurchaseOutcome) -> Result<()> {
        let receipt = Receipt {
            account,
            seats: outcome.total_seats,
            price: outcome.total_price,
        };
        match self.format {
            ReceiptFormat::Csv => {
                let mut writer = csv::Writer::from_writer(&mut self.sink);
                writer.serialize(&receipt)?;
                writer.flush()?;
            }
            ReceiptFormat::Json => {
                serde_json::to_writer(&mut self.sink, &receipt)
                    .map_err(|e| PurchaseError::Io(e.into()))?;
                writeln!(self.sink)?;
            }
        }
        Ok(())
    }
}
