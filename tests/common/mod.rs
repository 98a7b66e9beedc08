#![allow(dead_code)]

use cinema_tickets::domain::ports::{PaymentGateway, SeatReservation};
use cinema_tickets::domain::ticket::{AccountId, Price, TicketCategory, TicketRequest};
use cinema_tickets::error::ServiceError;
use std::io::{Error, Write};
use tempfile::NamedTempFile;

/// A payment gateway that refuses every payment.
pub struct DecliningGateway;

impl PaymentGateway for DecliningGateway {
    fn make_payment(&self, _: AccountId, _: Price) -> Result<(), ServiceError> {
        Err(ServiceError::new("payment gateway unavailable"))
    }
}

/// A seat reservation service with no seats left.
pub struct SoldOutScreen;

impl SeatReservation for SoldOutScreen {
    fn reserve_seats(&self, _: AccountId, _: u64) -> Result<(), ServiceError> {
        Err(ServiceError::new("sold out"))
    }
}

pub fn requests(items: &[(TicketCategory, u32)]) -> Vec<TicketRequest> {
    items
        .iter()
        .map(|&(category, count)| TicketRequest::new(category, count))
        .collect()
}

/// Writes the requests to a temporary `category, count` CSV file.
pub fn requests_csv(items: &[(&str, &str)]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "category, count")?;
    for (category, count) in items {
        writeln!(file, "{category}, {count}")?;
    }
    file.flush()?;
    Ok(file)
}
