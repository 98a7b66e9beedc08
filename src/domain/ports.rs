use super::ticket::{AccountId, Price};
use crate::error::ServiceError;

/// Takes payment for a purchase from the given account.
pub trait PaymentGateway: Send + Sync {
    fn make_payment(&self, account: AccountId, amount: Price) -> Result<(), ServiceError>;
}

/// Reserves seats for a purchase made by the given account.
pub trait SeatReservation: Send + Sync {
    fn reserve_seats(&self, account: AccountId, seats: u64) -> Result<(), ServiceError>;
}

pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
pub type SeatReservationBox = Box<dyn SeatReservation>;
