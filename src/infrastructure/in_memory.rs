use crate::domain::ports::{PaymentGateway, SeatReservation};
use crate::domain::ticket::{AccountId, Price};
use crate::error::ServiceError;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// A thread-safe in-memory payment gateway.
///
/// Every accepted payment is appended to a shared ledger. Clones share the
/// same ledger, so a caller can keep a handle after boxing one into a
/// `TicketService`.
#[derive(Default, Clone)]
pub struct InMemoryPaymentGateway {
    payments: Arc<RwLock<Vec<(AccountId, Price)>>>,
}

impl InMemoryPaymentGateway {
    /// Creates a gateway with an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Payments taken so far, in the order they were made.
    pub fn payments(&self) -> Vec<(AccountId, Price)> {
        self.payments
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Sum of all payments taken from `account`.
    pub fn total_paid(&self, account: AccountId) -> Price {
        self.payments
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(payer, _)| *payer == account)
            .map(|(_, amount)| *amount)
            .sum()
    }
}

impl PaymentGateway for InMemoryPaymentGateway {
    fn make_payment(&self, account: AccountId, amount: Price) -> Result<(), ServiceError> {
        debug!(%account, %amount, "payment taken");
        self.payments
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((account, amount));
        Ok(())
    }
}

/// A thread-safe in-memory seat reservation service.
///
/// Records every reservation; clones share the same record.
#[derive(Default, Clone)]
pub struct InMemorySeatReservation {
    reservations: Arc<RwLock<Vec<(AccountId, u64)>>>,
}

impl InMemorySeatReservation {
    /// Creates a service with no reservations.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reservations(&self) -> Vec<(AccountId, u64)> {
        self.reservations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Seats reserved across all accounts.
    pub fn seats_reserved(&self) -> u64 {
        self.reservations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, seats)| *seats)
            .sum()
    }
}

impl SeatReservation for InMemorySeatReservation {
    fn reserve_seats(&self, account: AccountId, seats: u64) -> Result<(), ServiceError> {
        debug!(%account, seats, "seats reserved");
        self.reservations
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((account, seats));
        Ok(())
    }
}
