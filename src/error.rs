use crate::domain::purchase::MAX_TICKETS_PER_PURCHASE;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PurchaseError>;

/// The external collaborator a purchase delegates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Payment,
    Reservation,
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Upstream::Payment => f.write_str("payment"),
            Upstream::Reservation => f.write_str("seat reservation"),
        }
    }
}

/// Failure reported by a payment or seat reservation collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ServiceError(pub String);

impl ServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Error, Debug)]
pub enum PurchaseError {
    #[error("Account Id is not valid.")]
    InvalidAccount,
    #[error("Ticket requests cannot be null or empty.")]
    EmptyRequest,
    #[error(
        "The maximum number of tickets that can be purchased at a time is {max} ({requested} requested)."
    )]
    TooManyTickets { requested: u64, max: u64 },
    #[error(
        "The number of infant tickets requested cannot exceed the number of adult tickets requested ({infants} infants, {adults} adults)."
    )]
    TooManyInfants { infants: u64, adults: u64 },
    #[error("Adult tickets are not present.")]
    NoAdultPresent,
    #[error("Purchase failed: {service} service error: {source}")]
    UpstreamFailure {
        service: Upstream,
        #[source]
        source: ServiceError,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PurchaseError {
    pub(crate) fn too_many_tickets(requested: u64) -> Self {
        Self::TooManyTickets {
            requested,
            max: MAX_TICKETS_PER_PURCHASE,
        }
    }

    /// True when the purchase was refused by a business rule, before any
    /// collaborator was contacted.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidAccount
                | Self::EmptyRequest
                | Self::TooManyTickets { .. }
                | Self::TooManyInfants { .. }
                | Self::NoAdultPresent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failed_rule() {
        assert_eq!(
            PurchaseError::InvalidAccount.to_string(),
            "Account Id is not valid."
        );
        assert_eq!(
            PurchaseError::too_many_tickets(22).to_string(),
            "The maximum number of tickets that can be purchased at a time is 20 (22 requested)."
        );
        let upstream = PurchaseError::UpstreamFailure {
            service: Upstream::Reservation,
            source: ServiceError::new("no seats left"),
        };
        assert_eq!(
            upstream.to_string(),
            "Purchase failed: seat reservation service error: no seats left"
        );
    }

    #[test]
    fn test_rejection_classification() {
        assert!(PurchaseError::NoAdultPresent.is_rejection());
        assert!(PurchaseError::EmptyRequest.is_rejection());
        assert!(
            !PurchaseError::UpstreamFailure {
                service: Upstream::Payment,
                source: ServiceError::new("declined"),
            }
            .is_rejection()
        );
        let io = std::io::Error::other("broken pipe");
        assert!(!PurchaseError::from(io).is_rejection());
    }
}
