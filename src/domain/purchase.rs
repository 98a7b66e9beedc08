use super::ticket::{AccountId, Price, TicketCategory, TicketRequest};
use crate::error::{PurchaseError, Result};
use serde::Serialize;

/// Upper bound on seat-bearing tickets (adults and children) in one purchase.
pub const MAX_TICKETS_PER_PURCHASE: u64 = 20;

/// Ticket counts per category over a whole batch of requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TicketTally {
    pub adults: u64,
    pub children: u64,
    pub infants: u64,
}

impl TicketTally {
    pub fn of(requests: &[TicketRequest]) -> Self {
        requests.iter().fold(Self::default(), |mut tally, request| {
            let count = u64::from(request.count());
            let slot = match request.category() {
                TicketCategory::Adult => &mut tally.adults,
                TicketCategory::Child => &mut tally.children,
                TicketCategory::Infant => &mut tally.infants,
            };
            *slot = slot.saturating_add(count);
            tally
        })
    }

    /// Tickets that need a reserved seat.
    pub fn seated(&self) -> u64 {
        self.adults.saturating_add(self.children)
    }
}

/// Totals of an admissible purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseOutcome {
    pub total_price: Price,
    pub total_seats: u64,
}

impl PurchaseOutcome {
    /// Computes both totals. The requests are assumed to be validated.
    pub fn of(requests: &[TicketRequest]) -> Self {
        Self {
            total_price: total_price(requests),
            total_seats: total_seats(requests),
        }
    }
}

/// Checks a purchase attempt against the business rules.
///
/// Rules run in a fixed order and the first failure is the one reported:
/// account, non-empty batch, seat ceiling, adult presence, infants vs adults.
/// A batch without adults is reported as such even when it carries infants.
/// On success the validated account id is returned.
pub fn validate(account_id: Option<i64>, requests: &[TicketRequest]) -> Result<AccountId> {
    let account = AccountId::try_from(account_id)?;

    if requests.is_empty() {
        return Err(PurchaseError::EmptyRequest);
    }

    let tally = TicketTally::of(requests);

    if tally.seated() > MAX_TICKETS_PER_PURCHASE {
        return Err(PurchaseError::too_many_tickets(tally.seated()));
    }

    // A request for zero adults still counts as an adult being present.
    if !requests
        .iter()
        .any(|request| request.category() == TicketCategory::Adult)
    {
        return Err(PurchaseError::NoAdultPresent);
    }

    if tally.infants > tally.adults {
        return Err(PurchaseError::TooManyInfants {
            infants: tally.infants,
            adults: tally.adults,
        });
    }

    Ok(account)
}

pub fn total_price(requests: &[TicketRequest]) -> Price {
    requests
        .iter()
        .map(|request| {
            request
                .category()
                .unit_price()
                .times(u64::from(request.count()))
        })
        .sum()
}

pub fn total_seats(requests: &[TicketRequest]) -> u64 {
    requests.iter().fold(0u64, |seats, request| {
        let needed = request.category().seats_per_ticket() * u64::from(request.count());
        seats.saturating_add(needed)
    })
}
