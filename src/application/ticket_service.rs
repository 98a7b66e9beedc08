use crate::domain::ports::{PaymentGatewayBox, SeatReservationBox};
use crate::domain::purchase::{self, PurchaseOutcome};
use crate::domain::ticket::TicketRequest;
use crate::error::{PurchaseError, Result, Upstream};
use tracing::{debug, info, warn};

/// The main entry point for buying tickets.
///
/// `TicketService` owns the two external collaborators. It holds no other
/// state, so each call to [`TicketService::purchase_tickets`] is independent.
pub struct TicketService {
    payment_gateway: PaymentGatewayBox,
    seat_reservation: SeatReservationBox,
}

impl TicketService {
    /// Creates a new `TicketService` instance.
    ///
    /// # Arguments
    ///
    /// * `payment_gateway` - Takes payment for admissible purchases.
    /// * `seat_reservation` - Reserves seats once payment went through.
    pub fn new(payment_gateway: PaymentGatewayBox, seat_reservation: SeatReservationBox) -> Self {
        Self {
            payment_gateway,
            seat_reservation,
        }
    }

    /// Purchases a batch of tickets for an account.
    ///
    /// Nothing external happens unless the batch passes validation. Payment is
    /// taken before seats are reserved, and a failed payment means no
    /// reservation is attempted. Collaborator failures are not retried or
    /// compensated.
    pub fn purchase_tickets(
        &self,
        account_id: Option<i64>,
        requests: &[TicketRequest],
    ) -> Result<PurchaseOutcome> {
        debug!(?account_id, ?requests, "purchase_tickets called");

        let account = purchase::validate(account_id, requests).inspect_err(|e| {
            warn!(?account_id, error = %e, "Purchase rejected");
        })?;
        let outcome = PurchaseOutcome::of(requests);

        self.payment_gateway
            .make_payment(account, outcome.total_price)
            .map_err(|source| PurchaseError::UpstreamFailure {
                service: Upstream::Payment,
                source,
            })
            .inspect_err(|e| warn!(%account, error = %e, "Payment failed"))?;

        self.seat_reservation
            .reserve_seats(account, outcome.total_seats)
            .map_err(|source| PurchaseError::UpstreamFailure {
                service: Upstream::Reservation,
                source,
            })
            .inspect_err(|e| warn!(%account, error = %e, "Seat reservation failed"))?;

        info!(
            %account,
            total_price = %outcome.total_price,
            total_seats = outcome.total_seats,
            "Purchase completed"
        );
        Ok(outcome)
    }
}
