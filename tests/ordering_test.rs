use cinema_tickets::application::ticket_service::TicketService;
use cinema_tickets::domain::purchase::{self, TicketTally};
use cinema_tickets::domain::ticket::{Price, TicketCategory, TicketRequest};
use cinema_tickets::infrastructure::in_memory::{InMemoryPaymentGateway, InMemorySeatReservation};
use rand::Rng;
use rand::seq::SliceRandom;

fn random_batch(rng: &mut impl Rng) -> Vec<TicketRequest> {
    let len = rng.gen_range(1..=8);
    (0..len)
        .map(|_| {
            let category = *TicketCategory::ALL.choose(rng).unwrap();
            TicketRequest::new(category, rng.gen_range(0..=6))
        })
        .collect()
}

#[test]
fn test_totals_follow_category_prices() {
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
        let batch = random_batch(&mut rng);
        let tally = TicketTally::of(&batch);

        assert_eq!(
            purchase::total_price(&batch),
            Price(20 * tally.adults + 10 * tally.children)
        );
        assert_eq!(purchase::total_seats(&batch), tally.adults + tally.children);
    }
}

#[test]
fn test_outcome_is_independent_of_request_order() {
    let mut rng = rand::thread_rng();
    let service = TicketService::new(
        Box::new(InMemoryPaymentGateway::new()),
        Box::new(InMemorySeatReservation::new()),
    );

    for _ in 0..500 {
        let batch = random_batch(&mut rng);
        let mut shuffled = batch.clone();
        shuffled.shuffle(&mut rng);

        let first = service.purchase_tickets(Some(1), &batch);
        let second = service.purchase_tickets(Some(1), &shuffled);
        match (first, second) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
            (a, b) => panic!("order changed the result: {a:?} vs {b:?}"),
        }
    }
}

#[test]
fn test_rejections_never_reach_collaborators() {
    let mut rng = rand::thread_rng();
    let payments = InMemoryPaymentGateway::new();
    let seats = InMemorySeatReservation::new();
    let service = TicketService::new(Box::new(payments.clone()), Box::new(seats.clone()));

    let mut accepted = 0;
    for _ in 0..500 {
        let batch = random_batch(&mut rng);
        if service.purchase_tickets(Some(9), &batch).is_ok() {
            accepted += 1;
        }
    }

    assert_eq!(payments.payments().len(), accepted);
    assert_eq!(seats.reservations().len(), accepted);
}
