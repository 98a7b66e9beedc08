//! Domain layer: ticket categories, the purchase rules and the ports through
//! which a purchase reaches the payment and seat reservation services.

pub mod ports;
pub mod purchase;
pub mod ticket;
