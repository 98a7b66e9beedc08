//! Application layer orchestrating a ticket purchase.
//!
//! This module defines the `TicketService`, the single entry point for buying
//! tickets. It validates the batch, prices it, then hands the price to the
//! payment gateway and the seat count to the seat reservation service.

pub mod ticket_service;
