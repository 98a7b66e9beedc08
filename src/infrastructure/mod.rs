//! Stand-ins for the external payment and seat reservation services.

pub mod in_memory;
