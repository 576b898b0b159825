//! Request processing that sits outside individual handlers.

pub mod panic;
