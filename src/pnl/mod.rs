//! Daily P&L attribution and mark-to-market against the budgeted rate.

pub mod engine;
