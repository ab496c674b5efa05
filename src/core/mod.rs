//! Foundational types: currencies, interest rates, hedge contracts.

pub mod contract;
pub mod currency;
pub mod rates;
