//! Interest Rate Parity forward pricing and the interpolated forward curve.

pub mod builder;
pub mod forward;
