//! Stress-testing support: random contract portfolios.

pub mod scenario;
