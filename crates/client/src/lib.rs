//! Wealthdash Client - HTTP access to the portfolio API.
//!
//! Implements [`wealthdash_core::PortfolioApiTrait`] over `reqwest` so the
//! dashboard service can be wired to a live backend.

pub mod client;
pub mod config;

pub use client::PortfolioApiClient;
pub use config::ClientConfig;
