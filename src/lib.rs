//! Minicart - Terminal Shopping Cart Demo
//!
//! A fixed product catalog, a cart persisted to a local JSON snapshot
//! across invocations, and a CLI front end for browsing and checkout.

pub mod cart;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod store;
pub mod ui;

pub use error::{CartError, CartResult};
