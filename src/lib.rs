//! # panel-ui
//!
//! WASM helper layer for the subscription panel front-end. Markup event
//! handlers call the exported functions to toggle the mobile menu, switch
//! theme and accent color, show corner toasts, suggest usernames, open inline
//! edit panels and copy subscription links.
//!
//! Browser glue lives behind the `hydrate` feature. Without it the crate
//! builds natively against the in-memory platform so every operation can be
//! exercised in plain unit tests.

pub mod app;
pub mod config;
pub mod error;
pub mod platform;
pub mod util;

#[cfg(feature = "hydrate")]
mod bindings;
