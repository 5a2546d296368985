//! Terminal form that asks a recommendation service for career suggestions.
//!
//! The user types free-form interests, submits them, and the service's
//! suggestions are listed below the form. Requests run on a background
//! worker so the UI stays responsive while they are in flight.

pub mod app;
pub mod config;
pub mod error;
pub mod help;
pub mod logging;
pub mod suggest;
