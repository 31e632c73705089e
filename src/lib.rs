//! Leave day-counting and balance policy engine.
//!
//! The engine itself (`engine`, `model`) is pure and synchronous. The
//! `api`, `routes` and `docs` modules expose it over actix-web.

pub mod api;
pub mod config;
pub mod docs;
pub mod engine;
pub mod error;
pub mod model;
pub mod routes;
pub mod utils;

pub use engine::{
    Evaluation, compute_balance, compute_days, evaluate, resolve, summarize_balances, validate,
};
pub use error::{LeaveError, Result};
