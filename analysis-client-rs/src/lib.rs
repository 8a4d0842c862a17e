// analysis-client-rs/src/lib.rs
// Typed client and form controller for the Analysis Service

pub mod client;
pub mod controller;
mod tests;

pub use client::{AnalysisClient, AnalysisRequest, ClientError};
pub use controller::{AnalysisForm, ViewState, SUBMIT_FAILED};
