//! Conformance checker for the Rino Rental Sorong API.
//!
//! A thin HTTP client that drives every endpoint of the rental backend
//! with valid and invalid inputs, asserts status codes and payload
//! invariants, and aggregates the results per suite. The primary
//! interface is the CLI binary; the library exists so the end-to-end
//! tests can run the same checks against an in-process server.

pub mod checks;
pub mod client;
pub mod fixtures;
pub mod report;

pub use checks::ConformanceChecker;
pub use client::{ApiClient, ApiResponse};
pub use report::{PassPolicy, RunReport, SuiteResult};
