//! Test harness for the diamond visualization engine.
//!
//! Provides programmatic verification tools for the education-module
//! scenarios: oracles that return pass/fail verdicts with diagnostic
//! detail, rich assertion helpers, and shared fixture constructors.
//!
//! # Key Components
//!
//! - [`oracle`] — Verification functions returning pass/fail verdicts
//! - [`assertions`] — Rich assertion helpers with diagnostics
//! - [`helpers`] — Fixture specs, sparse tables, mesh/inclusion math

pub mod assertions;
pub mod helpers;
pub mod oracle;

pub use helpers::HarnessError;
pub use oracle::OracleVerdict;
