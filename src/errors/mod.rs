//! Error types and error handling for the front end.
//!
//! Every failure is a syntax error of some flavour:
//!
//! - Error structures carrying the source position of the failure
//! - The construct being parsed and the tokens that would have been accepted
//! - Human-readable tips for the driver's diagnostics

pub mod errors;
