//! # shorecheck-runner
//!
//! The sequential verification checklist for the beach-discovery app,
//! executed against any [`shorecheck_browser::PageDriver`].
//!
//! This crate provides:
//! - The ordered checklist itself ([`VerificationRunner`])
//! - Scenario selectors, labels and parameters ([`Scenario`])
//! - A preflight reachability probe for the target app ([`wait_for_app`])

pub mod preflight;
pub mod runner;
pub mod scenario;

pub use preflight::wait_for_app;
pub use runner::VerificationRunner;
pub use scenario::Scenario;
