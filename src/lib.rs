//! trichoguide - rule-based hair-loss self-assessment engine
//!
//! Turns pre-labeled photo selections and contributing-factor checkboxes into
//! a clinical classification, a severity estimate, per-factor recommendation
//! records, grouped selection summaries, and a tiered treatment-package
//! suggestion.
//!
//! # Architecture
//!
//! - **reference**: static condition/severity/recommendation tables, shipped
//!   as embedded JSON and parsed once at startup
//! - **classifier**: ordered rule chain with first-match-wins precedence
//!   (scarring, then androgenetic, then temporary, then fallback)
//! - **recommend**: per-tag issue/impact/recommendation records
//! - **summary**: category grouping for display
//! - **packages**: treatment package catalog and preference filter
//! - **engine**: the facade the session layer calls
//!
//! Every operation is a synchronous pure function over caller-owned values;
//! the engine holds no mutable state and is safe to share across threads.

pub mod errors;
pub mod types;
pub mod config;
pub mod reference;
pub mod classifier;
pub mod recommend;
pub mod summary;
pub mod packages;
pub mod engine;

// Re-export commonly used types
pub use errors::{AssessmentError, Result};
pub use engine::AssessmentEngine;
pub use types::{
    AssessmentResults, Classification, FactorTag, ImageSelection, Severity,
    TreatmentPreferences,
};
