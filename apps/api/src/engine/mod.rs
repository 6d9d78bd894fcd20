//! The deterministic evaluation engine.
//!
//! Everything in this module is a pure function of the questionnaire: no
//! I/O, no shared mutable state, no error paths (unknown enum values fall
//! back to documented defaults at the model layer).

pub mod labels;
pub mod notes;
pub mod opportunities;
pub mod peers;
pub mod quick_wins;
pub mod readiness;
pub mod scoring;
pub mod summary;
pub mod tools;
