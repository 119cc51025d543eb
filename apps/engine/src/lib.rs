//! Placement-preparation analysis engine.
//!
//! Turns a pasted job description into extracted skills, a round-wise checklist,
//! a 7-day plan, likely interview questions, company intel and a readiness score,
//! and keeps every analysis in a versioned, migration-aware history store.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod export;
pub mod models;
pub mod state;
pub mod storage;
pub mod telemetry;

pub use analysis::{analyze, validate_jd, AnalysisInput};
pub use config::Config;
pub use errors::EngineError;
pub use state::EngineState;
