//! `venuescrub-classify` — Heuristic venue record classification engine.
//!
//! Pure engine crate: receives CSV text, returns bucketed records.
//! No CLI or filesystem dependencies.

pub mod classify;
pub mod engine;
pub mod error;
pub mod model;
pub mod overrides;
pub mod report;

pub use classify::classify;
pub use engine::{load_records, run};
pub use error::ClassifyError;
pub use model::{Classification, ProcessOutput, RecordSet, VenueRecord};
pub use overrides::OverrideTable;
