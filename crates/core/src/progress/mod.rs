//! Spend-vs-target progress and end-of-period projection.

pub mod calculator;
pub mod error;
pub mod projection;
pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use calculator::ProgressCalculator;
pub use error::ProgressError;
pub use projection::ProjectionEngine;
pub use service::ScheduleProgressService;
pub use types::{
    CategoryProgress, EvaluationBatch, ProgressLevel, Projection, ScheduleFailure,
    ScheduleProgress,
};
