//! Evaluation pipeline
//!
//! [`runner::Evaluator`] drives extraction and scoring over a corpus,
//! [`spec::RunSpec`] describes a run as JSON, [`validation`] checks that
//! description, and [`observer`] reports progress.

pub mod observer;
pub mod runner;
pub mod spec;
pub mod validation;

pub use observer::{NoopObserver, ProgressLogger, ProgressObserver};
pub use runner::{DocumentFailure, DocumentOutcome, EvaluationReport, Evaluator, MethodResult};
pub use spec::RunSpec;
pub use validation::{ValidationEngine, ValidationReport};
