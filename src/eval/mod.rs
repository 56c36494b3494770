//! Evaluation against gold standard keywords
//!
//! [`scorer`] scores one keyword set; [`aggregate`] macro-averages the
//! per-document scores of each method.

pub mod aggregate;
pub mod scorer;

pub use aggregate::{macro_average, render_table, MethodSummary};
pub use scorer::{score, Performance};
