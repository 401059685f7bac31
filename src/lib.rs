pub mod build;

pub use build::{BuildConfig, BuildOutcome, BuildReport, build};
