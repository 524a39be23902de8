//! trainjson - training program CSV to JSON converter
//!
//! trainjson walks a training program directory (one subdirectory per level,
//! one CSV file per exercise group) and assembles a single JSON document
//! mapping level -> exercise group -> `[names, rounds, rest_seconds]`.
//!
//! # Architecture
//!
//! - **commands**: CLI command implementations (convert, group, estimate, init)
//! - **core**: Core functionality (converter, CSV parser, writer, estimator)
//! - **models**: Data structures (program document, config)
//! - **error**: Error types

pub mod commands;
pub mod core;
pub mod error;
pub mod models;

pub use error::{FileError, Result, TrainJsonError};
