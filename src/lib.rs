// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # initialisms
//!
//! Identifier naming for code generated from API models.
//!
//! API models name shapes and members in loose camel case (`DbInstanceId`,
//! `roleArn`, `SSEKMSKeyId`). Generated code wants each name in several
//! styles, with acronyms spelled the way the target language expects:
//!
//! | original       | pascal         | lower_camel    | snake            |
//! |----------------|----------------|----------------|------------------|
//! | `DbInstanceId` | `DBInstanceID` | `dbInstanceID` | `db_instance_id` |
//! | `roleArn`      | `RoleARN`      | `roleARN`      | `role_arn`       |
//! | `Identifier`   | `Identifier`   | `identifier`   | `identifier`     |
//!
//! ## Quick Start
//!
//! ```rust
//! use initialisms::Names;
//!
//! let names = Names::new("KeyId");
//! assert_eq!(names.pascal, "KeyID");
//! assert_eq!(names.lower_camel, "keyID");
//! assert_eq!(names.snake, "key_id");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! casing        generic word-boundary casts (Pascal, lowerCamel, snake)
//! initialisms   ordered acronym table + Normalizer (regex / substring engine)
//! reserved      keyword guard applied to every generated identifier
//! names         Names::new wires the three together
//! ```
//!
//! Everything is immutable once built; a [`Normalizer`] can be shared
//! between threads freely.

pub mod casing;
pub mod config;
pub mod error;
pub mod fieldpath;
pub mod initialisms;
pub mod names;
pub mod reserved;
pub mod scalar;

pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use fieldpath::Path;
pub use initialisms::{MatchEngine, Mode, Normalizer, INITIALISMS};
pub use names::{Names, Variant};

/// Version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
