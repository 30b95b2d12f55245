//! Core library for mdtool
//!
//! This crate implements the **Functional Core** of the mdtool application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! mdtool turns a single piece of pasted text (a URL, a JIRA key, a phone
//! number, a line copied from GitHub) into a Markdown link. The project is
//! split in two crates:
//!
//! - **`mdtool_core`** (this crate): detection, arbitration and rendering as
//!   pure functions with zero I/O
//! - **`mdtool`**: config file discovery, stdin/clipboard access, logging and
//!   output (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! - **Pure functions**: the same input and [`Config`] always produce the
//!   same output
//! - **No side effects**: no filesystem, no environment, no logging
//! - **Testable**: everything is exercised with literal inputs and fixture
//!   configs, no mocking required
//!
//! # Pipeline
//!
//! 1. [`detect`]: every detector looks at the trimmed input on its own and may
//!    produce a [`Detection`]
//! 2. [`arbitrate`]: every renderer votes on every detection through one
//!    declarative table; the highest vote wins, earlier pairs win ties
//! 3. [`render`]: the winning renderer turns the winning detection into
//!    Markdown
//!
//! Input that nothing recognizes is returned trimmed and otherwise unchanged.
//!
//! # Example Usage
//!
//! ```rust
//! use mdtool_core::{process, Config};
//!
//! let config = Config::from_yaml_str(Config::default_yaml()).unwrap();
//!
//! assert_eq!(
//!     process("PLAT-192", &config).unwrap(),
//!     "[PLAT-192](https://companycam.atlassian.net/browse/PLAT-192)"
//! );
//! assert_eq!(
//!     process("(890) 123-4567", &config).unwrap(),
//!     "[890-123-4567](tel:8901234567)"
//! );
//! assert_eq!(process("plain text", &config).unwrap(), "plain text");
//! ```

pub mod arbitrate;
pub mod config;
pub mod detect;
pub mod pipeline;
pub mod record;
pub mod render;

pub use config::{Config, ConfigError};
pub use pipeline::{explain, prepare_input, process, Explanation, Finding};
pub use record::{ContentType, Detection, Payload};
pub use render::{RenderError, Renderer};
