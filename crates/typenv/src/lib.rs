//! typenv — typed access to environment variables
//!
//! Reads process environment variables and converts their string values into
//! typed values: strings, booleans, integers, floats, arbitrary-precision
//! decimals, delimited lists, JSON structures, or any caller-chosen type.
//!
//! # Architecture
//!
//! ```text
//! Source (process env / map) → lookup → present? → convert → T
//!                                     → absent?  → default | Error::Missing
//! ```
//!
//! Every accessor is a thin specialization of that one contract. There is no
//! caching and no shared state: each call reads the environment as it is at
//! that moment.
//!
//! # Guarantees
//!
//! - **Defaults are opaque**: a default is returned exactly as supplied,
//!   never split, converted, or validated.
//! - **Stateless**: identical calls against an unchanged environment yield
//!   identical results.
//! - **Failures propagate**: no retries, no logging, no local recovery —
//!   the caller either supplies a default or handles the error.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use typenv::EnvParser;
//!
//! let vars: HashMap<String, String> = [
//!     ("PORT".to_string(), "8080".to_string()),
//!     ("FEATURES".to_string(), "gzip,tls".to_string()),
//! ]
//! .into();
//! let env = EnvParser::with_source(vars);
//!
//! assert_eq!(env.int("PORT").unwrap(), 8080);
//! assert_eq!(env.list("FEATURES").unwrap(), vec!["gzip", "tls"]);
//! assert!(!env.bool_or("DEBUG", false).unwrap());
//! ```
//!
//! Against the live process environment, use [`ENV`] or [`EnvParser::new`].

pub mod error;
pub mod parser;
pub mod source;

pub use error::{Error, Result};
pub use parser::EnvParser;
pub use source::{ProcessEnv, Source};

/// Ready-made parser over the live process environment
///
/// ```no_run
/// let workers = typenv::ENV.int_or("WORKERS", 4)?;
/// # Ok::<(), typenv::Error>(())
/// ```
pub const ENV: EnvParser = EnvParser::new();
