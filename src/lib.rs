//! Endless Fibonacci printer
//!
//! Prints the Fibonacci numbers below 255, one per line, then starts over from 0, forever.
//! The library side exposes the sequence as plain iterators and an [`Emitter`] that writes it
//! to anything implementing [`std::io::Write`]
//!
//! The crate exposes debug logs through the [`tracing`][tracing] crate
//!
//! ## Crate usage
//!
//! # Example
//!
//! ```
//! use fibcycle::{Emitter, EmitterConfig};
//! # fn main() -> Result<(), fibcycle::Error> {
//! let mut emitter = Emitter::new(Vec::new(), EmitterConfig::default())?;
//! let lines = emitter.emit_cycle()?;
//! assert_eq!(lines, 14);
//! assert!(emitter.get_ref().ends_with(b"144\n233\n"));
//! # Ok(())
//! # }
//! ```
#[macro_use]
extern crate derive_builder;

mod config;
mod emitter;
mod error;
mod sequence;

pub use config::{EmitterConfig, EmitterConfigBuilder, EmitterConfigBuilderError};
pub use emitter::Emitter;
pub use error::{Error, Result};
pub use sequence::{Cutoff, Cycle, Sequence, THRESHOLD};
