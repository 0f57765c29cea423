//! Identifier case-style engine and the `recase` CLI built on top of it.
//!
//! The library surface lives in [`case`]: [`CaseStyle`] descriptors, the
//! registered constants, and the convert/infer algorithms.

pub mod case;
pub mod cli;
pub mod config;
pub mod output;

pub use case::{CaseConversion, CaseStyle, InferError, Locale, NAMED_STYLES, Separator};
