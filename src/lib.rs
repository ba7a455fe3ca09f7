//! Shared library for `StudyCost`
//! Contains the estimation engine, lead-capture checks, backend client and report
//! rendering used by the `studycost` CLI.

pub mod core;
pub mod logger;

pub use crate::core::*;
