#![deny(unsafe_code)]

//! Knowledge-base build: raw disease records in, canonicalized disease
//! table and reverse symptom index out.
//!
//! The build runs once, offline, before any clarification session starts;
//! its output is read-only for the lifetime of the process.

mod builder;
mod error;
mod io;

pub use builder::{BuildContext, BuildOutput, BuildReport, build};
pub use error::{KbError, Result};
pub use io::{
    load_knowledge_base, load_raw_knowledge_base, write_knowledge_base, write_reverse_index,
};
