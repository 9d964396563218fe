#![deny(unsafe_code)]

//! CLI library components for the triage engine.

pub mod logging;
