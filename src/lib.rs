//! Vidmeta - video library metadata reports
//!
//! This library crate exposes the scan pipeline for the binary and for
//! integration testing.

pub mod config;
pub mod processor;
pub mod report;
pub mod scanner;
