// src/lib.rs
//! Publishing workflow, engagement toggles and notification fan-out for a
//! story platform.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
