//! VitaminBot - Weight-based dose titration courses over chat
//!
//! This crate computes a daily dosing schedule from a body weight and a
//! start date, reports the dose due on any day, and drives the chat
//! dialog that collects those inputs.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
