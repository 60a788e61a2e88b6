//! Finiquito and liquidación engine for the Mexican Ley Federal del Trabajo.
//!
//! This crate computes the settlement owed to a worker when employment ends:
//! the finiquito (acquired rights owed on every termination) and, for an
//! unjustified dismissal, the liquidación indemnities under a conciliation
//! scenario and a litigation-maximum scenario.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
