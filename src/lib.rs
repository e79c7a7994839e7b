//! Labor cost engine for Korean employment contracts
//!
//! This crate turns a weekly work schedule and an agreed wage into monthly
//! pay, weekly-holiday pay, probation pay, social insurance contributions
//! and employer cost under the Labor Standards Act and the Minimum Wage Act,
//! and solves a monthly budget back into the highest affordable wage.
//!
//! Every legal constant comes from an injected [`config::LaborRegime`],
//! either the built-in [`config::LaborRegime::korea_2025`] bundle or one
//! loaded from YAML with [`config::ConfigLoader`].

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
