//! Attendance engine for exported time-clock reports
//!
//! This crate turns semi-structured time reports (spreadsheets or CSV grids
//! with one block per employee) into daily attendance records, and
//! aggregates them per employee into hour totals and attendance percentages
//! enriched with roster attributes.
//!
//! The flow for one upload is:
//!
//! 1. [`decode`] the bytes into a [`models::RawGrid`]
//! 2. [`extraction`] of [`models::DailyRecord`]s and the period token
//! 3. [`aggregation`] into [`models::EmployeeSummary`]s
//! 4. a single bulk write through the [`store`] ports
//!
//! [`pipeline::process_upload`] runs all four steps; [`api`] exposes it
//! over HTTP.

#![warn(missing_docs)]

pub mod aggregation;
pub mod api;
pub mod config;
pub mod decode;
pub mod error;
pub mod extraction;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod store;
