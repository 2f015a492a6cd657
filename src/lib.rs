//! Decision Desk - Presentation layer for a multi-criteria decision workbench.
//!
//! This crate implements the page-facing helpers of a decision support
//! workbench: matrix form bridging, transient alerts and spinners, CSV
//! export, printable reports, and sample/imported dataset loading. All page
//! access goes through ports, so every service runs and tests without a
//! live page.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
