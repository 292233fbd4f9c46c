// SPDX-License-Identifier: MPL-2.0
//! `iced_snackbar` is a toast and snackbar notification engine for the Iced
//! GUI framework.
//!
//! It manages per-anchor notification containers, queue strategies,
//! enter/exit lifecycles with fallback timeouts, theming, and optional
//! sound, and ships an iced overlay to draw them.

#![doc(html_root_url = "https://docs.rs/iced_snackbar/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod ui;
