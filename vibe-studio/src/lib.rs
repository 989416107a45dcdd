//! Vibe Studio landing page
//!
//! This crate contains the desktop landing page built on iced, plus a
//! headless runner that drives the same carousel from a tokio timer. The
//! binary in `src/main.rs` picks between the two.
//!
//! Notes
//! - The carousel logic lives in `vibe-core`; modules here only render it
//!   and translate user input into carousel operations.
//! - Modules are public so integration tests can drive `update` and `view`
//!   directly.

pub mod app;
pub mod cli;
pub mod headless;
pub mod messages;
pub mod motion;
pub mod scene;
pub mod state;
pub mod subscriptions;
pub mod theme;
pub mod update;
pub mod view;
