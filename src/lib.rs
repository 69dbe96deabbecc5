//! Library crate for textnet.
//!
//! This crate exposes the building blocks of the toolkit and its TUI:
//! - Text processing functions (`text`)
//! - Social network set operations and metrics (`network`)
//! - Built-in sample data and data file loaders (`samples`)
//! - Application state, operation catalogue and update loop (`app`)
//! - Error and result types (`error`)
//! - In-memory search helpers (`search`)
//! - UI rendering and widgets (`ui`)
//!
//! It is used by the `textnet` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod app;
pub mod error;
pub mod network;
pub mod samples;
pub mod search;
pub mod text;
pub mod ui;

// Re-export commonly used items at the crate root for convenience
/// Convenient error and result types shared across the crate.
pub use error::{DynError, InvalidArgument, Result};
