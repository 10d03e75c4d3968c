//! Interactive GHAS demo console.
//!
//! The binary wires [`config::Settings`] into a [`ui::App`], which drives the
//! menu loop on top of `ghas-demo-core`.

pub mod config;
pub mod ui;
