//! Core library for the cjam scaffolding tool.
//!
//! Two pieces live here:
//! - [`assets`] — a read-only store of starter templates. Payloads are embedded in the
//!   binary as base64-wrapped gzip streams and decoded lazily, at most once per asset.
//! - [`scaffold`] — the dispatcher that maps a [`language::Language`] to the files it
//!   needs and writes them into a destination directory.
//!
//! The CLI in `cjam` is a thin wrapper over these modules.

pub mod assets;
pub mod error;
pub mod language;
pub mod scaffold;
