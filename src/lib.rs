// Library target exists for integration tests and criterion benchmarks.
// The binary entry point is main.rs; this file re-declares the module tree so
// harnesses can import types via `spellr::session::*` / `spellr::text::*`.
// Most code is only exercised through the binary, so suppress dead_code warnings.
#![allow(dead_code)]

// Public: used directly by tests and benchmarks
pub mod config;
pub mod lookup;
pub mod prompt;
pub mod session;
pub mod speech;
pub mod stories;
pub mod text;

// Private: required transitively by the public modules' app wiring
mod app;
mod event;
mod ui;
