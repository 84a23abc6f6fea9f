//! Modules layer - Infrastructure components for external integrations
//!
//! Contains clients and adapters for external services. The spreadsheet
//! store of record lives here behind the `RowSink` trait.

pub mod sheets;
