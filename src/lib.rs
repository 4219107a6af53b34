//! Shared pieces of the `festdesk` binary: directory lookup, logging setup
//! and dataset loading.
//!
//! The table engine lives in `festdesk-table-api`, the participant and
//! registration layouts in `festdesk-tables-*` and the terminal screen in
//! `festdesk-tui`.

pub mod app_dirs;
pub mod dataset;
pub mod logging;
