//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and shared surfaces while reading shared
//! state from Leptos context providers set up by the shell.

pub mod header;
pub mod location_status;
pub mod toaster;
pub mod tooltip;
