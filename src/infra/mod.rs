//! Adapters between the engines and the host platform.

pub mod clipboard;
