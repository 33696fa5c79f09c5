//! Adapter implementations for CRM ports.

pub mod memory;
