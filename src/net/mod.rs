//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` holds the configured client and the transport seam, `types` defines
//! the wire schema and envelope interpretation.

pub mod http;
pub mod types;
