//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Outgoing response:
//!     → headers.rs (nosniff, frame denial, referrer policy)
//! Incoming contact submission:
//!     → body size limit (configured in http/server.rs)
//! ```
//!
//! # Design Decisions
//! - Headers are only added when the handler did not set them
//! - No trust in client input: the relay forwards JSON, never interprets it

pub mod headers;
