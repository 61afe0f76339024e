//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main):
//!     Load config → Validate → Logging → Telemetry → Bind listener → Serve
//!
//! Shutdown:
//!     SIGINT/SIGTERM or Shutdown::trigger → Stop accepting → Drain → Telemetry flush → Exit
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, listener last
//! - Telemetry is flushed after the server has drained

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
