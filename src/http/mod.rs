//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, layers)
//!     → request.rs (add request ID)
//!     → middleware/locale.rs (skip, pass through, rewrite or redirect)
//!     → pages.rs / contact.rs (render page or relay submission)
//!     → Send to client
//! ```

pub mod contact;
pub mod middleware;
pub mod pages;
pub mod request;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::{build_app, AppState, HttpServer, ServerError};
