//! Locale routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path, query, cookie, Accept-Language, country)
//!     → matcher.rs (is the path intercepted at all?)
//!     → policy.rs (does it carry an enabled locale prefix?)
//!     → detect.rs (cookie / Accept-Language / geo, in configured order)
//!     → resolver.rs → RouteDecision (skip, pass-through, rewrite, redirect)
//!
//! Handlers:
//!     → navigation.rs (link builder, redirect, pathname, router handle)
//! ```
//!
//! # Design Decisions
//! - Everything here is built at startup, immutable at runtime
//! - No regex in the request path
//! - Deterministic: same input always yields the same decision

pub mod detect;
pub mod matcher;
pub mod navigation;
pub mod policy;
pub mod resolver;

pub use detect::{Detection, LocaleDetector, LocaleHints};
pub use matcher::InterceptFilter;
pub use navigation::{Navigation, Navigator};
pub use policy::RoutingPolicy;
pub use resolver::{LocaleResolver, RouteDecision, RouteRequest};
