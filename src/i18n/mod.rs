//! Internationalization: the locale registry and localized page copy.
//!
//! # Architecture
//!
//! - `registry`: the configured locale table (default, enabled set, country map)
//! - `locale`: the `Locale` type handed out by the registry
//! - `strings`: per-locale page copy
//!
//! # Example
//!
//! ```rust,ignore
//! let registry = LocaleRegistry::builtin();
//! let slovenian = registry.resolve("sl").expect("enabled");
//! assert!(registry.resolve("hr").is_none()); // declared but disabled
//! ```

mod locale;
mod registry;
mod strings;

pub use locale::Locale;
pub use registry::{LocaleEntry, LocaleRegistry, RegistryError};
pub use strings::{BundleCopy, ServiceCopy, SiteStrings};
