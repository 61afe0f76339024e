//! Request middleware.

pub mod locale;

pub use locale::{locale_middleware, RequestLocale};
