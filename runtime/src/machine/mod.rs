//! Machine module - the in-process host
//!
//! `runtime` owns the host state, `env` exposes it to native callbacks
//! through the embedding API, and `native` registers the callbacks.

mod env;
mod native;
mod runtime;

// Public API
pub use runtime::Runtime;
