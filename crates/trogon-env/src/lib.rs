//! Typed environment variable access for TrogonStack services.
//!
//! # Quick Start
//!
//! | Concern | Item | Production | Test |
//! |---------|------|------------|------|
//! | Store | [`ReadEnv`], [`WriteEnv`] | [`SystemEnv`] | [`InMemoryEnv`]* |
//! | Typed access | [`EnvAccessor`] | `EnvAccessor::system()` | `EnvAccessor::new(InMemoryEnv::new())`* |
//! | Conversions | [`EnvValue`] | `String`, `i32`, `f64`, `bool` | |
//!
//! *Available with `#[cfg(test)]` or the `"test-support"` feature.
//!
//! ```
//! use trogon_env::{EnvAccessor, Error};
//!
//! let env = EnvAccessor::system();
//! let port = env.get_int_or_default("TROGON_ENV_DOC_PORT", 8080);
//! assert_eq!(port, 8080);
//!
//! let err = env.get_bool_or_error("TROGON_ENV_DOC_DEBUG").unwrap_err();
//! assert!(matches!(err, Error::EmptyVariable { .. }));
//! ```
//!
//! # Thread Safety
//!
//! [`SystemEnv`] is zero-sized and `Send + Sync`, but the process table it
//! wraps is shared mutable state. No locking is added: a set racing a get
//! on the same key from another thread sees whatever the platform gives.
//! Write during startup, before spawning threads, or coordinate yourself.
//!
//! | Test type | Backing | `Send + Sync` |
//! |-----------|---------|---------------|
//! | [`InMemoryEnv`] | `RefCell<HashMap>` | No |
//!
//! [`InMemoryEnv`]: env::InMemoryEnv

pub mod accessor;
pub mod env;
pub mod error;
pub mod value;

pub use accessor::EnvAccessor;
pub use env::{ReadEnv, SystemEnv, WriteEnv};
pub use error::{Error, Result};
pub use value::EnvValue;
