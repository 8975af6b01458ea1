//! Typed reads and writes with three failure policies.
//!
//! | Policy | Missing or empty | Unparseable |
//! |--------|------------------|-------------|
//! | `*_or_error` | [`Error::EmptyVariable`] | [`Error::Parse`] |
//! | `*_or_default` | caller's default | caller's default |
//! | `*_or_panic` | panic | panic |
//!
//! A key that is absent and a key set to `""` are indistinguishable here.
//! Nothing is cached: every get reads the store and every set writes it.

use std::env::VarError;

use tracing::{debug, error, warn};

use crate::env::{ReadEnv, SystemEnv, WriteEnv};
use crate::error::{Error, Result};
use crate::value::EnvValue;

/// Typed access to an environment store.
///
/// # Examples
///
/// ```
/// use trogon_env::EnvAccessor;
///
/// let env = EnvAccessor::system();
/// let workers = env.get_int_or_default("TROGON_ENV_DOC_WORKERS", 4);
/// assert_eq!(workers, 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvAccessor<E> {
    env: E,
}

impl EnvAccessor<SystemEnv> {
    /// Accessor over the process environment.
    pub fn system() -> Self {
        Self::new(SystemEnv)
    }
}

impl<E> EnvAccessor<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &E {
        &self.env
    }
}

impl<E: WriteEnv> EnvAccessor<E> {
    /// Stores `value` in its canonical string form.
    pub fn set<T: EnvValue>(&self, key: &str, value: &T) -> Result<()> {
        self.write(key, &value.to_env_string())
    }

    pub fn set_string(&self, key: &str, value: &str) -> Result<()> {
        self.write(key, value)
    }

    pub fn set_int(&self, key: &str, value: i32) -> Result<()> {
        self.set(key, &value)
    }

    /// Writes six fixed decimals, so precision past that is lost on read.
    pub fn set_float64(&self, key: &str, value: f64) -> Result<()> {
        self.set(key, &value)
    }

    pub fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        self.set(key, &value)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        match self.env.set_var(key, value) {
            Ok(()) => {
                debug!(key, "Environment variable set");
                Ok(())
            }
            Err(source) => {
                warn!(key, error = %source, "Environment variable rejected by store");
                Err(Error::Io {
                    key: key.to_string(),
                    source,
                })
            }
        }
    }
}

impl<E: ReadEnv> EnvAccessor<E> {
    pub fn get_or_error<T: EnvValue>(&self, key: &str) -> Result<T> {
        let raw = self.lookup::<T>(key)?;
        T::parse_env(&raw).map_err(|reason| Error::Parse {
            key: key.to_string(),
            kind: T::KIND,
            reason,
        })
    }

    /// Never reports which failure occurred; use
    /// [`get_or_error`](Self::get_or_error) when that matters.
    pub fn get_or_default<T: EnvValue>(&self, key: &str, default: T) -> T {
        match self.get_or_error(key) {
            Ok(value) => value,
            Err(err) => {
                debug!(key, error = %err, "Using default for environment variable");
                default
            }
        }
    }

    /// For variables the program cannot start without.
    ///
    /// # Panics
    ///
    /// When the variable is missing, empty or unparseable. The message is
    /// the [`Error`] display, which names the key.
    #[track_caller]
    pub fn get_or_panic<T: EnvValue>(&self, key: &str) -> T {
        match self.get_or_error(key) {
            Ok(value) => value,
            Err(err) => {
                error!(key, error = %err, "Required environment variable unavailable");
                panic!("{err}")
            }
        }
    }

    pub fn get_string_or_error(&self, key: &str) -> Result<String> {
        self.get_or_error(key)
    }

    pub fn get_string_or_default(&self, key: &str, default: &str) -> String {
        self.get_or_default(key, default.to_string())
    }

    #[track_caller]
    pub fn get_string_or_panic(&self, key: &str) -> String {
        self.get_or_panic(key)
    }

    pub fn get_int_or_error(&self, key: &str) -> Result<i32> {
        self.get_or_error(key)
    }

    pub fn get_int_or_default(&self, key: &str, default: i32) -> i32 {
        self.get_or_default(key, default)
    }

    #[track_caller]
    pub fn get_int_or_panic(&self, key: &str) -> i32 {
        self.get_or_panic(key)
    }

    pub fn get_float64_or_error(&self, key: &str) -> Result<f64> {
        self.get_or_error(key)
    }

    pub fn get_float64_or_default(&self, key: &str, default: f64) -> f64 {
        self.get_or_default(key, default)
    }

    #[track_caller]
    pub fn get_float64_or_panic(&self, key: &str) -> f64 {
        self.get_or_panic(key)
    }

    pub fn get_bool_or_error(&self, key: &str) -> Result<bool> {
        self.get_or_error(key)
    }

    pub fn get_bool_or_default(&self, key: &str, default: bool) -> bool {
        self.get_or_default(key, default)
    }

    #[track_caller]
    pub fn get_bool_or_panic(&self, key: &str) -> bool {
        self.get_or_panic(key)
    }

    fn lookup<T: EnvValue>(&self, key: &str) -> Result<String> {
        match self.env.var(key) {
            Ok(raw) if !raw.is_empty() => Ok(raw),
            Ok(_) | Err(VarError::NotPresent) => Err(Error::EmptyVariable {
                key: key.to_string(),
            }),
            Err(VarError::NotUnicode(_)) => Err(Error::Parse {
                key: key.to_string(),
                kind: T::KIND,
                reason: "value is not valid unicode".to_string(),
            }),
        }
    }
}
