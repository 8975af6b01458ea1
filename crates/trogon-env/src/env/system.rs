use std::env;
use std::io;

use super::write_env::validate;
use super::{ReadEnv, WriteEnv};

/// Zero-sized type — delegates to `std::env`.
///
/// The process table is shared by every thread. Nothing here serializes
/// a `set_var` against a concurrent `var` on the same key; callers that
/// write after startup own that coordination.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }
}

impl WriteEnv for SystemEnv {
    fn set_var(&self, key: &str, value: &str) -> io::Result<()> {
        validate(key, value)?;
        // SAFETY: key and value were validated above. Concurrent access to
        // the process table from non-Rust code is the caller's concern.
        unsafe { env::set_var(key, value) };
        Ok(())
    }
}
