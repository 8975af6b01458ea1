#[cfg(any(test, feature = "test-support"))]
use std::cell::RefCell;
#[cfg(any(test, feature = "test-support"))]
use std::collections::HashMap;
#[cfg(any(test, feature = "test-support"))]
use std::{env, io};

#[cfg(any(test, feature = "test-support"))]
use super::write_env::validate;
#[cfg(any(test, feature = "test-support"))]
use super::{ReadEnv, WriteEnv};

/// Won't touch the global process environment.
///
/// Each instance is its own table, so tests holding separate instances
/// can run in parallel. Writes through [`WriteEnv`] are validated exactly
/// like [`SystemEnv`](super::SystemEnv); [`set`](Self::set) skips the
/// checks for seeding fixtures.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug)]
pub struct InMemoryEnv {
    vars: RefCell<HashMap<String, String>>,
}

#[cfg(any(test, feature = "test-support"))]
impl InMemoryEnv {
    pub fn new() -> Self {
        Self {
            vars: RefCell::new(HashMap::new()),
        }
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.borrow_mut().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.vars.borrow_mut().remove(key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.borrow().contains_key(key)
    }

    pub fn clear(&self) {
        self.vars.borrow_mut().clear();
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Default for InMemoryEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl ReadEnv for InMemoryEnv {
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        self.vars
            .borrow()
            .get(key)
            .cloned()
            .ok_or(env::VarError::NotPresent)
    }
}

#[cfg(any(test, feature = "test-support"))]
impl WriteEnv for InMemoryEnv {
    fn set_var(&self, key: &str, value: &str) -> io::Result<()> {
        validate(key, value)?;
        self.set(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_env_set_and_get() {
        let env = InMemoryEnv::new();
        env.set("TEST_VAR", "test_value");

        assert_eq!(env.var("TEST_VAR").unwrap(), "test_value");
    }

    #[test]
    fn test_in_memory_env_not_present() {
        let env = InMemoryEnv::new();

        assert!(matches!(
            env.var("NONEXISTENT"),
            Err(std::env::VarError::NotPresent)
        ));
    }

    #[test]
    fn test_in_memory_env_remove_and_clear() {
        let env = InMemoryEnv::new();
        env.set("A", "1");
        env.set("B", "2");

        env.remove("A");
        assert!(!env.contains("A"));
        assert!(env.contains("B"));

        env.clear();
        assert!(!env.contains("B"));
    }

    #[test]
    fn test_set_var_overwrites() {
        let env = InMemoryEnv::new();
        env.set_var("KEY", "v1").unwrap();
        env.set_var("KEY", "v2").unwrap();

        assert_eq!(env.var("KEY").unwrap(), "v2");
    }

    #[test]
    fn test_set_var_rejects_empty_key() {
        let env = InMemoryEnv::new();
        let err = env.set_var("", "value").unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(!env.contains(""));
    }

    #[test]
    fn test_instances_are_isolated() {
        let a = InMemoryEnv::new();
        let b = InMemoryEnv::new();
        a.set("SHARED", "a");

        assert!(b.var("SHARED").is_err());
    }
}
