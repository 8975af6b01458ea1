use std::io;

/// Writes a single variable. Implementations reject keys and values the
/// platform cannot store instead of panicking.
pub trait WriteEnv {
    fn set_var(&self, key: &str, value: &str) -> io::Result<()>;
}

/// Rules `std::env::set_var` would otherwise enforce with a panic.
pub(crate) fn validate(key: &str, value: &str) -> io::Result<()> {
    if key.is_empty() {
        return Err(invalid_input("key is empty"));
    }
    if key.contains('=') {
        return Err(invalid_input("key contains '='"));
    }
    if key.contains('\0') {
        return Err(invalid_input("key contains a NUL byte"));
    }
    if value.contains('\0') {
        return Err(invalid_input("value contains a NUL byte"));
    }
    Ok(())
}

fn invalid_input(msg: &'static str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, msg)
}
