//! Conversions between typed values and their stored string form.
//!
//! Every accessor policy goes through [`EnvValue`], so a type's parsing
//! and canonical formatting live in exactly one place.

/// A type that can be stored in an environment variable.
///
/// `to_env_string` must produce text that `parse_env` accepts.
pub trait EnvValue: Sized {
    /// Human-readable type name used in parse errors.
    const KIND: &'static str;

    /// Parses a non-empty stored value. The `Err` string explains why the
    /// text was rejected.
    fn parse_env(raw: &str) -> Result<Self, String>;

    fn to_env_string(&self) -> String;
}

impl EnvValue for String {
    const KIND: &'static str = "string";

    fn parse_env(raw: &str) -> Result<Self, String> {
        Ok(raw.to_string())
    }

    fn to_env_string(&self) -> String {
        self.clone()
    }
}

/// Base 10 with an optional sign; values outside the 32-bit range are
/// rejected rather than truncated.
impl EnvValue for i32 {
    const KIND: &'static str = "int";

    fn parse_env(raw: &str) -> Result<Self, String> {
        raw.parse().map_err(|e: std::num::ParseIntError| e.to_string())
    }

    fn to_env_string(&self) -> String {
        self.to_string()
    }
}

/// Written in fixed point with six decimals and read back at full
/// precision, so digits past the sixth decimal are lost on a round trip.
/// Values already stored in that format must keep parsing identically.
impl EnvValue for f64 {
    const KIND: &'static str = "float64";

    fn parse_env(raw: &str) -> Result<Self, String> {
        raw.parse()
            .map_err(|e: std::num::ParseFloatError| e.to_string())
    }

    fn to_env_string(&self) -> String {
        format!("{self:.6}")
    }
}

impl EnvValue for bool {
    const KIND: &'static str = "bool";

    fn parse_env(raw: &str) -> Result<Self, String> {
        match raw {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            other => Err(format!("'{other}' is not a boolean literal")),
        }
    }

    fn to_env_string(&self) -> String {
        self.to_string()
    }
}
