//! Environment variable accessors
//!
//! Every accessor resolves one named variable through the same two-branch
//! contract: if the variable is present its raw text is validated and
//! converted, if it is absent the caller's default is returned unchanged or
//! a [`Error::Missing`] is raised. Defaults are never split, never converted
//! and never checked against choices.
//!
//! Guarantees:
//! - Stateless: nothing is cached between calls
//! - Idempotent: same environment and arguments, same result

use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::de::DeserializeOwned;

use crate::error::{ConversionError, Error, Result};
use crate::source::{ProcessEnv, Source};

/// Accepted boolean literals, compared case-insensitively
const TRUTHY: [&str; 2] = ["true", "1"];
const FALSY: [&str; 2] = ["false", "0"];

/// Typed reader over an environment [`Source`]
///
/// The default source is the live process environment. Construct one over a
/// `HashMap<String, String>` with [`EnvParser::with_source`] to parse from a
/// fixed in-memory environment instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvParser<S: Source = ProcessEnv> {
    source: S,
}

impl EnvParser {
    /// Parser over the live process environment
    pub const fn new() -> Self {
        EnvParser { source: ProcessEnv }
    }
}

impl<S: Source> EnvParser<S> {
    /// Parser over a caller-supplied environment store
    pub fn with_source(source: S) -> Self {
        EnvParser { source }
    }

    fn lookup(&self, name: &str) -> Option<String> {
        self.source.get(name)
    }

    // ── Generic core ───────────────────────────────────────

    /// Fetch a variable and convert it with a caller-supplied function
    ///
    /// This is the contract every other accessor specializes: present →
    /// `convert(&raw)`, absent → [`Error::Missing`]. A conversion failure
    /// becomes [`Error::Malformed`] with the original failure as `source()`.
    ///
    /// # Errors
    /// `Missing` when the variable is not set, `Malformed` when `convert`
    /// rejects the raw text.
    pub fn parse_with<T, E, F>(&self, name: &str, convert: F) -> Result<T>
    where
        F: FnOnce(&str) -> std::result::Result<T, E>,
        E: Into<ConversionError>,
    {
        match self.lookup(name) {
            Some(raw) => match convert(&raw) {
                Ok(value) => Ok(value),
                Err(err) => Err(Error::malformed(name, raw, err)),
            },
            None => Err(Error::missing(name)),
        }
    }

    /// Like [`parse_with`](Self::parse_with), but an absent variable yields
    /// `default` instead of an error. The default is returned as-is; it never
    /// passes through `convert`.
    pub fn parse_with_or<T, E, F>(&self, name: &str, default: T, convert: F) -> Result<T>
    where
        F: FnOnce(&str) -> std::result::Result<T, E>,
        E: Into<ConversionError>,
    {
        match self.lookup(name) {
            Some(raw) => match convert(&raw) {
                Ok(value) => Ok(value),
                Err(err) => Err(Error::malformed(name, raw, err)),
            },
            None => Ok(default),
        }
    }

    /// Fetch a variable and convert it via `FromStr`
    pub fn parse<T>(&self, name: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.parse_with(name, str::parse::<T>)
    }

    /// Fetch a variable via `FromStr`, falling back to `default` when absent
    pub fn parse_or<T>(&self, name: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.parse_with_or(name, default, str::parse::<T>)
    }

    // ── Strings ────────────────────────────────────────────

    /// Raw text of a variable
    ///
    /// # Errors
    /// `Missing` when the variable is not set.
    pub fn string(&self, name: &str) -> Result<String> {
        self.lookup(name).ok_or_else(|| Error::missing(name))
    }

    /// Raw text of a variable, or `default` when absent. Infallible.
    pub fn string_or(&self, name: &str, default: impl Into<String>) -> String {
        self.lookup(name).unwrap_or_else(|| default.into())
    }

    // ── Numbers ────────────────────────────────────────────

    /// Base-10 integer value of a variable
    pub fn int(&self, name: &str) -> Result<i64> {
        self.parse(name)
    }

    /// Base-10 integer value of a variable, or `default` when absent
    pub fn int_or(&self, name: &str, default: i64) -> Result<i64> {
        self.parse_or(name, default)
    }

    /// IEEE-754 double value of a variable
    pub fn float(&self, name: &str) -> Result<f64> {
        self.parse(name)
    }

    /// IEEE-754 double value of a variable, or `default` when absent
    pub fn float_or(&self, name: &str, default: f64) -> Result<f64> {
        self.parse_or(name, default)
    }

    /// Arbitrary-precision decimal value of a variable
    pub fn decimal(&self, name: &str) -> Result<BigDecimal> {
        self.parse(name)
    }

    /// Arbitrary-precision decimal value of a variable, or `default` when absent
    pub fn decimal_or(&self, name: &str, default: BigDecimal) -> Result<BigDecimal> {
        self.parse_or(name, default)
    }

    // ── JSON ───────────────────────────────────────────────

    /// JSON document held by a variable
    ///
    /// # Errors
    /// `Missing` when the variable is not set, `Malformed` with the
    /// `serde_json` failure as `source()` on invalid JSON syntax.
    pub fn json(&self, name: &str) -> Result<serde_json::Value> {
        self.json_as(name)
    }

    /// JSON document held by a variable, or `default` when absent
    pub fn json_or(&self, name: &str, default: serde_json::Value) -> Result<serde_json::Value> {
        self.json_as_or(name, default)
    }

    /// JSON document held by a variable, decoded into a caller-chosen type
    pub fn json_as<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        match self.lookup(name) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Ok(value),
                Err(err) => Err(Error::malformed(name, raw, err)),
            },
            None => Err(Error::missing(name)),
        }
    }

    /// JSON document decoded into a caller-chosen type, or `default` when absent
    pub fn json_as_or<T: DeserializeOwned>(&self, name: &str, default: T) -> Result<T> {
        match self.lookup(name) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Ok(value),
                Err(err) => Err(Error::malformed(name, raw, err)),
            },
            None => Ok(default),
        }
    }

    // ── Booleans ───────────────────────────────────────────

    /// Boolean value of a variable
    ///
    /// Accepted literals are `true`, `1`, `false` and `0`, matched
    /// case-insensitively. Anything else is [`Error::InvalidBool`].
    pub fn bool(&self, name: &str) -> Result<bool> {
        match self.lookup(name) {
            Some(raw) => bool_literal(name, &raw),
            None => Err(Error::missing(name)),
        }
    }

    /// Boolean value of a variable, or `default` when absent
    pub fn bool_or(&self, name: &str, default: bool) -> Result<bool> {
        match self.lookup(name) {
            Some(raw) => bool_literal(name, &raw),
            None => Ok(default),
        }
    }

    // ── Lists ──────────────────────────────────────────────

    /// Comma-separated items of a variable
    ///
    /// Splitting keeps empty items: `"a,,b"` yields three elements with an
    /// empty middle one.
    pub fn list(&self, name: &str) -> Result<Vec<String>> {
        self.list_split(name, ",")
    }

    /// Comma-separated items of a variable, or `default` when absent.
    /// Infallible; the default is returned un-split.
    pub fn list_or(&self, name: &str, default: Vec<String>) -> Vec<String> {
        self.list_split_or(name, ",", default)
    }

    /// Items of a variable split on a literal delimiter
    ///
    /// Multi-character delimiters match as whole substrings, not per
    /// character.
    pub fn list_split(&self, name: &str, delimiter: &str) -> Result<Vec<String>> {
        match self.lookup(name) {
            Some(raw) => Ok(raw.split(delimiter).map(str::to_owned).collect()),
            None => Err(Error::missing(name)),
        }
    }

    /// Items split on a literal delimiter, or `default` when absent. Infallible.
    pub fn list_split_or(&self, name: &str, delimiter: &str, default: Vec<String>) -> Vec<String> {
        match self.lookup(name) {
            Some(raw) => raw.split(delimiter).map(str::to_owned).collect(),
            None => default,
        }
    }

    /// Items split on a literal delimiter, each converted via `FromStr`
    ///
    /// # Errors
    /// The first failing element, left to right, aborts with `Malformed`
    /// naming that element; there is no partial result.
    pub fn list_with<T>(&self, name: &str, delimiter: &str) -> Result<Vec<T>>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.list_map(name, delimiter, str::parse::<T>)
    }

    /// Items converted via `FromStr`, or `default` when absent
    pub fn list_with_or<T>(&self, name: &str, delimiter: &str, default: Vec<T>) -> Result<Vec<T>>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.list_map_or(name, delimiter, default, str::parse::<T>)
    }

    /// Items split on a literal delimiter, each converted with a
    /// caller-supplied function
    pub fn list_map<T, E, F>(&self, name: &str, delimiter: &str, convert: F) -> Result<Vec<T>>
    where
        F: FnMut(&str) -> std::result::Result<T, E>,
        E: Into<ConversionError>,
    {
        match self.lookup(name) {
            Some(raw) => split_map(name, &raw, delimiter, convert),
            None => Err(Error::missing(name)),
        }
    }

    /// Items converted with a caller-supplied function, or `default` when
    /// absent. The default is returned un-split and un-converted.
    pub fn list_map_or<T, E, F>(
        &self,
        name: &str,
        delimiter: &str,
        default: Vec<T>,
        convert: F,
    ) -> Result<Vec<T>>
    where
        F: FnMut(&str) -> std::result::Result<T, E>,
        E: Into<ConversionError>,
    {
        match self.lookup(name) {
            Some(raw) => split_map(name, &raw, delimiter, convert),
            None => Ok(default),
        }
    }

    // ── Choices ────────────────────────────────────────────

    /// Raw text of a variable, required to be one of `choices`
    ///
    /// Membership is exact text equality on the raw value. A present value
    /// outside the set is [`Error::InvalidChoice`] carrying the value and
    /// the accepted set in iteration order.
    pub fn choice(&self, name: &str, choices: &[&str]) -> Result<String> {
        match self.lookup(name) {
            Some(raw) => {
                check_choice(name, &raw, choices)?;
                Ok(raw)
            }
            None => Err(Error::missing(name)),
        }
    }

    /// Raw text required to be one of `choices`, or `default` when absent
    ///
    /// The default is not checked against `choices`.
    pub fn choice_or(
        &self,
        name: &str,
        default: impl Into<String>,
        choices: &[&str],
    ) -> Result<String> {
        match self.lookup(name) {
            Some(raw) => {
                check_choice(name, &raw, choices)?;
                Ok(raw)
            }
            None => Ok(default.into()),
        }
    }

    /// A choice-checked variable converted via `FromStr`
    ///
    /// The membership check runs on the raw text before any conversion.
    pub fn choice_with<T>(&self, name: &str, choices: &[&str]) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        match self.lookup(name) {
            Some(raw) => {
                check_choice(name, &raw, choices)?;
                match raw.parse::<T>() {
                    Ok(value) => Ok(value),
                    Err(err) => Err(Error::malformed(name, raw, err)),
                }
            }
            None => Err(Error::missing(name)),
        }
    }

    /// A choice-checked variable converted via `FromStr`, or `default` when
    /// absent (unchecked, unconverted)
    pub fn choice_with_or<T>(&self, name: &str, default: T, choices: &[&str]) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        match self.lookup(name) {
            Some(raw) => {
                check_choice(name, &raw, choices)?;
                match raw.parse::<T>() {
                    Ok(value) => Ok(value),
                    Err(err) => Err(Error::malformed(name, raw, err)),
                }
            }
            None => Ok(default),
        }
    }
}

// ── Conversion helpers ─────────────────────────────────────

fn bool_literal(name: &str, raw: &str) -> Result<bool> {
    let lowered = raw.to_lowercase();
    if TRUTHY.contains(&lowered.as_str()) {
        Ok(true)
    } else if FALSY.contains(&lowered.as_str()) {
        Ok(false)
    } else {
        Err(Error::InvalidBool {
            name: name.to_owned(),
            value: raw.to_owned(),
        })
    }
}

fn check_choice(name: &str, raw: &str, choices: &[&str]) -> Result<()> {
    if choices.iter().any(|choice| *choice == raw) {
        return Ok(());
    }
    Err(Error::InvalidChoice {
        name: name.to_owned(),
        value: raw.to_owned(),
        choices: choices.iter().map(|choice| choice.to_string()).collect(),
    })
}

fn split_map<T, E, F>(name: &str, raw: &str, delimiter: &str, mut convert: F) -> Result<Vec<T>>
where
    F: FnMut(&str) -> std::result::Result<T, E>,
    E: Into<ConversionError>,
{
    let mut items = Vec::new();
    for item in raw.split(delimiter) {
        match convert(item) {
            Ok(value) => items.push(value),
            Err(err) => return Err(Error::malformed(name, item, err)),
        }
    }
    Ok(items)
}
