use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::lexer::Span;
use crate::value::Value;

/// How a resistor participates in the equivalent-resistance sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Configuration {
    Series,
    Parallel,
}

impl Configuration {
    pub fn as_str(&self) -> &'static str {
        match self {
            Configuration::Series => "series",
            Configuration::Parallel => "parallel",
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown configuration '{0}' (expected 'series' or 'parallel')")]
pub struct UnknownConfiguration(pub String);

impl FromStr for Configuration {
    type Err = UnknownConfiguration;

    /// Case-insensitive, whitespace-trimmed. Anything but the two known
    /// words is rejected rather than silently dropped from both buckets.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim();
        if word.eq_ignore_ascii_case("series") {
            Ok(Configuration::Series)
        } else if word.eq_ignore_ascii_case("parallel") {
            Ok(Configuration::Parallel)
        } else {
            Err(UnknownConfiguration(word.to_string()))
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResistorSpec {
    pub name: String,
    pub span: Span,
    pub resistance: Value,
    pub config: Configuration,
}

#[derive(Debug, Clone, Serialize)]
pub struct VoltageSourceSpec {
    pub name: String,
    pub span: Span,
    pub voltage: Value,
}

#[derive(Debug, Clone, Serialize)]
pub enum ElementSpec {
    Resistor(ResistorSpec),
    VoltageSource(VoltageSourceSpec),
}

impl ElementSpec {
    pub fn name(&self) -> &str {
        match self {
            ElementSpec::Resistor(r) => &r.name,
            ElementSpec::VoltageSource(v) => &v.name,
        }
    }
}
