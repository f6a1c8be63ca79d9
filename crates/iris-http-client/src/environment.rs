//! Midtrans API environments

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HttpError;

const SANDBOX_URL: &str = "https://app.sandbox.midtrans.com";
const PRODUCTION_URL: &str = "https://app.midtrans.com";
const IRIS_PATH: &str = "/iris";

/// Environment the client talks to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Sandbox, no real money moves
    #[default]
    Sandbox,
    /// Production
    Production,
}

impl Environment {
    /// Base URL of the environment
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Sandbox => SANDBOX_URL,
            Self::Production => PRODUCTION_URL,
        }
    }

    /// Base URL all IRIS API paths are resolved against
    pub fn iris_url(&self) -> String {
        format!("{}{}", self.base_url(), IRIS_PATH)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sandbox => write!(f, "sandbox"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl FromStr for Environment {
    type Err = HttpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sandbox" => Ok(Self::Sandbox),
            "production" => Ok(Self::Production),
            other => Err(HttpError::Other(format!("Unknown environment: {}", other))),
        }
    }
}
