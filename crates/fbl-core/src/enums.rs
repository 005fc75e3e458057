//! Enumerations shared across the workspace.
//!
//! All enums serialize as `snake_case`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;
use crate::lenient::truthy;

// ---------------------------------------------------------------------------
// RequestedResponse
// ---------------------------------------------------------------------------

/// Whether the visitor asked to be contacted about their feedback.
///
/// The API sends `"Yes"`, `"No"`, an empty string or nothing at all. Only an
/// exact `"Yes"` is a request; any other non-empty value counts as a refusal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestedResponse {
    Yes,
    No,
    #[default]
    NotApplicable,
}

impl RequestedResponse {
    /// Classify the raw API value. Emptiness follows [`truthy`].
    #[must_use]
    pub fn from_api(raw: Option<&Value>) -> Self {
        match raw {
            Some(value) if truthy(value) => {
                if value.as_str() == Some("Yes") {
                    Self::Yes
                } else {
                    Self::No
                }
            }
            _ => Self::NotApplicable,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::NotApplicable => "not_applicable",
        }
    }
}

impl<'de> Deserialize<'de> for RequestedResponse {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let value = Option::<Value>::deserialize(d)?;
        Ok(Self::from_api(value.as_ref()))
    }
}

/// Parses the names this type serializes to, not API values.
impl FromStr for RequestedResponse {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            "not_applicable" => Ok(Self::NotApplicable),
            other => Err(CoreError::Validation(format!(
                "unknown requested response '{other}'"
            ))),
        }
    }
}

impl fmt::Display for RequestedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SortVariant
// ---------------------------------------------------------------------------

/// Direction of the feedback listing. Feedback is always ordered by
/// `submit_date`; only the direction is exposed to reviewers.
///
/// The numeric index is what the reviewer-facing sort selector submits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortVariant {
    #[default]
    NewestFirst,
    OldestFirst,
}

impl SortVariant {
    /// Column every feedback request is ordered by.
    pub const ORDER_BY: &'static str = "submit_date";

    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::NewestFirst),
            1 => Some(Self::OldestFirst),
            _ => None,
        }
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::NewestFirst => 0,
            Self::OldestFirst => 1,
        }
    }

    #[must_use]
    pub const fn desc(self) -> bool {
        matches!(self, Self::NewestFirst)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NewestFirst => "newest_first",
            Self::OldestFirst => "oldest_first",
        }
    }
}

impl FromStr for SortVariant {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "newest" | "newest_first" | "desc" => Ok(Self::NewestFirst),
            "1" | "oldest" | "oldest_first" | "asc" => Ok(Self::OldestFirst),
            other => Err(CoreError::Validation(format!("unknown sort variant '{other}'"))),
        }
    }
}

impl fmt::Display for SortVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TitleOrder
// ---------------------------------------------------------------------------

/// Order in which watched node ids are returned, by node title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleOrder {
    #[default]
    Asc,
    Desc,
}

impl TitleOrder {
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for TitleOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(CoreError::Validation(format!("unknown title order '{s}'")))
        }
    }
}
