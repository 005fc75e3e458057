//! Column selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A table column that can be requested through `limit_fields`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitField {
    SubmitDate,
    InfoFound,
    SourcePage,
    Text,
    RequestedResponse,
    Survey,
    Tags,
}

impl LimitField {
    /// Every column, in display order.
    pub const ALL: [Self; 7] = [
        Self::SubmitDate,
        Self::InfoFound,
        Self::SourcePage,
        Self::Text,
        Self::RequestedResponse,
        Self::Survey,
        Self::Tags,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SubmitDate => "submit_date",
            Self::InfoFound => "info_found",
            Self::SourcePage => "source_page",
            Self::Text => "text",
            Self::RequestedResponse => "requested_response",
            Self::Survey => "survey",
            Self::Tags => "tags",
        }
    }

    /// Whether this column is shown. An empty selection shows everything.
    #[must_use]
    pub fn included_in(self, limit_fields: &[Self]) -> bool {
        limit_fields.is_empty() || limit_fields.contains(&self)
    }
}

impl fmt::Display for LimitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LimitField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == wanted)
            .ok_or_else(|| {
                let known = Self::ALL.map(Self::as_str).join(", ");
                format!("unknown field '{s}' (expected one of: {known})")
            })
    }
}
