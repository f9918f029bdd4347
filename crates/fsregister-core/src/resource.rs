use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Register resource types exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Firm,
    Individual,
    Fund,
}

impl ResourceType {
    pub const ALL: [Self; 3] = [Self::Firm, Self::Individual, Self::Fund];

    /// Value used for the `type` filter of the common search endpoint.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Firm => "firm",
            Self::Individual => "individual",
            Self::Fund => "fund",
        }
    }

    /// First path segment of the resource's detail endpoints.
    pub const fn endpoint_base(self) -> &'static str {
        match self {
            Self::Firm => "Firm",
            Self::Individual => "Individuals",
            Self::Fund => "CIS",
        }
    }

    /// Short name of the reference number scoped to this resource type.
    pub const fn reference_label(self) -> &'static str {
        match self {
            Self::Firm => "FRN",
            Self::Individual => "IRN",
            Self::Fund => "PRN",
        }
    }
}

impl Display for ResourceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "firm" => Ok(Self::Firm),
            "individual" => Ok(Self::Individual),
            "fund" => Ok(Self::Fund),
            _ => Err(ValidationError::InvalidResourceType {
                value: value.to_owned(),
            }),
        }
    }
}
