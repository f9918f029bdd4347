//! Endpoint table for resource detail lookups.
//!
//! Each [`ResourceAction`] maps to the ordered modifier segments appended
//! after `/{ResourceBase}/{identifier}`.
//!
//! | Action | Firm | Individual | Fund | Segments |
//! |--------|------|------------|------|----------|
//! | `details` | yes | yes | yes | |
//! | `names` | yes | | yes | `Names` |
//! | `addresses` | yes | | | `Address` |
//! | `controlled-functions` | yes | yes | | `CF` |
//! | `individuals` | yes | | | `Individuals` |
//! | `permissions` | yes | | | `Permissions` |
//! | `requirements` | yes | | | `Requirements` |
//! | `requirement-investment-types` | yes | | | `Requirements/{ref}/InvestmentTypes` |
//! | `regulators` | yes | | | `Regulators` |
//! | `passports` | yes | | | `Passports` |
//! | `passport-permissions` | yes | | | `Passports/{country}/Permission` |
//! | `waivers` | yes | | | `Waivers` |
//! | `exclusions` | yes | | | `Exclusions` |
//! | `disciplinary-history` | yes | yes | | `DisciplinaryHistory` |
//! | `appointed-representatives` | yes | | | `AR` |
//! | `subfunds` | | | yes | `Subfund` |

use std::fmt::{Display, Formatter};

use crate::{ResourceType, ValidationError};

/// Sub-resource requested for a single register entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceAction {
    Details,
    Names,
    Addresses,
    ControlledFunctions,
    Individuals,
    Permissions,
    Requirements,
    RequirementInvestmentTypes { requirement_ref: String },
    Regulators,
    Passports,
    PassportPermissions { country: String },
    Waivers,
    Exclusions,
    DisciplinaryHistory,
    AppointedRepresentatives,
    Subfunds,
}

impl ResourceAction {
    /// Kebab-case names accepted by [`ResourceAction::parse`].
    pub const NAMES: [&'static str; 16] = [
        "details",
        "names",
        "addresses",
        "controlled-functions",
        "individuals",
        "permissions",
        "requirements",
        "requirement-investment-types",
        "regulators",
        "passports",
        "passport-permissions",
        "waivers",
        "exclusions",
        "disciplinary-history",
        "appointed-representatives",
        "subfunds",
    ];

    /// Resolves an action name, using `token` for the parameterised actions.
    pub fn parse(name: &str, token: Option<&str>) -> Result<Self, ValidationError> {
        let token = token.map(str::trim).filter(|value| !value.is_empty());
        let action = match name.trim().to_ascii_lowercase().as_str() {
            "details" => Self::Details,
            "names" => Self::Names,
            "addresses" => Self::Addresses,
            "controlled-functions" => Self::ControlledFunctions,
            "individuals" => Self::Individuals,
            "permissions" => Self::Permissions,
            "requirements" => Self::Requirements,
            "requirement-investment-types" => Self::RequirementInvestmentTypes {
                requirement_ref: token
                    .ok_or(ValidationError::MissingActionToken {
                        action: "requirement-investment-types",
                        token: "requirement reference",
                    })?
                    .to_owned(),
            },
            "regulators" => Self::Regulators,
            "passports" => Self::Passports,
            "passport-permissions" => Self::PassportPermissions {
                country: token
                    .ok_or(ValidationError::MissingActionToken {
                        action: "passport-permissions",
                        token: "country",
                    })?
                    .to_owned(),
            },
            "waivers" => Self::Waivers,
            "exclusions" => Self::Exclusions,
            "disciplinary-history" => Self::DisciplinaryHistory,
            "appointed-representatives" => Self::AppointedRepresentatives,
            "subfunds" => Self::Subfunds,
            other => {
                return Err(ValidationError::UnknownAction {
                    value: other.to_owned(),
                })
            }
        };
        Ok(action)
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Details => "details",
            Self::Names => "names",
            Self::Addresses => "addresses",
            Self::ControlledFunctions => "controlled-functions",
            Self::Individuals => "individuals",
            Self::Permissions => "permissions",
            Self::Requirements => "requirements",
            Self::RequirementInvestmentTypes { .. } => "requirement-investment-types",
            Self::Regulators => "regulators",
            Self::Passports => "passports",
            Self::PassportPermissions { .. } => "passport-permissions",
            Self::Waivers => "waivers",
            Self::Exclusions => "exclusions",
            Self::DisciplinaryHistory => "disciplinary-history",
            Self::AppointedRepresentatives => "appointed-representatives",
            Self::Subfunds => "subfunds",
        }
    }

    /// Canonical ordered modifier segments for this action.
    pub fn modifiers(&self) -> Vec<&str> {
        match self {
            Self::Details => Vec::new(),
            Self::Names => vec!["Names"],
            Self::Addresses => vec!["Address"],
            Self::ControlledFunctions => vec!["CF"],
            Self::Individuals => vec!["Individuals"],
            Self::Permissions => vec!["Permissions"],
            Self::Requirements => vec!["Requirements"],
            Self::RequirementInvestmentTypes { requirement_ref } => {
                vec!["Requirements", requirement_ref.as_str(), "InvestmentTypes"]
            }
            Self::Regulators => vec!["Regulators"],
            Self::Passports => vec!["Passports"],
            Self::PassportPermissions { country } => {
                vec!["Passports", country.as_str(), "Permission"]
            }
            Self::Waivers => vec!["Waivers"],
            Self::Exclusions => vec!["Exclusions"],
            Self::DisciplinaryHistory => vec!["DisciplinaryHistory"],
            Self::AppointedRepresentatives => vec!["AR"],
            Self::Subfunds => vec!["Subfund"],
        }
    }

    pub const fn supports(&self, resource_type: ResourceType) -> bool {
        match resource_type {
            ResourceType::Firm => !matches!(self, Self::Subfunds),
            ResourceType::Individual => matches!(
                self,
                Self::Details | Self::ControlledFunctions | Self::DisciplinaryHistory
            ),
            ResourceType::Fund => matches!(self, Self::Details | Self::Names | Self::Subfunds),
        }
    }
}

impl Display for ResourceAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Looks up the modifier path for `action` on `resource_type`.
pub fn modifier_path(
    resource_type: ResourceType,
    action: &ResourceAction,
) -> Result<Vec<&str>, ValidationError> {
    if !action.supports(resource_type) {
        return Err(ValidationError::UnsupportedAction {
            action: action.name(),
            resource_type,
        });
    }
    Ok(action.modifiers())
}
