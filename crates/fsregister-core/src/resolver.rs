//! Name resolution: free-text name to a unique reference number.
//!
//! A search succeeds only when it yields exactly one record. Zero records,
//! several records, and records without a usable `Reference Number` are
//! each reported as a distinct [`ResponseError`]; the resolver never picks
//! among multiple matches.

use std::fmt::{Display, Formatter};

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::client::RegisterClient;
use crate::response::{Payload, RegisterResponse};
use crate::{RegisterError, ResourceType, ResponseError, ValidationError};

const REFERENCE_NUMBER_FIELD: &str = "Reference Number";

/// Non-empty reference number scoped to one resource type (FRN, IRN or PRN).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ReferenceNumber {
    resource_type: ResourceType,
    #[serde(rename = "reference_number")]
    value: String,
}

impl ReferenceNumber {
    pub const fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl Display for ReferenceNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Applies the single-match policy to a search response.
pub fn select_reference(
    response: &RegisterResponse,
    resource_type: ResourceType,
    name: &str,
) -> Result<ReferenceNumber, ResponseError> {
    let no_match = || ResponseError::NoMatch {
        resource_type,
        name: name.to_owned(),
    };

    if !response.is_success() {
        return Err(no_match());
    }
    let payload = response.data().ok_or_else(no_match)?;

    let records = match payload {
        Payload::List(records) => records,
        Payload::Object(_) => {
            return Err(malformed(resource_type, "expected a list of search results"));
        }
    };

    if records.len() > 1 {
        return Err(ResponseError::AmbiguousMatch {
            resource_type,
            count: records.len(),
        });
    }

    let record = records[0]
        .as_object()
        .ok_or_else(|| malformed(resource_type, "search result is not an object"))?;
    let value = match record.get(REFERENCE_NUMBER_FIELD) {
        Some(Value::String(value)) if !value.trim().is_empty() => value.trim().to_owned(),
        Some(_) => {
            return Err(malformed(
                resource_type,
                "'Reference Number' is not a non-empty string",
            ))
        }
        None => return Err(malformed(resource_type, "missing 'Reference Number'")),
    };

    Ok(ReferenceNumber {
        resource_type,
        value,
    })
}

/// A search body that is not JSON: an error page on a non-2xx status is no
/// match, a 2xx one is malformed.
fn unreadable_search(
    resource_type: ResourceType,
    name: &str,
    status: u16,
    detail: String,
) -> ResponseError {
    if (200..300).contains(&status) {
        ResponseError::MalformedResponse {
            resource_type,
            detail: format!("search body is not valid JSON: {detail}"),
        }
    } else {
        ResponseError::NoMatch {
            resource_type,
            name: name.to_owned(),
        }
    }
}

fn malformed(resource_type: ResourceType, detail: &str) -> ResponseError {
    ResponseError::MalformedResponse {
        resource_type,
        detail: detail.to_owned(),
    }
}

impl RegisterClient {
    /// Resolves `name` to the unique reference number of a `resource_type`.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyQuery`] for a blank name, before any I/O
    /// - [`RegisterError::Request`] when the search cannot be transported
    /// - [`ResponseError::NoMatch`], [`ResponseError::AmbiguousMatch`] or
    ///   [`ResponseError::MalformedResponse`] from the single-match policy;
    ///   a body that is not JSON never surfaces as
    ///   [`ResponseError::UnparseableBody`] here
    pub async fn resolve_reference(
        &self,
        name: &str,
        resource_type: ResourceType,
    ) -> Result<ReferenceNumber, RegisterError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyQuery.into());
        }

        let name = name.trim();
        let outcome = match self.common_search(name, resource_type).await {
            Ok(response) => select_reference(&response, resource_type, name),
            Err(RegisterError::Response(ResponseError::UnparseableBody { status, detail })) => {
                Err(unreadable_search(resource_type, name, status, detail))
            }
            Err(error) => return Err(error),
        };
        match &outcome {
            Ok(reference) => debug!(%resource_type, %reference, "resolved reference number"),
            Err(error) => debug!(%resource_type, %error, "reference number not resolved"),
        }
        Ok(outcome?)
    }

    /// String-typed variant that validates the resource type first.
    pub async fn resolve_reference_str(
        &self,
        name: &str,
        resource_type: &str,
    ) -> Result<ReferenceNumber, RegisterError> {
        let resource_type: ResourceType = resource_type.parse()?;
        self.resolve_reference(name, resource_type).await
    }

    /// Firm reference number (FRN) for a firm name.
    pub async fn search_frn(&self, firm_name: &str) -> Result<ReferenceNumber, RegisterError> {
        self.resolve_reference(firm_name, ResourceType::Firm).await
    }

    /// Individual reference number (IRN) for an individual's name.
    pub async fn search_irn(
        &self,
        individual_name: &str,
    ) -> Result<ReferenceNumber, RegisterError> {
        self.resolve_reference(individual_name, ResourceType::Individual)
            .await
    }

    /// Product reference number (PRN) for a fund name.
    pub async fn search_prn(&self, fund_name: &str) -> Result<ReferenceNumber, RegisterError> {
        self.resolve_reference(fund_name, ResourceType::Fund).await
    }
}
