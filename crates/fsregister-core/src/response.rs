//! Read-only view over the register's JSON response envelope.
//!
//! The API wraps every payload in the same top-level object:
//!
//! ```text
//! {
//!   "Status": "FSR-API-04-01-00",
//!   "ResultInfo": { "page": "1", "per_page": "20", "total_count": "1" },
//!   "Message": "Ok. Search successful",
//!   "Data": [ { ... } ]
//! }
//! ```
//!
//! Every accessor treats a missing field as absent rather than an error.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::http_client::HttpResponse;
use crate::ResponseError;

const STATUS_FIELD: &str = "Status";
const MESSAGE_FIELD: &str = "Message";
const RESULT_INFO_FIELD: &str = "ResultInfo";
const DATA_FIELD: &str = "Data";

/// Payload carried in the `Data` field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payload<'a> {
    Object(&'a Map<String, Value>),
    List(&'a [Value]),
}

impl<'a> Payload<'a> {
    /// Number of records: one for a single object.
    pub fn len(&self) -> usize {
        match self {
            Self::Object(_) => 1,
            Self::List(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_list(&self) -> Option<&'a [Value]> {
        match *self {
            Self::List(items) => Some(items),
            Self::Object(_) => None,
        }
    }
}

/// Pagination metadata from `ResultInfo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Pagination {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub total_count: Option<u64>,
}

/// Decoded register response.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterResponse {
    http_status: u16,
    body: Value,
}

impl RegisterResponse {
    /// Decodes the body once. An empty body yields an envelope with every
    /// field absent.
    pub fn from_http(response: HttpResponse) -> Result<Self, ResponseError> {
        let body = if response.body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&response.body).map_err(|error| {
                ResponseError::UnparseableBody {
                    status: response.status,
                    detail: error.to_string(),
                }
            })?
        };

        Ok(Self {
            http_status: response.status,
            body,
        })
    }

    pub fn from_value(http_status: u16, body: Value) -> Self {
        Self { http_status, body }
    }

    pub const fn http_status(&self) -> u16 {
        self.http_status
    }

    pub const fn is_success(&self) -> bool {
        self.http_status >= 200 && self.http_status < 300
    }

    /// Provider status code, e.g. `FSR-API-04-01-00`.
    pub fn status(&self) -> Option<&str> {
        self.body.get(STATUS_FIELD).and_then(Value::as_str)
    }

    pub fn message(&self) -> Option<&str> {
        self.body.get(MESSAGE_FIELD).and_then(Value::as_str)
    }

    pub fn result_info(&self) -> Option<&Map<String, Value>> {
        self.body
            .get(RESULT_INFO_FIELD)
            .and_then(Value::as_object)
            .filter(|info| !info.is_empty())
    }

    /// Typed view of `ResultInfo`; the API sends the counters as strings.
    pub fn pagination(&self) -> Option<Pagination> {
        let info = self.result_info()?;
        Some(Pagination {
            page: info.get("page").and_then(lenient_u64),
            per_page: info.get("per_page").and_then(lenient_u64),
            total_count: info.get("total_count").and_then(lenient_u64),
        })
    }

    /// `Data` payload; `null`, `[]` and `{}` all read as absent.
    pub fn data(&self) -> Option<Payload<'_>> {
        match self.body.get(DATA_FIELD)? {
            Value::Array(items) if !items.is_empty() => Some(Payload::List(items.as_slice())),
            Value::Object(object) if !object.is_empty() => Some(Payload::Object(object)),
            _ => None,
        }
    }

    pub fn has_data(&self) -> bool {
        self.data().is_some()
    }

    pub fn body(&self) -> &Value {
        &self.body
    }
}

impl Serialize for RegisterResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RegisterResponse", 5)?;
        state.serialize_field("http_status", &self.http_status)?;
        state.serialize_field("status", &self.status())?;
        state.serialize_field("message", &self.message())?;
        state.serialize_field("result_info", &self.result_info())?;
        state.serialize_field(
            "data",
            &self.body.get(DATA_FIELD).filter(|_| self.has_data()),
        )?;
        state.end()
    }
}

fn lenient_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
