//! Request builder and transport wrapper for the register API.
//!
//! [`RegisterClient`] owns the credential pair, composes request URLs from
//! the endpoint table, attaches the auth headers, and decodes every reply
//! into a [`RegisterResponse`]. Any HTTP status comes back as a response;
//! only transport failures become [`RegisterError::Request`].
//!
//! # Example
//!
//! ```rust,ignore
//! use fsregister_core::RegisterClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), fsregister_core::RegisterError> {
//!     let client = RegisterClient::from_env()?;
//!     let frn = client.search_frn("Hastings Insurance Services Limited").await?;
//!     let names = client.get_firm_names(frn.as_str()).await?;
//!     println!("{:?}", names.data());
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::credentials::Credentials;
use crate::endpoint::{modifier_path, ResourceAction};
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::response::RegisterResponse;
use crate::url::{self, API_VERSION};
use crate::{RegisterError, ResourceType, ValidationError};

/// Typed client for the register's REST surface.
#[derive(Clone)]
pub struct RegisterClient {
    credentials: Credentials,
    config: ClientConfig,
    http_client: Arc<dyn HttpClient>,
}

impl RegisterClient {
    /// Builds a client against the public register with default settings.
    pub fn new(
        username: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, RegisterError> {
        let credentials = Credentials::new(username, api_key)?;
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Reads credentials from `FSR_API_USERNAME` / `FSR_API_KEY`.
    pub fn from_env() -> Result<Self, RegisterError> {
        let credentials = Credentials::from_env()?;
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Builds the reqwest transport from `config`; an unusable user agent is
    /// a configuration error.
    pub fn with_config(
        credentials: Credentials,
        config: ClientConfig,
    ) -> Result<Self, RegisterError> {
        let http_client = Arc::new(ReqwestHttpClient::new(config.user_agent())?);
        Ok(Self::with_http_client(credentials, config, http_client))
    }

    pub fn with_http_client(
        credentials: Credentials,
        config: ClientConfig,
        http_client: Arc<dyn HttpClient>,
    ) -> Self {
        Self {
            credentials,
            config,
            http_client,
        }
    }

    pub const fn api_version(&self) -> &'static str {
        API_VERSION
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Composes a detail URL under the configured base.
    pub fn build_url<S: AsRef<str>>(
        &self,
        resource_type: ResourceType,
        identifier: &str,
        modifiers: &[S],
    ) -> String {
        url::resource_url(self.config.base_url(), resource_type, identifier, modifiers)
    }

    /// Issues one authenticated GET. Non-2xx statuses are returned, not raised.
    pub async fn get(&self, url: &str) -> Result<RegisterResponse, RegisterError> {
        let request = self
            .credentials
            .apply(HttpRequest::get(url))
            .with_timeout_ms(self.config.timeout_ms());

        debug!(url, "sending register request");
        let response = self.http_client.execute(request).await.map_err(|error| {
            warn!(url, kind = ?error.kind(), "register request failed: {}", error.message());
            RegisterError::Request(error)
        })?;
        debug!(url, status = response.status, "register response received");

        Ok(RegisterResponse::from_http(response)?)
    }

    /// Case-insensitive search across one resource type.
    pub async fn common_search(
        &self,
        query: &str,
        resource_type: ResourceType,
    ) -> Result<RegisterResponse, RegisterError> {
        if query.trim().is_empty() {
            return Err(ValidationError::EmptyQuery.into());
        }
        let url = url::search_url(self.config.base_url(), query.trim(), resource_type);
        self.get(&url).await
    }

    /// Detail fetch with caller-supplied modifier segments.
    pub async fn resource_info<S: AsRef<str>>(
        &self,
        resource_type: ResourceType,
        identifier: &str,
        modifiers: &[S],
    ) -> Result<RegisterResponse, RegisterError> {
        if url::strip_separators(identifier.trim()).is_empty() {
            return Err(ValidationError::EmptyIdentifier {
                label: resource_type.reference_label(),
            }
            .into());
        }
        let url = self.build_url(resource_type, identifier, modifiers);
        self.get(&url).await
    }

    /// Detail fetch for an action from the endpoint table.
    pub async fn resource_action(
        &self,
        resource_type: ResourceType,
        identifier: &str,
        action: &ResourceAction,
    ) -> Result<RegisterResponse, RegisterError> {
        let modifiers = modifier_path(resource_type, action)?;
        self.resource_info(resource_type, identifier, modifiers.as_slice())
            .await
    }

    pub async fn get_regulated_markets(&self) -> Result<RegisterResponse, RegisterError> {
        let url = url::regulated_markets_url(self.config.base_url());
        self.get(&url).await
    }

    pub async fn get_firm(&self, frn: &str) -> Result<RegisterResponse, RegisterError> {
        self.firm(frn, ResourceAction::Details).await
    }

    /// Alternative or secondary trading names.
    pub async fn get_firm_names(&self, frn: &str) -> Result<RegisterResponse, RegisterError> {
        self.firm(frn, ResourceAction::Names).await
    }

    pub async fn get_firm_addresses(&self, frn: &str) -> Result<RegisterResponse, RegisterError> {
        self.firm(frn, ResourceAction::Addresses).await
    }

    pub async fn get_firm_controlled_functions(
        &self,
        frn: &str,
    ) -> Result<RegisterResponse, RegisterError> {
        self.firm(frn, ResourceAction::ControlledFunctions).await
    }

    pub async fn get_firm_individuals(
        &self,
        frn: &str,
    ) -> Result<RegisterResponse, RegisterError> {
        self.firm(frn, ResourceAction::Individuals).await
    }

    pub async fn get_firm_permissions(
        &self,
        frn: &str,
    ) -> Result<RegisterResponse, RegisterError> {
        self.firm(frn, ResourceAction::Permissions).await
    }

    pub async fn get_firm_requirements(
        &self,
        frn: &str,
    ) -> Result<RegisterResponse, RegisterError> {
        self.firm(frn, ResourceAction::Requirements).await
    }

    pub async fn get_firm_requirement_investment_types(
        &self,
        frn: &str,
        requirement_ref: &str,
    ) -> Result<RegisterResponse, RegisterError> {
        let action = ResourceAction::parse("requirement-investment-types", Some(requirement_ref))?;
        self.firm(frn, action).await
    }

    pub async fn get_firm_regulators(
        &self,
        frn: &str,
    ) -> Result<RegisterResponse, RegisterError> {
        self.firm(frn, ResourceAction::Regulators).await
    }

    pub async fn get_firm_passports(&self, frn: &str) -> Result<RegisterResponse, RegisterError> {
        self.firm(frn, ResourceAction::Passports).await
    }

    /// Country-specific passport permissions.
    pub async fn get_firm_passport_permissions(
        &self,
        frn: &str,
        country: &str,
    ) -> Result<RegisterResponse, RegisterError> {
        let action = ResourceAction::parse("passport-permissions", Some(country))?;
        self.firm(frn, action).await
    }

    pub async fn get_firm_waivers(&self, frn: &str) -> Result<RegisterResponse, RegisterError> {
        self.firm(frn, ResourceAction::Waivers).await
    }

    pub async fn get_firm_exclusions(
        &self,
        frn: &str,
    ) -> Result<RegisterResponse, RegisterError> {
        self.firm(frn, ResourceAction::Exclusions).await
    }

    pub async fn get_firm_disciplinary_history(
        &self,
        frn: &str,
    ) -> Result<RegisterResponse, RegisterError> {
        self.firm(frn, ResourceAction::DisciplinaryHistory).await
    }

    pub async fn get_firm_appointed_representatives(
        &self,
        frn: &str,
    ) -> Result<RegisterResponse, RegisterError> {
        self.firm(frn, ResourceAction::AppointedRepresentatives)
            .await
    }

    pub async fn get_individual(&self, irn: &str) -> Result<RegisterResponse, RegisterError> {
        self.individual(irn, ResourceAction::Details).await
    }

    pub async fn get_individual_controlled_functions(
        &self,
        irn: &str,
    ) -> Result<RegisterResponse, RegisterError> {
        self.individual(irn, ResourceAction::ControlledFunctions)
            .await
    }

    pub async fn get_individual_disciplinary_history(
        &self,
        irn: &str,
    ) -> Result<RegisterResponse, RegisterError> {
        self.individual(irn, ResourceAction::DisciplinaryHistory)
            .await
    }

    pub async fn get_fund(&self, prn: &str) -> Result<RegisterResponse, RegisterError> {
        self.fund(prn, ResourceAction::Details).await
    }

    pub async fn get_fund_names(&self, prn: &str) -> Result<RegisterResponse, RegisterError> {
        self.fund(prn, ResourceAction::Names).await
    }

    pub async fn get_fund_subfunds(&self, prn: &str) -> Result<RegisterResponse, RegisterError> {
        self.fund(prn, ResourceAction::Subfunds).await
    }

    async fn firm(
        &self,
        frn: &str,
        action: ResourceAction,
    ) -> Result<RegisterResponse, RegisterError> {
        self.resource_action(ResourceType::Firm, frn, &action).await
    }

    async fn individual(
        &self,
        irn: &str,
        action: ResourceAction,
    ) -> Result<RegisterResponse, RegisterError> {
        self.resource_action(ResourceType::Individual, irn, &action)
            .await
    }

    async fn fund(
        &self,
        prn: &str,
        action: ResourceAction,
    ) -> Result<RegisterResponse, RegisterError> {
        self.resource_action(ResourceType::Fund, prn, &action).await
    }
}
