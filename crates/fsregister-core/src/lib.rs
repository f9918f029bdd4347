//! # FS Register Core
//!
//! Typed client for the FCA Financial Services Register REST API.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Endpoint table** mapping firm, individual and fund actions to URL segments
//! - **Request builder** that composes versioned URLs and attaches the auth headers
//! - **Response envelope** view over `Status`, `Message`, `ResultInfo` and `Data`
//! - **Name resolver** that turns a free-text name into a unique reference number
//! - **HTTP client seam** so transports can be swapped in tests
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | `RegisterClient` and the resource detail accessors |
//! | [`config`] | Base URL, timeout and user agent settings |
//! | [`credentials`] | API username and key |
//! | [`endpoint`] | Resource actions and their modifier segments |
//! | [`error`] | Configuration, request and response error tiers |
//! | [`http_client`] | HTTP client abstraction |
//! | [`resolver`] | Single-match name resolution |
//! | [`resource`] | Firm, individual and fund resource types |
//! | [`response`] | Response envelope accessors |
//! | [`url`] | URL composition |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fsregister_core::{RegisterClient, ResourceType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), fsregister_core::RegisterError> {
//!     let client = RegisterClient::new("me@example.com", "my-api-key")?;
//!
//!     let frn = client.resolve_reference("Barclays Bank Plc", ResourceType::Firm).await?;
//!     let firm = client.get_firm(frn.as_str()).await?;
//!     println!("{:?} {:?}", firm.status(), firm.data());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  CLI / User     │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │  Name Resolver  │────▶│ Register Client  │
//! └─────────────────┘     └────────┬─────────┘
//!                                  │
//!          ┌───────────────────────┼──────────────────────┐
//!          ▼                       ▼                      ▼
//! ┌─────────────────┐     ┌──────────────────┐   ┌─────────────────┐
//! │ Endpoint Table  │     │ HTTP Client      │   │ Response        │
//! │ + URL builder   │     │ (reqwest/mock)   │   │ Envelope        │
//! └─────────────────┘     └──────────────────┘   └─────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Every failure carries one of three tiers:
//!
//! ```rust
//! use fsregister_core::{ErrorTier, RegisterError};
//!
//! fn describe(error: &RegisterError) -> &'static str {
//!     match error.tier() {
//!         ErrorTier::Configuration => "fix the arguments",
//!         ErrorTier::Request => "the register could not be reached",
//!         ErrorTier::Response => "the register answered, but not usefully",
//!     }
//! }
//! ```
//!
//! ## Security
//!
//! - The API key is never logged and is redacted from `Debug` output
//! - Credentials are only read from arguments or environment variables

pub mod client;
pub mod config;
pub mod credentials;
pub mod endpoint;
pub mod error;
pub mod http_client;
pub mod resolver;
pub mod resource;
pub mod response;
pub mod url;

// Client and settings
pub use client::RegisterClient;
pub use config::ClientConfig;
pub use credentials::Credentials;

// Endpoint table
pub use endpoint::{modifier_path, ResourceAction};

// Error types
pub use error::{ErrorTier, RegisterError, ResponseError, ValidationError};

// HTTP client types
pub use http_client::{
    HttpClient, HttpError, HttpErrorKind, HttpRequest, HttpResponse, MockHttpClient,
    ReqwestHttpClient,
};

// Name resolution
pub use resolver::{select_reference, ReferenceNumber};

// Resource identifiers
pub use resource::ResourceType;

// Response envelope
pub use response::{Pagination, Payload, RegisterResponse};

// URL constants
pub use url::{API_VERSION, DEFAULT_BASE_URL};
