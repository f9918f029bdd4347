mod detail;
mod markets;
mod resolve;
mod search;

use fsregister_core::credentials::{API_KEY_ENV, USERNAME_ENV};
use fsregister_core::{ClientConfig, Credentials, RegisterClient, ResourceType, ValidationError};
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<Value, CliError> {
    let client = build_client(cli)?;

    match &cli.command {
        Command::Search(args) => search::run(args, &client).await,
        Command::Resolve(args) => resolve::run(args, &client).await,
        Command::Firm(args) => detail::run(args, ResourceType::Firm, &client).await,
        Command::Individual(args) => detail::run(args, ResourceType::Individual, &client).await,
        Command::Fund(args) => detail::run(args, ResourceType::Fund, &client).await,
        Command::Markets => markets::run(&client).await,
    }
}

fn build_client(cli: &Cli) -> Result<RegisterClient, CliError> {
    let username = cli
        .username
        .as_deref()
        .ok_or(ValidationError::MissingEnvVar { name: USERNAME_ENV })?;
    let api_key = cli
        .api_key
        .as_deref()
        .ok_or(ValidationError::MissingEnvVar { name: API_KEY_ENV })?;
    let credentials = Credentials::new(username, api_key)?;

    let mut config = ClientConfig::default().with_timeout_ms(cli.timeout_ms);
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.as_str())?;
    }

    Ok(RegisterClient::with_config(credentials, config)?)
}
