use fsregister_core::{RegisterClient, ResourceAction, ResourceType};
use serde_json::Value;

use crate::cli::DetailArgs;
use crate::error::CliError;

pub async fn run(
    args: &DetailArgs,
    resource_type: ResourceType,
    client: &RegisterClient,
) -> Result<Value, CliError> {
    let action = ResourceAction::parse(&args.action, args.token.as_deref())?;
    let response = client
        .resource_action(resource_type, &args.reference, &action)
        .await?;
    Ok(serde_json::to_value(response)?)
}
