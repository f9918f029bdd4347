use fsregister_core::{RegisterClient, ResourceType};
use serde_json::Value;

use crate::cli::SearchArgs;
use crate::error::CliError;

pub async fn run(args: &SearchArgs, client: &RegisterClient) -> Result<Value, CliError> {
    let resource_type: ResourceType = args.resource_type.parse()?;
    let response = client.common_search(&args.query, resource_type).await?;
    Ok(serde_json::to_value(response)?)
}
