use fsregister_core::RegisterClient;
use serde_json::Value;

use crate::error::CliError;

pub async fn run(client: &RegisterClient) -> Result<Value, CliError> {
    let response = client.get_regulated_markets().await?;
    Ok(serde_json::to_value(response)?)
}
