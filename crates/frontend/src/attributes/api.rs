use contracts::attributes::{FieldVerdict, ValidateQuery};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Submit the raw form values to the validation endpoint.
///
/// Returns one verdict per field the server considered, in server
/// iteration order.
pub async fn validate(query: &ValidateQuery) -> Result<Vec<FieldVerdict>, String> {
    let params =
        serde_qs::to_string(query).map_err(|e| format!("Failed to serialize request: {}", e))?;
    let url = format!("{}/validate?{}", api_base(), params);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Vec<FieldVerdict>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
