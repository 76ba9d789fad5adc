use crate::shared::api_utils::api_url;
use contracts::domain::a003_customer::Customer;
use gloo_net::http::Request;

/// Reads every document of the `customers` collection
pub async fn fetch_customers() -> Result<Vec<Customer>, String> {
    let url = api_url("/api/customers");

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    serde_json::from_str::<Vec<Customer>>(&text).map_err(|e| format!("Failed to parse response: {}", e))
}
