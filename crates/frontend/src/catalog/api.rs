use contracts::CatalogDocument;
use gloo_net::http::Request;

/// Fixed same-origin path of the static catalog document.
const CATALOG_URL: &str = "/catalog.json";

/// Fetch the catalog document. One GET, no query parameters, no auth.
pub async fn fetch_catalog() -> Result<CatalogDocument, String> {
    let response = Request::get(CATALOG_URL)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: CatalogDocument = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
