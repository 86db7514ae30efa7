//! Chargement du catalogue tarifaire depuis le serveur.

use gloo_net::http::Request;

use contracts::domain::a002_tariff::{CatalogEntry, CatalogIndex, PricingMode};

use crate::shared::api_utils::{api_base, auth_header, error_body};

/// Fetch the tariff catalog for one pricing mode.
///
/// Upstream rows arrive with uneven field names, so each row goes
/// through the tolerant [`CatalogEntry::from_value`] adapter and rows
/// it rejects are dropped.
pub async fn fetch_catalog(mode: PricingMode) -> Result<CatalogIndex, String> {
    let path = match mode {
        PricingMode::ByItem => "/api/tariffs/articles",
        PricingMode::ByWeight => "/api/tariffs/weight",
    };

    let mut request = Request::get(&format!("{}{}", api_base(), path));
    if let Some(header) = auth_header() {
        request = request.header("Authorization", &header);
    }

    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to fetch catalog: {}", e))?;

    if !response.ok() {
        return Err(error_body(response, "Échec du chargement du catalogue").await);
    }

    let items = response
        .json::<Vec<serde_json::Value>>()
        .await
        .map_err(|e| format!("Failed to parse catalog: {}", e))?;

    let entries: Vec<CatalogEntry> = items
        .iter()
        .filter_map(|item| CatalogEntry::from_value(item, mode))
        .collect();

    Ok(CatalogIndex::new(entries))
}
