//! Accès aux commandes côté serveur: consultation, création, encaissements.

use chrono::NaiveDate;
use gloo_net::http::Request;

use contracts::domain::a002_tariff::PricingMode;
use contracts::domain::a003_order::{CreateOrderRequest, Order, RecordPaymentRequest};
use contracts::domain::common::OrderId;

use crate::shared::api_utils::{api_base, auth_header, error_body};

/// Fetch orders over a reception date range, newest first as the server
/// returns them. `query` searches the order number and the client name
/// server side.
pub async fn fetch_orders(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    query: &str,
) -> Result<Vec<Order>, String> {
    let mut params: Vec<String> = Vec::new();
    if let Some(from) = from {
        params.push(format!("from={}", from.format("%Y-%m-%d")));
    }
    if let Some(to) = to {
        params.push(format!("to={}", to.format("%Y-%m-%d")));
    }
    let query = query.trim();
    if !query.is_empty() {
        params.push(format!("q={}", urlencoding::encode(query)));
    }

    let mut url = format!("{}/api/orders", api_base());
    if !params.is_empty() {
        url = format!("{}?{}", url, params.join("&"));
    }

    let mut request = Request::get(&url);
    if let Some(header) = auth_header() {
        request = request.header("Authorization", &header);
    }

    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to fetch orders: {}", e))?;

    if !response.ok() {
        return Err(error_body(response, "Échec du chargement des commandes").await);
    }

    let items = response
        .json::<Vec<serde_json::Value>>()
        .await
        .map_err(|e| format!("Failed to parse orders: {}", e))?;

    Ok(items.iter().filter_map(Order::from_value).collect())
}

pub async fn fetch_order(id: OrderId) -> Result<Order, String> {
    let mut request = Request::get(&format!("{}/api/orders/{}", api_base(), id.value()));
    if let Some(header) = auth_header() {
        request = request.header("Authorization", &header);
    }

    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to fetch order: {}", e))?;

    if !response.ok() {
        return Err(error_body(response, "Échec du chargement de la commande").await);
    }

    let value = response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| format!("Failed to parse order: {}", e))?;

    Order::from_value(&value).ok_or_else(|| "Réponse du serveur illisible".to_string())
}

/// Submit a finished draft. The endpoint depends on the pricing mode of
/// the composition screen, the body is the same shape for both.
///
/// On success the server answers with the printable receipt, returned
/// here as raw bytes.
pub async fn create_order(
    mode: PricingMode,
    request_body: &CreateOrderRequest,
) -> Result<Vec<u8>, String> {
    let path = match mode {
        PricingMode::ByItem => "/api/orders/by-item",
        PricingMode::ByWeight => "/api/orders/by-weight",
    };

    let mut request = Request::post(&format!("{}{}", api_base(), path));
    if let Some(header) = auth_header() {
        request = request.header("Authorization", &header);
    }

    let response = request
        .json(request_body)
        .map_err(|e| format!("Failed to serialize order: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send order: {}", e))?;

    if !response.ok() {
        return Err(error_body(response, "Échec de l'enregistrement de la commande").await);
    }

    response
        .binary()
        .await
        .map_err(|e| format!("Failed to read receipt: {}", e))
}

/// Receipt bytes of an already recorded order, for reprinting.
pub async fn fetch_receipt(id: OrderId) -> Result<Vec<u8>, String> {
    let mut request = Request::get(&format!(
        "{}/api/orders/{}/receipt",
        api_base(),
        id.value()
    ));
    if let Some(header) = auth_header() {
        request = request.header("Authorization", &header);
    }

    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to fetch receipt: {}", e))?;

    if !response.ok() {
        return Err(error_body(response, "Échec du chargement du reçu").await);
    }

    response
        .binary()
        .await
        .map_err(|e| format!("Failed to read receipt: {}", e))
}

pub async fn record_payment(id: OrderId, amount: f64) -> Result<(), String> {
    let body = RecordPaymentRequest { amount };

    let mut request = Request::post(&format!(
        "{}/api/orders/{}/payments",
        api_base(),
        id.value()
    ));
    if let Some(header) = auth_header() {
        request = request.header("Authorization", &header);
    }

    let response = request
        .json(&body)
        .map_err(|e| format!("Failed to serialize payment: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send payment: {}", e))?;

    if !response.ok() {
        return Err(error_body(response, "Échec de l'enregistrement du règlement").await);
    }
    Ok(())
}
