//! Accès au fichier clients du serveur.

use gloo_net::http::Request;

use contracts::domain::a001_client::{Client, ClientDto};
use contracts::domain::common::ClientId;

use crate::shared::api_utils::{api_base, auth_header, error_body};

/// Fetch the full client list.
///
/// Rows the [`Client::from_value`] adapter cannot make sense of are
/// dropped instead of failing the whole list.
pub async fn fetch_clients() -> Result<Vec<Client>, String> {
    let mut request = Request::get(&format!("{}/api/clients", api_base()));
    if let Some(header) = auth_header() {
        request = request.header("Authorization", &header);
    }

    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to fetch clients: {}", e))?;

    if !response.ok() {
        return Err(error_body(response, "Échec du chargement des clients").await);
    }

    let items = response
        .json::<Vec<serde_json::Value>>()
        .await
        .map_err(|e| format!("Failed to parse clients: {}", e))?;

    Ok(items.iter().filter_map(Client::from_value).collect())
}

pub async fn create_client(dto: &ClientDto) -> Result<(), String> {
    dto.validate()?;

    let mut request = Request::post(&format!("{}/api/clients", api_base()));
    if let Some(header) = auth_header() {
        request = request.header("Authorization", &header);
    }

    let response = request
        .json(dto)
        .map_err(|e| format!("Failed to serialize client: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_body(response, "Échec de la création du client").await);
    }
    Ok(())
}

pub async fn update_client(id: ClientId, dto: &ClientDto) -> Result<(), String> {
    dto.validate()?;

    let mut request = Request::put(&format!("{}/api/clients/{}", api_base(), id.value()));
    if let Some(header) = auth_header() {
        request = request.header("Authorization", &header);
    }

    let response = request
        .json(dto)
        .map_err(|e| format!("Failed to serialize client: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_body(response, "Échec de la mise à jour du client").await);
    }
    Ok(())
}
