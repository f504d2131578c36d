use contracts::page::PaginatedResponse;
use contracts::query::TenantListQuery;
use contracts::tenant::{CreateTenant, Tenant, UpdateTenant};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, response_error};

pub async fn list(
    token: &str,
    query: &TenantListQuery,
) -> Result<PaginatedResponse<Tenant>, String> {
    let query_string =
        serde_qs::to_string(query).map_err(|e| format!("Failed to build query: {}", e))?;

    let response = Request::get(&api_url(&format!("/api/admin/tenants?{}", query_string)))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response
        .json::<PaginatedResponse<Tenant>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get(token: &str, id: &str) -> Result<Tenant, String> {
    let response = Request::get(&api_url(&format!("/api/admin/tenants/{}", id)))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response
        .json::<Tenant>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create(token: &str, payload: &CreateTenant) -> Result<Tenant, String> {
    let response = Request::post(&api_url("/api/admin/tenants"))
        .header("Authorization", &format!("Bearer {}", token))
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response
        .json::<Tenant>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn update(token: &str, id: &str, payload: &UpdateTenant) -> Result<Tenant, String> {
    let response = Request::put(&api_url(&format!("/api/admin/tenants/{}", id)))
        .header("Authorization", &format!("Bearer {}", token))
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response
        .json::<Tenant>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn delete(token: &str, id: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/admin/tenants/{}", id)))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    Ok(())
}
