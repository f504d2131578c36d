use contracts::identity::{CreateIdentity, Identity, SetPassword, UpdateIdentity};
use contracts::page::PaginatedResponse;
use contracts::query::IdentityListQuery;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, response_error};

pub async fn list(
    token: &str,
    query: &IdentityListQuery,
) -> Result<PaginatedResponse<Identity>, String> {
    let query_string =
        serde_qs::to_string(query).map_err(|e| format!("Failed to build query: {}", e))?;

    let response = Request::get(&api_url(&format!("/api/admin/identities?{}", query_string)))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response
        .json::<PaginatedResponse<Identity>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get(token: &str, id: &str) -> Result<Identity, String> {
    let response = Request::get(&api_url(&format!("/api/admin/identities/{}", id)))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response
        .json::<Identity>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create(token: &str, payload: &CreateIdentity) -> Result<Identity, String> {
    let response = Request::post(&api_url("/api/admin/identities"))
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
        .json::<Identity>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn update(token: &str, id: &str, payload: &UpdateIdentity) -> Result<Identity, String> {
    let response = Request::put(&api_url(&format!("/api/admin/identities/{}", id)))
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
        .json::<Identity>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn delete(token: &str, id: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/admin/identities/{}", id)))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    Ok(())
}

pub async fn unlock(token: &str, id: &str) -> Result<Identity, String> {
    let response = Request::post(&api_url(&format!("/api/admin/identities/{}/unlock", id)))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response
        .json::<Identity>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn set_password(token: &str, id: &str, password: String) -> Result<(), String> {
    let response = Request::post(&api_url(&format!("/api/admin/identities/{}/password", id)))
        .header("Authorization", &format!("Bearer {}", token))
        .json(&SetPassword { password })
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    Ok(())
}
