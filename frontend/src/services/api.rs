use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::RequestCredentials;

use booking_shared::{
    AuthCheckResponse, AuthResponse, ConfirmReservationRequest, ConfirmReservationResponse,
    GuestProfile, GuestUpdateRequest, LoginRequest, RegisterRequest, ReservationRecord, RoomType,
    UnavailableDates,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server error {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Text for the notification toast. The backend's own error text is shown
    /// when it sent one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { body, .. } if !body.trim().is_empty() => body.trim().to_string(),
            ApiError::Network(_) => "Error de conexión con el servidor.".to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// API client for the hotel backend
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Client for the same origin the page was served from
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let builder = Request::post(&self.url("/api/auth/register"));
        read_json(send_json(builder, request).await?).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let builder = Request::post(&self.url("/api/auth/login"));
        read_json(send_json(builder, request).await?).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let builder = Request::post(&self.url("/api/auth/logout"));
        check_status(send(builder).await?).await?;
        Ok(())
    }

    pub async fn check_auth(&self) -> Result<AuthCheckResponse, ApiError> {
        let builder = Request::get(&self.url("/api/auth/check"));
        read_json(send(builder).await?).await
    }

    pub async fn get_guest(&self, guest_id: i64) -> Result<GuestProfile, ApiError> {
        let builder = Request::get(&self.url(&format!("/api/guests/{}", guest_id)));
        read_json(send(builder).await?).await
    }

    /// Partial update; an empty password keeps the current one
    pub async fn update_guest(
        &self,
        guest_id: i64,
        request: &GuestUpdateRequest,
    ) -> Result<(), ApiError> {
        let builder = Request::put(&self.url(&format!("/api/guests/{}", guest_id)));
        check_status(send_json(builder, request).await?).await?;
        Ok(())
    }

    pub async fn get_room_types(&self) -> Result<Vec<RoomType>, ApiError> {
        let builder = Request::get(&self.url("/api/room-types"));
        read_json(send(builder).await?).await
    }

    /// Fully booked days; malformed entries are skipped
    pub async fn get_unavailable_dates(&self) -> Result<UnavailableDates, ApiError> {
        let builder = Request::get(&self.url("/api/reservations/unavailable-dates"));
        let raw: Vec<String> = read_json(send(builder).await?).await?;
        Ok(UnavailableDates::from_iso_strings(raw))
    }

    pub async fn get_guest_reservations(
        &self,
        guest_id: i64,
    ) -> Result<Vec<ReservationRecord>, ApiError> {
        let builder = Request::get(&self.url(&format!("/api/reservations/guest/{}", guest_id)));
        read_json(send(builder).await?).await
    }

    pub async fn confirm_reservation(
        &self,
        request: &ConfirmReservationRequest,
    ) -> Result<ConfirmReservationResponse, ApiError> {
        let builder = Request::post(&self.url("/api/reservations/confirm"));
        read_json(send_json(builder, request).await?).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

// The backend tracks the login in a session cookie
async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    builder
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

async fn send_json<T: Serialize>(builder: RequestBuilder, body: &T) -> Result<Response, ApiError> {
    builder
        .credentials(RequestCredentials::Include)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("request failed with status {}: {}", status, body);
    Err(ApiError::Status { status, body })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    check_status(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_urls_use_base() {
        let client = ApiClient::with_base_url("http://localhost:8080".to_string());
        assert_eq!(client.url("/api/room-types"), "http://localhost:8080/api/room-types");
        assert_eq!(ApiClient::new().url("/api/auth/check"), "/api/auth/check");
    }

    #[wasm_bindgen_test]
    fn test_user_message_prefers_server_text() {
        let error = ApiError::Status {
            status: 409,
            body: "El correo ya está registrado".to_string(),
        };
        assert_eq!(error.user_message("Error"), "El correo ya está registrado");

        let error = ApiError::Status {
            status: 500,
            body: "  ".to_string(),
        };
        assert_eq!(error.user_message("Error al registrar"), "Error al registrar");
        assert_eq!(
            ApiError::Decode("eof".to_string()).user_message("Error"),
            "Error"
        );
    }
}
