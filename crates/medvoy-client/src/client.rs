//! The Medvoy API client.

use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use medvoy_directory::SearchHit;
use medvoy_store::{Clinic, ClinicDraft, ClinicPhoto, Doctor, DoctorDraft};

use crate::error::{Error, Result};

/// Client for one Medvoy deployment.
#[derive(Debug, Clone)]
pub struct MedvoyClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::Client,
}

impl MedvoyClient {
    /// Create a client for the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            http: reqwest::Client::new(),
        }
    }

    /// Attach a bearer token for the dashboard routes.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, format!("{}{path}", self.base_url));
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Decode a success body, or surface the server's error envelope.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        Err(envelope_error(status, response).await)
    }

    async fn expect_no_content(response: Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(envelope_error(status, response).await)
    }

    // ------------------------------------------------------------------
    // Public surface
    // ------------------------------------------------------------------

    /// `GET /health`
    pub async fn health(&self) -> Result<Value> {
        Self::decode(self.request(Method::GET, "/health").send().await?).await
    }

    /// `GET /clinics` with query filters.
    pub async fn search_clinics(&self, query: &[(&str, &str)]) -> Result<Vec<SearchHit>> {
        let response = self
            .request(Method::GET, "/clinics")
            .query(query)
            .send()
            .await?;
        Self::decode(response).await
    }

    // ------------------------------------------------------------------
    // Dashboard surface
    // ------------------------------------------------------------------

    /// `POST /api/clinic`
    pub async fn create_clinic(&self, draft: &ClinicDraft) -> Result<Clinic> {
        let response = self
            .request(Method::POST, "/api/clinic")
            .json(draft)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `PUT /api/clinic/{id}`
    pub async fn update_clinic(&self, id: Uuid, draft: &ClinicDraft) -> Result<Clinic> {
        let response = self
            .request(Method::PUT, &format!("/api/clinic/{id}"))
            .json(draft)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `DELETE /api/clinic/{id}`
    pub async fn delete_clinic(&self, id: Uuid) -> Result<()> {
        let response = self
            .request(Method::DELETE, &format!("/api/clinic/{id}"))
            .send()
            .await?;
        Self::expect_no_content(response).await
    }

    /// `POST /api/clinic/{id}/doctors`
    pub async fn add_doctor(&self, id: Uuid, draft: &DoctorDraft) -> Result<Doctor> {
        let response = self
            .request(Method::POST, &format!("/api/clinic/{id}/doctors"))
            .json(draft)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `PUT /api/clinic/{id}/doctors/{doctor_id}`
    pub async fn update_doctor(
        &self,
        id: Uuid,
        doctor_id: Uuid,
        draft: &DoctorDraft,
    ) -> Result<Doctor> {
        let response = self
            .request(Method::PUT, &format!("/api/clinic/{id}/doctors/{doctor_id}"))
            .json(draft)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `DELETE /api/clinic/{id}/doctors/{doctor_id}`
    pub async fn remove_doctor(&self, id: Uuid, doctor_id: Uuid) -> Result<()> {
        let response = self
            .request(Method::DELETE, &format!("/api/clinic/{id}/doctors/{doctor_id}"))
            .send()
            .await?;
        Self::expect_no_content(response).await
    }

    /// `POST /api/clinic/{id}/photos` — multipart upload.
    pub async fn upload_photo(
        &self,
        id: Uuid,
        bytes: Vec<u8>,
        content_type: &str,
        file_name: &str,
        caption: Option<&str>,
    ) -> Result<ClinicPhoto> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let mut form = Form::new().part("file", part);
        if let Some(caption) = caption {
            form = form.text("caption", caption.to_string());
        }

        let response = self
            .request(Method::POST, &format!("/api/clinic/{id}/photos"))
            .multipart(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `DELETE /api/clinic/{id}/photos/{photo_id}`
    pub async fn remove_photo(&self, id: Uuid, photo_id: Uuid) -> Result<()> {
        let response = self
            .request(Method::DELETE, &format!("/api/clinic/{id}/photos/{photo_id}"))
            .send()
            .await?;
        Self::expect_no_content(response).await
    }
}

/// Parse the server's `{"error": {...}}` envelope into [`Error::Api`].
async fn envelope_error(status: StatusCode, response: Response) -> Error {
    let body: Value = response.json().await.unwrap_or(Value::Null);
    let category = body["error"]["category"].as_str().unwrap_or("unknown").to_string();
    let message = body["error"]["message"]
        .as_str()
        .unwrap_or("no message")
        .to_string();
    Error::Api {
        status: status.as_u16(),
        category,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_token() {
        let client = MedvoyClient::new("http://localhost:8080").with_token("tok_1");
        assert_eq!(client.token.as_deref(), Some("tok_1"));
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
