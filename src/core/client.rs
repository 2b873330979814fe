//! The HTTP client: request construction, status validation, response
//! decoding, and one public method per backend operation.

use crate::config::ClientConfig;
use crate::core::multipart::MultipartForm;
use crate::domain::model::{Box, BoxDetail, BoxPatch, Item, PhotoUpload};
use crate::utils::error::{ApiError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Typed client for the inventory backend. Each instance owns its own base
/// URL and auth token, so independent clients (and tests) never interfere.
pub struct InventoryClient {
    base_url: Url,
    http: reqwest::Client,
    auth_token: Option<String>,
}

impl InventoryClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            http: reqwest::Client::new(),
            auth_token: None,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut client = Self::new(&config.base_url)?;
        client.auth_token = config.auth_token.clone();
        Ok(client)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Set or clear the bearer token. Takes effect on the next request; an
    /// in-flight request keeps whatever token it captured at send time.
    pub fn set_auth_token(&mut self, token: Option<String>) {
        self.auth_token = token;
    }

    /// Resolve the download URL for a photo stored on the backend. Builds a
    /// URL only; no request is made.
    pub fn photo_url(&self, filename: &str) -> Result<Url> {
        Ok(self.base_url.join(&format!("/photos/{filename}"))?)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// One HTTP exchange: send the request, validate the status range, return
    /// the raw body. Non-2xx responses fail with the status code alone; the
    /// body is not inspected on that path.
    async fn send(
        &self,
        method: Method,
        url: Url,
        content_type: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>> {
        tracing::debug!(%method, %url, "sending request");

        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, content_type);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "received response");

        if !status.is_success() {
            return Err(ApiError::BadStatus(status.as_u16()));
        }
        Ok(response.bytes().await?.to_vec())
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        content_type: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T> {
        let raw = self.send(method, url, content_type, body).await?;
        serde_json::from_slice(&raw).map_err(|e| ApiError::Decode {
            detail: e.to_string(),
        })
    }

    pub async fn list_boxes(&self) -> Result<Vec<Box>> {
        self.fetch(Method::GET, self.endpoint("/boxes")?, JSON_CONTENT_TYPE, None)
            .await
    }

    pub async fn get_box(&self, id: i64) -> Result<BoxDetail> {
        self.fetch(
            Method::GET,
            self.endpoint(&format!("/boxes/{id}"))?,
            JSON_CONTENT_TYPE,
            None,
        )
        .await
    }

    pub async fn create_box(
        &self,
        number: &str,
        description: Option<&str>,
        photo: Option<PhotoUpload>,
    ) -> Result<Box> {
        let mut form = MultipartForm::new();
        form.append_field("number", number);
        if let Some(description) = description {
            form.append_field("description", description);
        }
        if let Some(photo) = &photo {
            form.append_file("photo", &photo.filename, &photo.bytes, &photo.mime_type);
        }

        let content_type = form.content_type();
        self.fetch(
            Method::POST,
            self.endpoint("/boxes")?,
            &content_type,
            Some(form.build()),
        )
        .await
    }

    pub async fn update_box(&self, id: i64, patch: &BoxPatch) -> Result<Box> {
        let body = serde_json::to_vec(patch)?;
        self.fetch(
            Method::PUT,
            self.endpoint(&format!("/boxes/{id}"))?,
            JSON_CONTENT_TYPE,
            Some(body),
        )
        .await
    }

    /// Delete a box. Success responses carry no payload, so the body is
    /// discarded rather than decoded.
    pub async fn delete_box(&self, id: i64) -> Result<()> {
        self.send(
            Method::DELETE,
            self.endpoint(&format!("/boxes/{id}"))?,
            JSON_CONTENT_TYPE,
            None,
        )
        .await?;
        Ok(())
    }

    pub async fn create_item(
        &self,
        box_id: i64,
        name: &str,
        note: Option<&str>,
        photo: Option<PhotoUpload>,
    ) -> Result<Item> {
        let mut form = MultipartForm::new();
        form.append_field("name", name);
        if let Some(note) = note {
            form.append_field("note", note);
        }
        if let Some(photo) = &photo {
            form.append_file("photo", &photo.filename, &photo.bytes, &photo.mime_type);
        }

        let content_type = form.content_type();
        self.fetch(
            Method::POST,
            self.endpoint(&format!("/boxes/{box_id}/items"))?,
            &content_type,
            Some(form.build()),
        )
        .await
    }

    pub async fn search_items(&self, query: &str) -> Result<Vec<Item>> {
        let mut url = self.endpoint("/search")?;
        url.query_pairs_mut().append_pair("query", query);
        self.fetch(Method::GET, url, JSON_CONTENT_TYPE, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_an_unparseable_base_url() {
        assert!(matches!(
            InventoryClient::new("not a url"),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn photo_url_resolves_against_the_base() {
        let client = InventoryClient::new("http://127.0.0.1:8000").unwrap();
        let url = client.photo_url("abc.jpg").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/photos/abc.jpg");
    }

    #[test]
    fn search_url_percent_encodes_the_query() {
        let client = InventoryClient::new("http://127.0.0.1:8000").unwrap();
        let mut url = client.endpoint("/search").unwrap();
        url.query_pairs_mut().append_pair("query", "old box");
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/search?query=old+box");
    }
}
