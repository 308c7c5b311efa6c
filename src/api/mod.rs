// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the camera fleet API.
//!
//! Two endpoints are used:
//! - `GET /app/v1/fetch/cameras` returns the full fleet inside a `data` field
//! - `PUT /app/v1/update/camera/status` flips one camera's status
//!
//! Both are bearer-token authenticated. Transport failures and non-2xx
//! responses collapse into the crate's single request-error path; the caller
//! decides what (if anything) to retry, which today is nothing.

use crate::config::defaults::DEFAULT_REQUEST_TIMEOUT_SECS;
use crate::domain::camera::{Camera, CameraId, CameraStatus};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const FETCH_CAMERAS_PATH: &str = "/app/v1/fetch/cameras";
const UPDATE_CAMERA_STATUS_PATH: &str = "/app/v1/update/camera/status";

const USER_AGENT: &str = concat!("CamBoard/", env!("CARGO_PKG_VERSION"));

/// Envelope of the fetch endpoint: the fleet sits in `data`.
#[derive(Debug, Deserialize)]
struct FetchCamerasResponse {
    data: Vec<Camera>,
}

/// Body of the status update request.
#[derive(Debug, Serialize)]
struct UpdateStatusRequest {
    id: CameraId,
    status: CameraStatus,
}

/// Client for the fleet API. Cheap to clone; the inner `reqwest::Client`
/// shares its connection pool across clones, so async tasks can each take
/// their own copy.
#[derive(Debug, Clone)]
pub struct CameraApi {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl CameraApi {
    /// Builds a client for `base_url` (no trailing slash) with an optional
    /// bearer token and the default timeout.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        Self::with_timeout(
            base_url,
            token,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    /// Builds a client with an explicit per-request timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            token,
        })
    }

    /// Returns whether a bearer token is configured.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Fetches the full camera list.
    pub async fn fetch_cameras(&self) -> Result<Vec<Camera>> {
        let response = self
            .authorize(self.http.get(self.endpoint(FETCH_CAMERAS_PATH)))
            .send()
            .await?;

        let response = check_status(response).await?;
        let payload: FetchCamerasResponse = response.json().await?;
        Ok(payload.data)
    }

    /// Requests a status change for one camera.
    ///
    /// The endpoint documents no response body beyond success/failure, so a
    /// successful call yields `()` and the caller refreshes the list to see
    /// the server's view of the fleet.
    pub async fn update_status(&self, id: CameraId, status: CameraStatus) -> Result<()> {
        let response = self
            .authorize(self.http.put(self.endpoint(UPDATE_CAMERA_STATUS_PATH)))
            .json(&UpdateStatusRequest { id, status })
            .send()
            .await?;

        check_status(response).await?;
        Ok(())
    }
}

/// Maps a non-success response to `Error::Api`, keeping whatever body text
/// the server produced as the message.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(Error::Api {
        status: status.as_u16(),
        message,
    })
}
