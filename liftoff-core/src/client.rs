//! HTTP client for the resource-oriented backend.
//!
//! One verb-shaped method per operation; every method performs exactly one
//! round trip and maps any non-2xx status through [`reject`]. There is no
//! retry, no background work, and no shared mutable state.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::patch::UpdatePatch;

/// A backend collection addressable through the client.
pub trait Resource: DeserializeOwned {
    /// Path segment under the base URL, e.g. `products`.
    const PATH: &'static str;
    /// Body shape accepted by the collection POST.
    type Create: Serialize;
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    fn collection_url(&self, path: &str) -> String {
        // The backend routes collections with a trailing slash.
        format!("{}/{}/", self.base_url, path)
    }

    fn item_url(&self, path: &str, id: i64) -> String {
        format!("{}/{}/{}", self.base_url, path, id)
    }

    /// POST the full new-record body; returns the created record with its
    /// backend-assigned id.
    pub async fn create<R: Resource>(&self, body: &R::Create) -> Result<R> {
        let url = self.collection_url(R::PATH);
        debug!(%url, "create");
        let response = self.http.post(&url).json(body).send().await?;
        Self::decode(response).await
    }

    pub async fn list<R: Resource>(&self) -> Result<Vec<R>> {
        let url = self.collection_url(R::PATH);
        debug!(%url, "list");
        let response = self.http.get(&url).send().await?;
        Self::decode(response).await
    }

    pub async fn get_one<R: Resource>(&self, id: i64) -> Result<R> {
        let url = self.item_url(R::PATH, id);
        debug!(%url, "get");
        let response = self.http.get(&url).send().await?;
        Self::decode(response).await
    }

    /// PUT a composed partial-update body. Callers obtain the patch through
    /// [`UpdatePatch::compose`], which guarantees it is non-empty. Any 2xx is
    /// success; the updated record in the body is not read.
    pub async fn update<R: Resource>(&self, id: i64, patch: &UpdatePatch) -> Result<()> {
        let url = self.item_url(R::PATH, id);
        debug!(%url, fields = patch.len(), "update");
        let response = self.http.put(&url).json(patch).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(reject(status.as_u16(), &body))
    }

    pub async fn delete<R: Resource>(&self, id: i64) -> Result<()> {
        let url = self.item_url(R::PATH, id);
        debug!(%url, "delete");
        let response = self.http.delete(&url).send().await?;
        let status = response.status();
        if status.is_success() {
            // 2xx is success regardless of body; DELETE bodies are not read.
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(reject(status.as_u16(), &body))
    }

    async fn decode<R: DeserializeOwned>(response: reqwest::Response) -> Result<R> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        let body = response.text().await.unwrap_or_default();
        Err(reject(status.as_u16(), &body))
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Detail,
}

/// FastAPI-style `detail`: either one message or a list of per-field
/// validation errors each carrying its own `msg`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Detail {
    Message(String),
    Fields(Vec<FieldError>),
}

#[derive(Deserialize)]
struct FieldError {
    msg: String,
}

/// Maps a non-2xx response to the user-visible rejection, concatenating
/// list-valued validation messages in their original order.
fn reject(status: u16, body: &str) -> Error {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: Detail::Message(detail),
        }) => Error::BackendRejected { status, detail },
        Ok(ErrorBody {
            detail: Detail::Fields(fields),
        }) => Error::BackendRejected {
            status,
            detail: fields
                .into_iter()
                .map(|f| f.msg)
                .collect::<Vec<_>>()
                .join("\n"),
        },
        Err(_) => Error::BackendUnparseable { status },
    }
}
