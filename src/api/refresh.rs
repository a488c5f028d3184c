//! Access-token refresh over HTTP

use super::session::FileSession;
use super::traits::TokenProvider;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest {
    refresh_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefreshReply {
    #[serde(default)]
    access_token: Option<String>,
}

/// Exchanges the stored refresh token for a new access token and writes it
/// back into the session file
pub struct HttpTokenRefresher {
    http: reqwest::Client,
    refresh_url: String,
    session: Arc<FileSession>,
}

impl HttpTokenRefresher {
    pub fn new(refresh_url: String, session: Arc<FileSession>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            refresh_url,
            session,
        })
    }

    async fn try_refresh(&self) -> Result<()> {
        let refresh_token = self.session.load()?.refresh_token;
        let reply: RefreshReply = self
            .http
            .post(&self.refresh_url)
            .json(&RefreshRequest { refresh_token })
            .send()
            .await?
            .json()
            .await?;

        let token = reply
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| anyhow!("refresh reply carried no access token"))?;
        self.session.set_access_token(&token)?;
        Ok(())
    }
}

#[async_trait]
impl TokenProvider for HttpTokenRefresher {
    async fn refresh(&self) -> bool {
        match self.try_refresh().await {
            Ok(()) => {
                tracing::info!("Access token refreshed");
                true
            }
            Err(err) => {
                tracing::warn!("Token refresh failed: {err:#}");
                false
            }
        }
    }
}
