// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// HTTP access to the shields.io static badge endpoint.
///
/// The transport sits behind [`ShieldService`] so shield serialization can be
/// exercised without network access. [`ShieldsIoClient`] is the reqwest-backed
/// implementation: one GET per call, no retry and no caching.
use std::{future::Future, time::Duration};

use tracing::{debug, info, warn};
use url::Url;

use crate::error::Error;

/// Endpoint that renders static shields from query parameters.
pub const SHIELDS_IO_ENDPOINT: &str = "https://img.shields.io/static/v1";

/// Source of rendered shield documents.
pub trait ShieldService
{
    /// Requests the shield described by `query` and returns the response
    /// body.
    fn fetch_svg(&self, query: &str,) -> impl Future<Output = Result<String, Error,>,> + Send;
}

/// reqwest-backed client for the shields.io static endpoint.
#[derive(Debug, Clone,)]
pub struct ShieldsIoClient
{
    http:     reqwest::Client,
    endpoint: Url,
}

impl ShieldsIoClient
{
    /// Creates a client for [`SHIELDS_IO_ENDPOINT`] without a request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] when the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, Error,>
    {
        Self::builder().build()
    }

    /// Starts configuring a client.
    pub fn builder() -> ShieldsIoClientBuilder
    {
        ShieldsIoClientBuilder::default()
    }

    /// Endpoint that receives the shield queries.
    pub fn endpoint(&self,) -> &Url
    {
        &self.endpoint
    }

    /// Full request URL for `query`.
    pub fn request_url(&self, query: &str,) -> Url
    {
        let mut url = self.endpoint.clone();
        url.set_query(Some(query,),);
        url
    }
}

impl ShieldService for ShieldsIoClient
{
    async fn fetch_svg(&self, query: &str,) -> Result<String, Error,>
    {
        let url = self.request_url(query,);
        debug!(%url, "requesting shield");

        let response = self.http.get(url,).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "shield service rejected request");
            return Err(Error::ShieldStatus {
                status: status.as_u16(),
            },);
        }

        let body = response.text().await?;
        info!(bytes = body.len(), "received shield");
        Ok(body,)
    }
}

/// Builder for [`ShieldsIoClient`].
#[derive(Debug, Clone, Default,)]
pub struct ShieldsIoClientBuilder
{
    endpoint: Option<Url,>,
    timeout:  Option<Duration,>,
}

impl ShieldsIoClientBuilder
{
    /// Overrides the endpoint, e.g. for a self-hosted shields instance.
    pub fn endpoint(mut self, endpoint: Url,) -> Self
    {
        self.endpoint = Some(endpoint,);
        self
    }

    /// Bounds each request by `timeout`.
    pub fn timeout(mut self, timeout: Duration,) -> Self
    {
        self.timeout = Some(timeout,);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] when the TLS backend cannot be initialized.
    pub fn build(self,) -> Result<ShieldsIoClient, Error,>
    {
        let mut http = reqwest::Client::builder();
        if let Some(timeout,) = self.timeout {
            http = http.timeout(timeout,);
        }

        let endpoint = match self.endpoint {
            Some(endpoint,) => endpoint,
            None => Url::parse(SHIELDS_IO_ENDPOINT,)
                .map_err(|e| Error::validation(format!("invalid shields endpoint: {e}"),),)?,
        };

        Ok(ShieldsIoClient {
            http: http.build()?,
            endpoint,
        },)
    }
}
