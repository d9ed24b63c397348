use mailmerge_prelude::{DeleteResponse, ErrorResponse, Template};
use reqwest::{StatusCode, Url};
use std::time::Duration;

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Configuration {
    #[serde(default = "Configuration::default_base_url")]
    pub base_url: String,
    #[serde(default = "Configuration::default_timeout")]
    pub timeout: u64,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            timeout: Self::default_timeout(),
        }
    }
}

impl Configuration {
    fn default_base_url() -> String {
        "http://127.0.0.1:5000".into()
    }

    fn default_timeout() -> u64 {
        5000
    }

    fn get_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout)
    }

    pub fn build(&self) -> Result<HttpClient, Error> {
        tracing::debug!("building template api client");
        let base_url = Url::parse(&self.base_url).map_err(Error::InvalidUrl)?;
        let client = reqwest::Client::builder()
            .timeout(self.get_timeout())
            .build()
            .map_err(Error::BuildFailed)?;
        Ok(HttpClient { client, base_url })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to build template url: {0}")]
    InvalidUrl(url::ParseError),
    #[error("base url {0} cannot hold a path")]
    CannotBeABase(String),
    #[error("unable to build http client: {0}")]
    BuildFailed(reqwest::Error),
    #[error("unable to execute request: {0}")]
    RequestFailed(reqwest::Error),
    #[error("template not found: {0}")]
    NotFound(String),
    #[error("unable to decode response: {0}")]
    DecodeFailed(reqwest::Error),
}

/// Operations the page needs from the template API.
#[async_trait::async_trait]
pub trait TemplateApi: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Template, Error>;
    async fn delete_by_name(&self, name: &str) -> Result<DeleteResponse, Error>;
}

#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Builds `<base>/templates/<name>`, the name being encoded as a single segment.
    fn template_url(&self, name: &str) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::CannotBeABase(self.base_url.to_string()))?
            .pop_if_empty()
            .push("templates")
            .push(name);
        Ok(url)
    }

    async fn execute(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, Error> {
        req.send().await.map_err(|err| {
            tracing::error!("unable to execute request: {:?}", err);
            Error::RequestFailed(err)
        })
    }
}

#[async_trait::async_trait]
impl TemplateApi for HttpClient {
    async fn find_by_name(&self, name: &str) -> Result<Template, Error> {
        tracing::debug!("loading template {}", name);
        let url = self.template_url(name)?;
        let res = self.execute(self.client.get(url)).await?;
        if res.status() == StatusCode::NOT_FOUND {
            let message = match res.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => name.to_owned(),
            };
            return Err(Error::NotFound(message));
        }
        res.json::<Template>().await.map_err(|err| {
            tracing::error!("unable to decode template: {:?}", err);
            Error::DecodeFailed(err)
        })
    }

    async fn delete_by_name(&self, name: &str) -> Result<DeleteResponse, Error> {
        tracing::debug!("deleting template {}", name);
        let url = self.template_url(name)?;
        let res = self.execute(self.client.delete(url)).await?;
        // the body tells success apart, not the status
        res.json::<DeleteResponse>().await.map_err(|err| {
            tracing::error!("unable to decode deletion response: {:?}", err);
            Error::DecodeFailed(err)
        })
    }
}
