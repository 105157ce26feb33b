use std::time::{Duration, Instant};

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::{
    endpoints::{
        evolution::EvolutionEndpoints, pokemon::PokemonEndpoints, species::SpeciesEndpoints,
        sprite::SpriteEndpoints, types::TypeEndpoints,
    },
    error::Error,
    DEFAULT_BASE_URL,
};

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_USER_AGENT: &str = concat!("pokedex/", env!("CARGO_PKG_VERSION"));

/// PokéAPI client. Cheap to clone; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn pokemon(&self) -> PokemonEndpoints<'_> {
        PokemonEndpoints::new(self)
    }

    pub fn species(&self) -> SpeciesEndpoints<'_> {
        SpeciesEndpoints::new(self)
    }

    pub fn evolution(&self) -> EvolutionEndpoints<'_> {
        EvolutionEndpoints::new(self)
    }

    pub fn types(&self) -> TypeEndpoints<'_> {
        TypeEndpoints::new(self)
    }

    pub fn sprite(&self) -> SpriteEndpoints<'_> {
        SpriteEndpoints::new(self)
    }

    /// Join a path onto the configured base URL.
    pub(crate) fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// GET `url` and decode the JSON body.
    ///
    /// `endpoint` is the label used in the API log line.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        url: &str,
    ) -> Result<T, Error> {
        let response = self.send(endpoint, url).await?;

        Ok(response.json::<T>().await?)
    }

    /// GET `url` and return the raw body.
    pub(crate) async fn get_bytes(&self, endpoint: &str, url: &str) -> Result<Vec<u8>, Error> {
        let response = self.send(endpoint, url).await?;

        Ok(response.bytes().await?.to_vec())
    }

    async fn send(&self, endpoint: &str, url: &str) -> Result<reqwest::Response, Error> {
        let start = Instant::now();

        let result = self.http.request(Method::GET, url).send().await;
        let elapsed = start.elapsed().as_secs_f64();

        let response = match result {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(
                    target: "pokedex::api",
                    "Endpoint: {} | Method: GET | Status: error | Time: {:.2}s | Error: {}",
                    endpoint,
                    elapsed,
                    err
                );
                return Err(err.into());
            }
        };

        let status = response.status();
        tracing::info!(
            target: "pokedex::api",
            "Endpoint: {} | Method: GET | Status: {} | Time: {:.2}s",
            endpoint,
            status.as_u16(),
            elapsed
        );

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound(endpoint.to_string()));
        }

        Ok(response.error_for_status()?)
    }
}

/// Builder for [`Client`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_string());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::BuilderError(format!(
                "base url must be http(s), got {base_url:?}"
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(
                self.timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            )
            .user_agent(
                self.user_agent
                    .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            )
            .build()
            .map_err(|e| Error::BuilderError(e.to_string()))?;

        Ok(Client {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}
