use crate::{
    config::Config,
    models::{
        error::AppError,
        lookups::Lookups,
        power::{ConsumptionData, DataType, GenerationData, PowerSample, PowerTypeMapping},
    },
};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;

// API CONFIGURATION
/// Resolves the API base URL from an optional override, falling back to the
/// local default. Blank overrides are ignored and one trailing `/` is dropped.
pub fn resolve_base_url(override_url: Option<&str>) -> String {
    let url = override_url
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .unwrap_or(Config::DEFAULT_API_BASE_URL);
    url.strip_suffix('/').unwrap_or(url).to_string()
}

/// Configuration for the dashboard API client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Configuration from the `STROM_API_URL` value seen at build time.
    pub fn from_env() -> Self {
        Self::builder()
            .base_url(resolve_base_url(option_env!("STROM_API_URL")))
            .build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path plus optional filters.
    pub fn endpoint_url(&self, endpoint: &str, filters: Option<&DataFilters>) -> String {
        let query = filters.map(DataFilters::query_string).unwrap_or_default();
        if query.is_empty() {
            format!("{}{endpoint}", self.base_url)
        } else {
            format!("{}{endpoint}?{query}", self.base_url)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: resolve_base_url(self.base_url.as_deref()),
        }
    }
}

// REQUEST FILTERS
/// Optional filters for `/generation` and `/consumption`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataFilters {
    pub region: Option<String>,
    pub power_type: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub limit: Option<u32>,
}

impl DataFilters {
    /// Percent-encoded `key=value` pairs joined by `&`. Absent, empty and
    /// zero values are left out.
    pub fn query_string(&self) -> String {
        let mut params: Vec<(&str, String)> = Vec::new();

        if let Some(region) = self.region.as_deref().filter(|r| !r.is_empty()) {
            params.push(("region", region.to_string()));
        }
        if let Some(power_type) = self.power_type.filter(|&p| p != 0) {
            params.push(("power_type", power_type.to_string()));
        }
        if let Some(start) = self.start_date {
            params.push(("start_date", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            params.push(("end_date", end.format("%Y-%m-%d").to_string()));
        }
        if let Some(limit) = self.limit.filter(|&l| l != 0) {
            params.push(("limit", limit.to_string()));
        }

        params
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

// LOOKUP SOURCE
/// Anything that can serve the two startup lookup lists.
#[allow(async_fn_in_trait)]
pub trait LookupSource {
    async fn power_types(&self) -> Result<Vec<PowerTypeMapping>, AppError>;
    async fn regions(&self) -> Result<Vec<String>, AppError>;
}

/// Fetches both lookup lists concurrently. A failed list is replaced by its
/// fallback without affecting the other one.
pub async fn load_lookups<S: LookupSource>(source: &S) -> Lookups {
    let (power_types, regions) = futures::join!(source.power_types(), source.regions());
    Lookups::from_results(power_types, regions)
}

// STROM CLIENT
/// HTTP client for the power data API.
pub struct StromClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl StromClient {
    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Fetches all power type mappings.
    pub async fn get_power_types(&self) -> Result<Vec<PowerTypeMapping>, AppError> {
        self.fetch("/power-types", None).await
    }

    /// Fetches all known regions.
    pub async fn get_regions(&self) -> Result<Vec<String>, AppError> {
        self.fetch("/regions", None).await
    }

    pub async fn get_generation_data(
        &self,
        filters: Option<&DataFilters>,
    ) -> Result<Vec<GenerationData>, AppError> {
        self.fetch(DataType::Generation.endpoint(), filters).await
    }

    pub async fn get_consumption_data(
        &self,
        filters: Option<&DataFilters>,
    ) -> Result<Vec<ConsumptionData>, AppError> {
        self.fetch(DataType::Consumption.endpoint(), filters).await
    }

    /// Fetches samples for whichever data type is selected.
    pub async fn get_samples(
        &self,
        data_type: DataType,
        filters: Option<&DataFilters>,
    ) -> Result<Vec<PowerSample>, AppError> {
        match data_type {
            DataType::Generation => self.get_generation_data(filters).await,
            DataType::Consumption => self.get_consumption_data(filters).await,
        }
    }

    /// Executes a single GET and decodes the JSON body.
    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        filters: Option<&DataFilters>,
    ) -> Result<T, AppError> {
        let url = self.config.endpoint_url(endpoint, filters);
        tracing::debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            check_status(status, body)?;
            unreachable!("check_status returns Err for non-success status");
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.classify_error(e))?;

        decode_body(&body)
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::Transport(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::Transport(format!("Request error: {error}"))
        } else if error.is_decode() || error.is_body() {
            AppError::Parse(format!("Failed to read body: {error}"))
        } else {
            AppError::Transport(format!("{error}"))
        }
    }
}

impl LookupSource for StromClient {
    async fn power_types(&self) -> Result<Vec<PowerTypeMapping>, AppError> {
        self.get_power_types().await
    }

    async fn regions(&self) -> Result<Vec<String>, AppError> {
        self.get_regions().await
    }
}

/// Turns a non-2xx status into `AppError::HttpStatus` carrying the code.
pub fn check_status(status: reqwest::StatusCode, body: String) -> Result<(), AppError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(AppError::HttpStatus {
            status: status.as_u16(),
            body,
        })
    }
}

/// Decodes a JSON response body into the expected shape.
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    serde_json::from_str(body).map_err(|e| AppError::Parse(e.to_string()))
}
