use gloo::net::http::{Request, Response};
use serde::de::{DeserializeOwned, IgnoredAny};
use shared::{
    ApiEnvelope, Category, CategoryBreakdown, Filter, PaymentMethodBreakdown, Summary, TopExpenses,
    Transaction, TransactionFields, TransactionId, TrendPoint,
};
use thiserror::Error;

use super::logging::Logger;

const COMPONENT: &str = "api";

/// Why an API operation failed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// The body was not the expected envelope/payload
    #[error("malformed response: {0}")]
    Malformed(String),
    /// Non-2xx status without a readable envelope
    #[error("request failed with status {status}")]
    Http { status: u16 },
    /// `success: false` with the server's own message
    #[error("{0}")]
    Server(String),
}

impl ApiError {
    /// Text shown to the user in a toast
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Could not reach the server".to_string(),
            ApiError::Malformed(_) | ApiError::Http { .. } => {
                "Unexpected response from the server".to_string()
            }
            ApiError::Server(message) => message.clone(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Acknowledgement of an operation that returns no payload
#[derive(Debug, Clone, PartialEq)]
pub struct Ack {
    pub message: Option<String>,
}

fn decode_raw<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<ApiEnvelope<T>> {
    let envelope: ApiEnvelope<T> = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) if (200..300).contains(&status) => return Err(ApiError::Malformed(e.to_string())),
        Err(_) => return Err(ApiError::Http { status }),
    };

    if !envelope.success {
        let message = envelope
            .error
            .or(envelope.message)
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        return Err(ApiError::Server(message));
    }

    Ok(envelope)
}

/// Decode an envelope whose `data` field carries the payload
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<T> {
    decode_raw::<T>(status, body)?
        .data
        .ok_or_else(|| ApiError::Malformed("missing data field".to_string()))
}

/// Decode an envelope where only `success` and `message` matter
pub fn decode_ack(status: u16, body: &str) -> ApiResult<Ack> {
    let envelope = decode_raw::<IgnoredAny>(status, body)?;
    Ok(Ack { message: envelope.message })
}

/// Endpoint paths relative to the API base
mod paths {
    use shared::{Filter, TransactionId};

    pub const CATEGORIES: &str = "/categorias";
    pub const SEED_CATEGORIES: &str = "/categorias/seed";
    pub const TRANSACTIONS: &str = "/gastos";

    pub fn transactions_for(filter: Filter) -> String {
        format!("{}?{}", TRANSACTIONS, filter.query())
    }

    pub fn transaction(id: TransactionId) -> String {
        format!("{}/{}", TRANSACTIONS, id)
    }

    pub fn summary(filter: Filter) -> String {
        format!("/relatorios/resumo-mensal?{}", filter.query())
    }

    pub fn category_breakdown(filter: Filter) -> String {
        format!("/relatorios/por-categoria?{}", filter.query())
    }

    pub fn trend(months_back: u32) -> String {
        format!("/relatorios/evolucao?meses={}", months_back)
    }

    pub fn top_expenses(filter: Filter, limit: u32) -> String {
        format!("/relatorios/maiores-gastos?{}&limite={}", filter.query(), limit)
    }

    pub fn payment_methods(filter: Filter) -> String {
        format!("/relatorios/por-forma-pagamento?{}", filter.query())
    }
}

/// API client for communicating with the finance backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Client against the default `/api` base path
    pub fn new() -> Self {
        Self::with_base_url("/api".to_string())
    }

    /// Client against a custom base URL; a trailing slash is dropped
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL of an endpoint path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Get every category
    pub async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        self.get(&self.url(paths::CATEGORIES)).await
    }

    /// Ask the backend to create its default categories
    pub async fn seed_default_categories(&self) -> ApiResult<Ack> {
        let url = self.url(paths::SEED_CATEGORIES);
        Logger::debug_with_component(COMPONENT, &format!("POST {}", url));
        let response = Request::post(&url).send().await;
        let (status, body) = read(response).await?;
        decode_ack(status, &body)
    }

    /// Get the transactions of a period
    pub async fn list_transactions(&self, filter: Filter) -> ApiResult<Vec<Transaction>> {
        self.get(&self.url(&paths::transactions_for(filter))).await
    }

    /// Create a transaction and return it as stored
    pub async fn create_transaction(&self, fields: &TransactionFields) -> ApiResult<Transaction> {
        let url = self.url(paths::TRANSACTIONS);
        Logger::debug_with_component(COMPONENT, &format!("POST {}", url));
        let request = Request::post(&url)
            .json(fields)
            .map_err(|e| ApiError::Malformed(format!("Failed to serialize request: {}", e)))?;
        let (status, body) = read(request.send().await).await?;
        decode_envelope(status, &body)
    }

    /// Replace the fields of an existing transaction
    pub async fn update_transaction(
        &self,
        id: TransactionId,
        fields: &TransactionFields,
    ) -> ApiResult<Transaction> {
        let url = self.url(&paths::transaction(id));
        Logger::debug_with_component(COMPONENT, &format!("PUT {}", url));
        let request = Request::put(&url)
            .json(fields)
            .map_err(|e| ApiError::Malformed(format!("Failed to serialize request: {}", e)))?;
        let (status, body) = read(request.send().await).await?;
        decode_envelope(status, &body)
    }

    /// Delete a transaction
    pub async fn delete_transaction(&self, id: TransactionId) -> ApiResult<Ack> {
        let url = self.url(&paths::transaction(id));
        Logger::debug_with_component(COMPONENT, &format!("DELETE {}", url));
        let (status, body) = read(Request::delete(&url).send().await).await?;
        decode_ack(status, &body)
    }

    /// Get the income/expense totals of a period
    pub async fn get_summary(&self, filter: Filter) -> ApiResult<Summary> {
        self.get(&self.url(&paths::summary(filter))).await
    }

    /// Get the expense totals per category for a period
    pub async fn get_category_breakdown(&self, filter: Filter) -> ApiResult<CategoryBreakdown> {
        self.get(&self.url(&paths::category_breakdown(filter))).await
    }

    /// Get the trailing monthly income/expense series
    pub async fn get_trend(&self, months_back: u32) -> ApiResult<Vec<TrendPoint>> {
        self.get(&self.url(&paths::trend(months_back))).await
    }

    /// Get the largest expenses of a period
    pub async fn get_top_expenses(&self, filter: Filter, limit: u32) -> ApiResult<TopExpenses> {
        self.get(&self.url(&paths::top_expenses(filter, limit))).await
    }

    /// Get the expense totals per payment method for a period
    pub async fn get_payment_method_breakdown(
        &self,
        filter: Filter,
    ) -> ApiResult<PaymentMethodBreakdown> {
        self.get(&self.url(&paths::payment_methods(filter))).await
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        Logger::debug_with_component(COMPONENT, &format!("GET {}", url));
        let (status, body) = read(Request::get(url).send().await).await?;
        decode_envelope(status, &body)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn read(response: Result<Response, gloo::net::Error>) -> ApiResult<(u16, String)> {
    let response = response.map_err(|e| {
        Logger::warn_with_component(COMPONENT, &format!("Network error: {}", e));
        ApiError::Network(e.to_string())
    })?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Malformed(format!("Failed to read response body: {}", e)))?;
    Ok((status, body))
}
