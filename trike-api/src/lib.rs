use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

mod error;
/// Wire records served by the admin API.
pub mod models;

pub use error::ApiError;
pub use models::{
    ApiEnvelope, ChatStats, DashboardData, DashboardStats, ProductColor, ProductData,
    ProductSpecifications, RecentOrder,
};

const PRODUCTS_PATH: &str = "api/products";
const DASHBOARD_PATH: &str = "api/admin/dashboard";
const CHAT_PATH: &str = "api/chatbot/chat";

/// Shared admin API handle passed across crates.
///
/// Cheap to clone; the underlying `reqwest::Client` pools connections.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    /// Create an API handle from an existing HTTP client.
    pub fn new(http: Client, base_url: Url, token: Option<String>) -> Self {
        Self {
            http,
            base_url,
            token: token.filter(|token| !token.is_empty()),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Fetch the full product list.
    pub async fn products(&self) -> Result<Vec<ProductData>, ApiError> {
        let request = self.request(Method::GET, PRODUCTS_PATH)?;
        self.send(request, "products").await
    }

    /// Delete a product by id.
    pub async fn delete_product(&self, id: u64) -> Result<(), ApiError> {
        let request = self.authorized(Method::DELETE, &format!("{PRODUCTS_PATH}/{id}"))?;
        let envelope: ApiEnvelope<serde_json::Value> =
            self.send_envelope(request, "delete product").await?;

        if envelope.success {
            Ok(())
        } else {
            Err(rejected("delete product", envelope.message))
        }
    }

    /// Fetch store-wide dashboard totals.
    pub async fn dashboard(&self) -> Result<DashboardData, ApiError> {
        let request = self.authorized(Method::GET, DASHBOARD_PATH)?;
        self.send(request, "dashboard").await
    }

    /// Fetch chat support counters.
    pub async fn chat_stats(&self) -> Result<ChatStats, ApiError> {
        let request = self
            .authorized(Method::GET, CHAT_PATH)?
            .query(&[("action", "admin_stats")]);
        self.send(request, "chat stats").await
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = endpoint_url(&self.base_url, path)?;
        let builder = self.http.request(method, url);

        Ok(match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    fn authorized(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        if self.token.is_none() {
            return Err(ApiError::MissingToken);
        }

        self.request(method, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        endpoint: &'static str,
    ) -> Result<T, ApiError> {
        let envelope = self.send_envelope(request, endpoint).await?;

        if !envelope.success {
            return Err(rejected(endpoint, envelope.message));
        }

        envelope.data.ok_or(ApiError::MissingData { endpoint })
    }

    async fn send_envelope<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        endpoint: &'static str,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ApiError::Status { endpoint, status });
        }

        Ok(response.json::<ApiEnvelope<T>>().await?)
    }
}

/// Join an API path onto the base URL, keeping any base path prefix.
pub fn endpoint_url(base_url: &Url, path: &str) -> Result<Url, ApiError> {
    let mut base = base_url.clone();
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }

    base.join(path).map_err(|_| ApiError::Rejected {
        endpoint: "url",
        message: format!("cannot join `{path}` onto {base_url}"),
    })
}

fn rejected(endpoint: &'static str, message: Option<String>) -> ApiError {
    ApiError::Rejected {
        endpoint,
        message: message.unwrap_or_else(|| "unknown error".to_owned()),
    }
}
