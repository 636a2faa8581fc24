use serde::{Deserialize, Serialize};

/// Response envelope wrapping every admin API payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default, alias = "error")]
    pub message: Option<String>,
}

/// A named colour variant of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductColor {
    pub name: String,
    /// CSS colour value, e.g. `#ff6b00`.
    #[serde(default)]
    pub value: String,
}

/// Product record as served by the admin API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductData {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub colors: Option<Vec<ProductColor>>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub featured: bool,
    /// Rider profiles the product is marketed to.
    #[serde(default)]
    pub ideal_for: Option<Vec<String>>,
    #[serde(default)]
    pub specifications: Option<ProductSpecifications>,
}

impl ProductData {
    /// Whole-percent discount against the original price.
    ///
    /// Zero unless the original price is above the current price.
    pub fn discount_percent(&self) -> u32 {
        match (self.price, self.original_price) {
            (Some(price), Some(original)) if original > price => {
                ((original - price) / original * 100.0).round() as u32
            }
            _ => 0,
        }
    }
}

/// Technical sheet of a product. Every entry is free text and may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductSpecifications {
    pub dimensions: Option<String>,
    pub battery_type: Option<String>,
    pub motor_power: Option<String>,
    pub main_features: Option<String>,
    pub front_rear_suspension: Option<String>,
    pub front_tires: Option<String>,
    pub rear_tires: Option<String>,
}

impl ProductSpecifications {
    /// Labelled entries that carry a non-empty value, in display order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("Dimensions", &self.dimensions),
            ("Battery Type", &self.battery_type),
            ("Motor Power", &self.motor_power),
            ("Main Features", &self.main_features),
            ("Suspension", &self.front_rear_suspension),
            ("Front Tires", &self.front_tires),
            ("Rear Tires", &self.rear_tires),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .as_deref()
                .filter(|value| !value.is_empty())
                .map(|value| (label, value))
        })
        .collect()
    }
}

/// Conversation counters from the chat support backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChatStats {
    pub total_conversations: u64,
    pub active_conversations: u64,
    pub waiting_conversations: u64,
    /// Active plus waiting; zero once every chat is closed.
    pub open_conversations: u64,
}

/// An order listed on the dashboard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecentOrder {
    pub id: u64,
    #[serde(default)]
    pub order_number: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
}

/// Store-wide totals from the admin dashboard endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardData {
    pub total_revenue: f64,
    pub total_orders: u64,
    pub total_customers: u64,
    pub total_products: u64,
    pub recent_orders: Vec<RecentOrder>,
}

/// Dashboard totals combined with chat counters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub dashboard: DashboardData,
    pub chat: ChatStats,
}

impl DashboardStats {
    /// Combine both halves, zeroing whichever request failed.
    pub fn combine(dashboard: Option<DashboardData>, chat: Option<ChatStats>) -> Self {
        Self {
            dashboard: dashboard.unwrap_or_default(),
            chat: chat.unwrap_or_default(),
        }
    }
}
