use tracing::warn;
use trike_api::{DashboardStats, RecentOrder};
use trike_core::Context;
use trike_utils::format::{format_currency, group_thousands};

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "stats",
    desc: "Show dashboard totals and recent orders.",
    category: "dashboard",
    usage: "stats",
};

/// Fetch dashboard totals and chat counters, then render the stat cards.
///
/// Each half falls back to zeros when its request fails.
pub async fn run(ctx: &Context) -> anyhow::Result<String> {
    if !ctx.api.has_token() {
        return Ok("Dashboard needs TRIKE_API_TOKEN to be set.".to_owned());
    }

    let (dashboard, chat) = tokio::join!(ctx.api.dashboard(), ctx.api.chat_stats());

    let dashboard = dashboard
        .inspect_err(|source| warn!(?source, "dashboard stats unavailable"))
        .ok();
    let chat = chat
        .inspect_err(|source| warn!(?source, "chat stats unavailable"))
        .ok();

    Ok(render(&DashboardStats::combine(dashboard, chat)))
}

/// Render stat cards followed by the recent orders list.
pub fn render(stats: &DashboardStats) -> String {
    let data = &stats.dashboard;
    let chat = &stats.chat;

    let cards = [
        ("Total Revenue", format_currency(data.total_revenue)),
        ("Orders", group_thousands(data.total_orders)),
        ("Customers", group_thousands(data.total_customers)),
        ("Products", group_thousands(data.total_products)),
        (
            "Conversations",
            format!(
                "{} ({} active, {} waiting)",
                group_thousands(chat.total_conversations),
                chat.active_conversations,
                chat.waiting_conversations
            ),
        ),
    ];

    let mut out = String::from("Dashboard\n");
    for (title, value) in cards {
        out.push_str(&format!("\n  {title:<14} {value}"));
    }

    out.push_str("\n\nRecent Orders");
    if data.recent_orders.is_empty() {
        out.push_str("\n  No recent orders.");
    }
    for order in &data.recent_orders {
        out.push_str(&format!("\n  {}", order_line(order)));
    }

    out
}

fn order_line(order: &RecentOrder) -> String {
    let number = if order.order_number.is_empty() {
        format!("#{}", order.id)
    } else {
        order.order_number.clone()
    };

    format!(
        "{number:<12} {:<20} {:>14}  {:<10} {}",
        order.customer_name,
        format_currency(order.total),
        status_label(&order.status),
        order.created_at
    )
    .trim_end()
    .to_owned()
}

/// Normalised status label; unknown statuses pass through unchanged.
fn status_label(status: &str) -> &str {
    match status.to_ascii_lowercase().as_str() {
        "delivered" => "Delivered",
        "shipped" => "Shipped",
        "processing" => "Processing",
        "pending" => "Pending",
        "cancelled" => "Cancelled",
        _ => status,
    }
}

#[cfg(test)]
mod tests {
    use trike_api::{ChatStats, DashboardData};

    use super::*;

    #[test]
    fn renders_cards_and_orders() {
        let stats = DashboardStats::combine(
            Some(DashboardData {
                total_revenue: 1_234_567.5,
                total_orders: 1200,
                total_customers: 87,
                total_products: 23,
                recent_orders: vec![RecentOrder {
                    id: 4,
                    order_number: "ET-0004".to_owned(),
                    customer_name: "Ana Cruz".to_owned(),
                    total: 85000.0,
                    status: "SHIPPED".to_owned(),
                    created_at: String::new(),
                }],
            }),
            Some(ChatStats {
                total_conversations: 9,
                active_conversations: 2,
                waiting_conversations: 1,
                open_conversations: 3,
            }),
        );

        let out = render(&stats);

        assert!(out.contains("Total Revenue  ₱1,234,567.50"));
        assert!(out.contains("Orders         1,200"));
        assert!(out.contains("9 (2 active, 1 waiting)"));
        assert!(out.contains("ET-0004"));
        assert!(out.contains("Shipped"));
    }

    #[test]
    fn failed_halves_render_as_zero() {
        let out = render(&DashboardStats::combine(None, None));

        assert!(out.contains("Total Revenue  ₱0.00"));
        assert!(out.contains("No recent orders."));
    }

    #[test]
    fn unknown_status_passes_through() {
        assert_eq!(status_label("refunded"), "refunded");
        assert_eq!(status_label("Pending"), "Pending");
    }
}
