use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};

use trike_api::ApiClient;
use trike_commands::{
    AdminSession, Reply, handle_line,
    products::refresh,
    sidebar::{ChatPoller, SidebarState},
};
use trike_core::{Config, Context};

const PROMPT: &[u8] = b"trike> ";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Load the .env file
    dotenvy::dotenv().ok();

    let config = Arc::new(Config::load()?);

    // One shared HTTP client for every API call
    let http = reqwest::Client::builder()
        .user_agent(concat!("trike-admin/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let api = Arc::new(ApiClient::new(
        http,
        config.api_url.clone(),
        config.api_token.clone(),
    ));
    let ctx = Context::new(api, config);

    let mut session = AdminSession::new(
        ctx.config.page_size,
        SidebarState::new("/admin/products"),
    );
    let poller = ChatPoller::start(
        Arc::clone(&ctx.api),
        ctx.config.chat_poll_interval,
        session.sidebar.open_chats_handle(),
    );

    info!(api = %ctx.api.base_url(), "loading products");
    let mut stdout = tokio::io::stdout();
    let first_page = refresh(&ctx, &mut session.products).await?;
    stdout.write_all(format!("{first_page}\n").as_bytes()).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        stdout.write_all(PROMPT).await?;
        stdout.flush().await?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };

        // End of input
        let Some(line) = line else {
            break;
        };

        let reply = match handle_line(&ctx, &mut session, &line).await {
            Ok(reply) => reply,
            Err(source) => {
                error!(?source, command = line.trim(), "command failed");
                Reply::Text(format!("Command failed: {source}"))
            }
        };

        match reply {
            Reply::Text(text) => stdout.write_all(format!("{text}\n").as_bytes()).await?,
            Reply::Silent => {}
            Reply::Quit => break,
        }
    }

    poller.shutdown().await;
    info!("admin console closed");

    Ok(()) // Return Success, shutdown cleanly
}
