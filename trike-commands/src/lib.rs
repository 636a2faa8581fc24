pub mod dashboard;
pub mod products;
pub mod sidebar;
pub mod utility;

use trike_core::Context;

use crate::products::ProductTable;
use crate::sidebar::SidebarState;

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::help::META,
    utility::usage::META,
    utility::quit::META,
    products::META_PRODUCTS,
    products::META_PAGE,
    products::META_NEXT,
    products::META_PREV,
    products::META_FIRST,
    products::META_LAST,
    products::META_SIZE,
    products::META_SHOW,
    products::META_DELETE,
    products::META_REFRESH,
    dashboard::META,
    sidebar::META_SIDEBAR,
    sidebar::META_COLLAPSE,
    sidebar::META_OPEN,
    // Add new commands here
];

/// What the console should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and keep reading commands.
    Text(String),
    /// Nothing to print.
    Silent,
    /// Stop the console.
    Quit,
}

impl From<String> for Reply {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// View state owned by one console session.
pub struct AdminSession {
    pub products: ProductTable,
    pub sidebar: SidebarState,
}

impl AdminSession {
    pub fn new(page_size: usize, sidebar: SidebarState) -> Self {
        Self {
            products: ProductTable::new(page_size),
            sidebar,
        }
    }
}

/// Parse and dispatch one console line.
pub async fn handle_line(
    ctx: &Context,
    session: &mut AdminSession,
    line: &str,
) -> anyhow::Result<Reply> {
    let content = line.trim();
    if content.is_empty() {
        return Ok(Reply::Silent);
    }

    let mut command_and_rest = content.splitn(2, char::is_whitespace);
    let cmd = command_and_rest.next().unwrap_or("").to_ascii_lowercase();
    let arg1 = command_and_rest
        .next()
        .map(str::trim)
        .filter(|value| !value.is_empty());

    let reply = match cmd.as_str() {
        "help" => utility::help::run(arg1).into(),
        "usage" => utility::usage::run(arg1).into(),
        "quit" | "exit" => Reply::Quit,

        "products" => products::list(&mut session.products, arg1).into(),
        "page" => products::page(&mut session.products, arg1).into(),
        "next" => products::next(&mut session.products).into(),
        "prev" => products::prev(&mut session.products).into(),
        "first" => products::first(&mut session.products).into(),
        "last" => products::last(&mut session.products).into(),
        "size" => products::size(&mut session.products, arg1).into(),
        "show" => products::show(&session.products, arg1).into(),
        "delete" => products::delete(ctx, &mut session.products, arg1)
            .await?
            .into(),
        "refresh" => products::refresh(ctx, &mut session.products).await?.into(),

        "stats" => dashboard::run(ctx).await?.into(),

        "sidebar" => sidebar::render(&session.sidebar).into(),
        "collapse" => sidebar::toggle_collapsed(&mut session.sidebar).into(),
        "open" => sidebar::open(&mut session.sidebar, arg1).into(),

        _ => format!("Unknown command: `{cmd}`. Type `help` for a list.").into(),
    };

    Ok(reply)
}
