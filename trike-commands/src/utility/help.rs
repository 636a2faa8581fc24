use trike_utils::pagination::{page_window, total_pages};

use crate::{COMMANDS, CommandMeta};

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "List available commands.",
    category: "console",
    usage: "help [page|category]",
};

const HELP_COMMANDS_PER_PAGE: usize = 12;

/// Render the command catalog, optionally filtered by category or page.
pub fn run(arg1: Option<&str>) -> String {
    let parsed_page = arg1.and_then(|raw| raw.parse::<usize>().ok().filter(|page| *page >= 1));
    let category = match (arg1, parsed_page) {
        (Some(raw), None) => Some(raw.to_ascii_lowercase()),
        _ => None,
    };

    let mut categories: Vec<&str> = COMMANDS.iter().map(|c| c.category).collect();
    categories.sort_unstable();
    categories.dedup();

    if let Some(wanted) = category.as_deref()
        && !categories.contains(&wanted)
    {
        return format!(
            "Unknown category `{wanted}`. Available: {}.",
            categories.join(", ")
        );
    }

    let commands = sorted_commands(category.as_deref());
    let requested_page = parsed_page.unwrap_or(1);
    let total = total_pages(commands.len(), HELP_COMMANDS_PER_PAGE);

    if requested_page > total {
        return format!(
            "Page {requested_page} does not exist. Available pages: 1-{total}."
        );
    }

    let window = page_window(commands.len(), HELP_COMMANDS_PER_PAGE, requested_page);
    let mut out = grouped_help_description(&commands[window]);

    if total > 1 {
        out.push_str(&format!("\n\nPage {requested_page}/{total}"));
    }

    out
}

fn sorted_commands(category: Option<&str>) -> Vec<&'static CommandMeta> {
    let mut filtered: Vec<&'static CommandMeta> = COMMANDS
        .iter()
        .filter(|cmd| match category {
            Some(wanted) => cmd.category == wanted,
            None => true,
        })
        .collect();

    filtered.sort_unstable_by(|left, right| {
        left.category
            .cmp(right.category)
            .then_with(|| left.name.cmp(right.name))
    });

    filtered
}

fn grouped_help_description(commands: &[&CommandMeta]) -> String {
    let mut out = String::new();
    let mut current_category: Option<&str> = None;

    for command in commands {
        if current_category != Some(command.category) {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("{}\n", display_category(command.category)));
            current_category = Some(command.category);
        }

        out.push_str(&format!("  {:<22} {}\n", command.usage, command.desc));
    }

    if out.is_empty() {
        out.push_str("No commands available.");
    }

    out.trim_end().to_owned()
}

fn display_category(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
