use crate::{COMMANDS, CommandMeta};

pub const META: CommandMeta = CommandMeta {
    name: "usage",
    desc: "Show usage syntax for a specific command.",
    category: "console",
    usage: "usage <command>",
};

/// Show usage for a specific command.
///
/// Error behavior:
/// - missing argument returns this command's usage.
/// - unknown command returns a short not-found message.
pub fn run(arg1: Option<&str>) -> String {
    let Some(raw_name) = arg1 else {
        return format!("Usage: `{}`", META.usage);
    };

    let lookup = raw_name.trim().to_ascii_lowercase();

    match COMMANDS.iter().find(|command| command.name == lookup) {
        Some(command) => format!("Usage: `{}`", command.usage),
        None => format!("Unknown command: `{lookup}`"),
    }
}
