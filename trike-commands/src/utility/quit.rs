use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "quit",
    desc: "Stop chat polling and leave the console.",
    category: "console",
    usage: "quit",
};
