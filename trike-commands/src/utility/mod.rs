pub mod help;
pub mod quit;
pub mod usage;
