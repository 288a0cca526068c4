pub mod commands;
pub mod table;
