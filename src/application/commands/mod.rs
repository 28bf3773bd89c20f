//! 应用层 - 命令
//!
//! 批处理命令及其处理器

mod process_file_commands;

pub mod handlers;

pub use process_file_commands::*;
