//! Command Handlers 实现

mod process_file_handler;

pub use process_file_handler::*;
