//! Player Adapter - 本地音频输出实现

mod command_player;

pub use command_player::{suffix_for_output_format, CommandAudioPlayer};
