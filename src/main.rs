//! sayline - 将文本文件逐行转为语音文件
//!
//! 用法: sayline <INPUT_FILE> [-o OUTPUT_DIR] [-l LANGUAGE]

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use sayline::application::{ApplicationError, ProcessFile, ProcessFileHandler};
use sayline::config::{load_config_from_path, print_config, AppConfig};
use sayline::infrastructure::adapters::FileArtifactStorage;
use sayline::infrastructure::{connect_client, ElevenLabsClientFactory};

#[derive(Parser, Debug)]
#[command(name = "sayline")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Process a text file to generate TTS for each sentence.")]
struct Args {
    /// Path to the input text file
    #[arg(required_unless_present = "list_voices")]
    input_file: Option<PathBuf>,

    /// Directory to save output files (default: output_tts)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Language for TTS (e.g. 'en', 'es'). Effectiveness depends on voice/model
    #[arg(short, long)]
    language: Option<String>,

    /// Voice ID to use instead of the default voice
    #[arg(long, value_name = "ID")]
    voice: Option<String>,

    /// Load configuration from a specific file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the available voices and exit
    #[arg(long)]
    list_voices: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = load_config_from_path(args.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);
    print_config(&config);

    if args.list_voices {
        list_voices(&config).await;
        return Ok(());
    }

    let Some(input_file) = args.input_file else {
        return Ok(());
    };

    let command = ProcessFile::new(input_file)
        .with_output_dir(args.output_dir.unwrap_or_else(|| config.output.dir.clone()))
        .with_language(args.language.unwrap_or_else(|| config.output.language.clone()))
        .with_voice(args.voice);

    let handler = ProcessFileHandler::new(
        Arc::new(ElevenLabsClientFactory::new(config, None)),
        Arc::new(FileArtifactStorage::new()),
    );

    // 预期内的失败只报告，进程正常退出
    if let Err(e) = handler.handle(command).await {
        report(&e);
    }

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let log_filter = format!("{},sayline={}", config.log.level, config.log.level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .with_target(false)
        .init();
}

async fn list_voices(config: &AppConfig) {
    let mut client = match connect_client(config, None).await {
        Ok(client) => client,
        Err(e) => return report(&e),
    };

    match client.list_voices().await {
        Ok(voices) => {
            println!("Available voices:");
            for voice in voices {
                println!("- {}", voice);
            }
        }
        Err(e) => report(&e),
    }
}

fn report(error: &ApplicationError) {
    match error {
        ApplicationError::Configuration(_) => tracing::error!("{}", error),
        ApplicationError::InputNotFound(_) => tracing::error!("Error: {}", error),
        _ => tracing::error!("An unexpected error occurred during processing: {}", error),
    }
}
