use clap::Parser;
use talkie_core::config::TalkieConfig;
use talkie_core::{logging, server, TalkieError, TranslatorEngine};

#[tokio::main]
async fn main() -> Result<(), TalkieError> {
    // Load .env if present
    let _ = dotenvy::dotenv();
    logging::init("talkie_core=info,talkie_server=info");

    let config = TalkieConfig::parse();
    let engine = TranslatorEngine::from_seed_file_or_builtin(config.seed.as_deref())?;
    server::serve(&config, engine).await
}
