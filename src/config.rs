// File: src/config.rs
use crate::core::types::Language;
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Settings shared by the server and the console.
/// Every flag can also come from the environment (or a `.env` file).
#[derive(Parser, Debug, Clone)]
#[command(name = "talkie", about = "Phrase-lookup translation chatbot")]
pub struct TalkieConfig {
    /// Address the HTTP server binds to
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port the HTTP server listens on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// JSON file to seed the dictionary from instead of the built-in data
    #[arg(long, env = "TALKIE_SEED")]
    pub seed: Option<PathBuf>,

    /// Language menus and prompts are shown in (console only)
    #[arg(long, env = "TALKIE_NATIVE_LANGUAGE", default_value = "english")]
    pub native_language: String,

    /// Language phrases are translated into (console only)
    #[arg(long, env = "TALKIE_LANGUAGE", default_value = "english")]
    pub language: Language,
}

impl TalkieConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn native(&self) -> Language {
        Language::from_native(&self.native_language)
    }
}
