// src/lib.rs

pub mod chat;
pub mod config;
pub mod core;
pub mod error;
pub mod learning;
pub mod logging;
pub mod seed;
pub mod server;

pub use crate::chat::{get_menu, process_chat_input, ChatContext, ChatReply};
pub use crate::core::engine::TranslatorEngine;
pub use crate::core::normalize::normalize;
pub use crate::core::types::{Dialect, Language, Token};
pub use crate::error::TalkieError;
