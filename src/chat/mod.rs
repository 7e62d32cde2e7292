pub mod menu;
pub mod router;

pub use menu::get_menu;
pub use router::{process_chat_input, ChatContext, ChatReply};
