pub mod chatbot;
pub mod draft;
pub mod message;
pub mod session;

pub use chatbot::{Chatbot, FlowError, Phase};
