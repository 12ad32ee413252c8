//! Public API
//!
//! - wasm      - `LogoWidget`, the handle the content script holds
//! - protocol  - JSON messages from the popup and background page

pub mod protocol;
pub mod wasm;

pub use protocol::{handle_message, Message, ProtocolError, Request, Response};
pub use wasm::LogoWidget;
