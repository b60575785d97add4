pub mod callback_handler;
pub mod command_handler;
pub mod gate;
pub mod message_handler;

pub use callback_handler::callback_handler;
pub use command_handler::{command_handler, Command};
pub use message_handler::message_handler;
