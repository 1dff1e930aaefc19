//! Common helper UI components

mod back_button;
mod error_message;
mod loader;

pub use back_button::BackButton;
pub use error_message::ErrorMessage;
pub use loader::Loader;
