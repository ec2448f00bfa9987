pub mod convert;
pub mod inspect;
pub mod interactive;

pub use convert::{ConvertCommands, handle_convert_command};
pub use inspect::{InspectCommands, handle_inspect_command};
pub use interactive::{InteractiveCommands, handle_interactive_command};
