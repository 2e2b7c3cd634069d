//! Editor-Intent und Editor-Command Events.

mod command;
mod intent;

pub use command::EditorCommand;
pub use intent::EditorIntent;
