//! Feature-Handler: führen Commands auf dem EditorState aus.

pub mod editing;
pub mod frame;
pub mod selection;
