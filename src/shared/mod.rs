//! Layer-übergreifende Bausteine: Optionen und Kurvengeometrie.

pub mod options;
pub mod spline_geometry;

pub use options::EditorOptions;
