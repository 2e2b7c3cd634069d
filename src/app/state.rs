/// Editor-State und Teilzustände
///
/// Dieses Modul verwaltet den Zustand einer Editor-Session (Modell,
/// Selektion, Frame-Daten, Traveller).
mod editor_state;
mod frame;
mod selection;
mod traveller;

pub use editor_state::EditorState;
pub use frame::{FrameState, HitTarget, InteractionPhase};
pub use selection::SelectionState;
pub use traveller::TravellerState;
