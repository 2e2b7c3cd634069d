//! Playfield Curve Editor Library.
//! Host-unabhängiger Kern des DragPoint-Kurveneditors: Datenmodell,
//! Interaktionslogik und Kurvengeometrie, exportiert für Tests und
//! Editor-Hosts.

pub mod app;
pub mod core;
pub mod host;
pub mod shared;

pub use app::{
    CommandLog, CurveScene, EditorCommand, EditorController, EditorIntent, EditorState,
    FrameState, HitTarget, InteractionPhase, SelectionState, TravellerState,
};
pub use core::{ControlId, ControlPoint, CurveModel, DragPoint, FlipAxis};
pub use host::{
    AutoConfirm, ConfirmPrompt, CurveTransform, DirtyCounter, HostContext, MemoryPointStore,
    PersistenceHook, PointStore, TopDownProjection, ViewProjection,
};
pub use shared::EditorOptions;
