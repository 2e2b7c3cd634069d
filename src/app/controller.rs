//! Editor-Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{EditorCommand, EditorIntent, EditorState};
use crate::host::HostContext;

/// Orchestriert Host-Events und Handler auf dem EditorState.
///
/// Strikt single-threaded und synchron: ein Intent pro Host-Event, die
/// resultierenden Commands laufen atomar aus Sicht des Aufrufers.
#[derive(Default)]
pub struct EditorController;

impl EditorController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut EditorState,
        host: &mut HostContext<'_>,
        intent: EditorIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, host, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem EditorState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut EditorState,
        host: &mut HostContext<'_>,
        command: EditorCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Frame ===
            EditorCommand::RunLayoutPass { cursor } => {
                handlers::frame::run_layout_pass(state, host, cursor)
            }

            // === Selektion ===
            EditorCommand::SelectPoint { id, additive } => {
                handlers::selection::select_point(state, id, additive)
            }
            EditorCommand::ClearSelection => handlers::selection::clear(state),
            EditorCommand::ReleasePointer => handlers::selection::release_pointer(state),

            // === Editing ===
            EditorCommand::BeginGroupDrag => handlers::editing::begin_group_drag(state),
            EditorCommand::DragGroupHandle { world_pos } => {
                handlers::editing::drag_group_handle(state, host, world_pos)
            }
            EditorCommand::EndGroupDrag => handlers::editing::end_group_drag(state, host),
            EditorCommand::UpdateTraveller {
                world_pos,
                segment_index,
                visible,
            } => handlers::editing::update_traveller(state, world_pos, segment_index, visible),
            EditorCommand::AddPointAtTraveller => {
                handlers::editing::add_point_at_traveller(state, host)
            }
            EditorCommand::RemovePoint { id } => handlers::editing::remove_point(state, host, id),
            EditorCommand::FlipPoints { axis } => handlers::editing::flip_points(state, host, axis),
            EditorCommand::SetAllLocked { locked } => {
                handlers::editing::set_all_locked(state, host, locked)
            }
            EditorCommand::RemapControlPoints => handlers::editing::remap(state, host),
            EditorCommand::ApplyOptions { options } => {
                handlers::editing::apply_options(state, options)
            }
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen EditorState.
    pub fn build_curve_scene(
        &self,
        state: &EditorState,
        view: &dyn crate::host::ViewProjection,
    ) -> render_scene::CurveScene {
        render_scene::build(state, view)
    }
}
