use crate::core::{ControlId, FlipAxis};
use crate::shared::EditorOptions;
use glam::{Vec2, Vec3};

/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Der Host übersetzt seine Viewport-Events (Layout, Maus, Menü) in
/// Intents; das Mapping auf mutierende Commands übernimmt der Kern.
#[derive(Debug, Clone)]
pub enum EditorIntent {
    /// Layout-Pass des UI-Frames: Positionen/Hit-Targets neu berechnen.
    /// `cursor` ist die Screenposition des Zeigers für Hover-Erkennung.
    LayoutRequested { cursor: Option<Vec2> },
    /// Primärtaste gedrückt (`toggle` = Modifier für additive Selektion)
    PointerPressed { screen_pos: Vec2, toggle: bool },
    /// Primärtaste losgelassen
    PointerReleased,
    /// Gruppen-Handle auf neue Weltposition gezogen
    GroupHandleDragged { world_pos: Vec3 },
    /// Gruppen-Handle losgelassen (Drag-Ende)
    GroupHandleReleased,
    /// Render-Adapter hat den Traveller bewegt
    TravellerMoved {
        world_pos: Vec3,
        segment_index: usize,
        visible: bool,
    },
    /// Traveller ausblenden (z.B. Cursor hat den Viewport verlassen)
    TravellerHidden,
    /// Neuen Punkt an der Traveller-Position einfügen
    AddPointAtTravellerRequested,
    /// Punkt entfernen (Kontextmenü/Shortcut)
    RemovePointRequested { id: ControlId },
    /// Alle Punkte auf einer Achse spiegeln
    FlipRequested { axis: FlipAxis },
    /// Lock-Flag auf allen Punkten setzen
    SetAllLockedRequested { locked: bool },
    /// Selektion aufheben
    ClearSelectionRequested,
    /// ControlPoints mit der Host-Sequenz re-synchronisieren
    /// (nach externem Edit oder Host-Undo)
    SyncRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
}
