use crate::core::{ControlId, FlipAxis};
use crate::shared::EditorOptions;
use glam::{Vec2, Vec3};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum EditorCommand {
    /// Layout-Pass ausführen (Positionen, Hit-Targets, Pivot, Hover)
    RunLayoutPass { cursor: Option<Vec2> },
    /// Punkt selektieren (`additive` = Membership togglen statt ersetzen)
    SelectPoint { id: ControlId, additive: bool },
    /// Selektion aufheben
    ClearSelection,
    /// Primärtaste losgelassen: Selecting-Phase beenden
    ReleasePointer,
    /// Gruppen-Drag beginnen
    BeginGroupDrag,
    /// Gruppen-Handle auf neue Weltposition ziehen
    DragGroupHandle { world_pos: Vec3 },
    /// Gruppen-Drag abschließen (Persistenz-Benachrichtigung)
    EndGroupDrag,
    /// Traveller-Zustand aktualisieren
    UpdateTraveller {
        world_pos: Vec3,
        segment_index: Option<usize>,
        visible: bool,
    },
    /// Punkt an der Traveller-Position einfügen
    AddPointAtTraveller,
    /// Punkt entfernen (ggf. nach Rückfrage bei gesperrten Punkten)
    RemovePoint { id: ControlId },
    /// Alle Punkte auf einer Achse um den Frame-Pivot spiegeln
    FlipPoints { axis: FlipAxis },
    /// Lock-Flag auf allen Punkten setzen
    SetAllLocked { locked: bool },
    /// ControlPoints mit der Host-Sequenz re-synchronisieren
    RemapControlPoints,
    /// Optionen übernehmen
    ApplyOptions { options: EditorOptions },
}
