//! The view-state record.

use phantasm_domain::{EditTarget, EntityId, EntityKind, World, WorldId};

use crate::ports::outbound::AuthUser;

/// Which top-level screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewKind {
    #[default]
    Loading,
    Login,
    Home,
    Editor,
    Campaign,
}

/// The active category inside the editor sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubView {
    #[default]
    Dashboard,
    World,
    Characters,
    Locations,
    Maps,
    Organizations,
    Families,
    Races,
}

impl SubView {
    /// The entity kind edited under this sub-view, if it has typed forms.
    pub fn kind(&self) -> Option<EntityKind> {
        match self {
            SubView::Characters => Some(EntityKind::Character),
            SubView::Locations => Some(EntityKind::Location),
            SubView::Organizations => Some(EntityKind::Organization),
            SubView::Families => Some(EntityKind::Family),
            SubView::Races => Some(EntityKind::Race),
            SubView::Dashboard | SubView::World | SubView::Maps => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubView::Dashboard => "Dashboard",
            SubView::World => "World",
            SubView::Characters => "Characters",
            SubView::Locations => "Locations",
            SubView::Maps => "Maps",
            SubView::Organizations => "Organizations",
            SubView::Families => "Families",
            SubView::Races => "Races",
        }
    }

    /// Sidebar order.
    pub const ALL: [SubView; 8] = [
        SubView::Dashboard,
        SubView::World,
        SubView::Characters,
        SubView::Locations,
        SubView::Maps,
        SubView::Organizations,
        SubView::Families,
        SubView::Races,
    ];
}

/// Everything the renderers need; transient, rebuilt on every fetch.
///
/// Within a category at most one of `editing`/`viewing` is active; both
/// reset whenever the sub-view changes. `fetch_seq` is the newest issued
/// world-list request; responses carrying an older number are stale and
/// dropped by the reducer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub current_view: ViewKind,
    pub worlds: Vec<World>,
    pub selected_world_id: Option<WorldId>,
    pub editor_sub_view: SubView,
    pub editing: Option<EditTarget>,
    pub viewing: Option<EntityId>,
    pub user: Option<AuthUser>,
    /// User-facing auth failure text shown on the login view.
    pub auth_notice: Option<String>,
    pub fetch_seq: u64,
}

impl AppState {
    pub fn selected_world(&self) -> Option<&World> {
        let id = self.selected_world_id.as_ref()?;
        self.worlds.iter().find(|w| w.id.as_ref() == Some(id))
    }
}
