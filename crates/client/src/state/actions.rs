//! State transitions, one variant per user or system event.

use phantasm_domain::{EntityId, World, WorldId};

use super::SubView;
use crate::ports::outbound::AuthUser;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The identity provider reported a new current user (or none).
    AuthChanged(Option<AuthUser>),
    /// Show or clear the login view's failure text.
    AuthNotice(Option<String>),
    /// A world-list fetch was issued; bumps the sequence counter.
    FetchStarted,
    /// A world-list fetch resolved. Stale responses (seq older than the
    /// newest issued fetch) are discarded.
    WorldsLoaded { seq: u64, worlds: Vec<World> },
    /// Open the editor on a world.
    OpenEditor(WorldId),
    /// Open the read-only campaign wiki on a world.
    OpenWiki(WorldId),
    /// Back to the world list.
    BackHome,
    /// Switch the editor sidebar category; resets the inner machine.
    SelectSubView(SubView),
    /// Start creating a record in the current category.
    CreateItem,
    /// Start editing an existing record.
    EditItem(EntityId),
    /// Open the read-only detail of a record.
    ViewItem(EntityId),
    /// Leave the form or detail view, back to the list.
    CancelItem,
    /// Combobox "Create New ..." row: switch category straight into a new
    /// form. Abandons the in-progress form without saving, by design.
    JumpToCreate(SubView),
}
