//! Custom actions for the menu actor.
//!
//! Handled by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action)
//! on [`MenuItem`](crate::model::MenuItem).

/// Catalog operations beyond plain CRUD.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
    /// Flips the availability flag, as the owner's menu page does.
    ToggleAvailability,
}

/// Results from MenuActions - variants match 1:1 with MenuAction
#[derive(Debug, Clone, PartialEq)]
pub enum MenuActionResult {
    /// The availability after the toggle.
    ToggleAvailability(bool),
}
