//! Navigation events for the menu preview.
//!
//! The preview shows three rows around the highlighted item; these events
//! move that highlight. [`crate::project::Project::process_inputs`] drains a
//! provider until it reports no pending event.

/// One step of the preview highlight. Both directions wrap around the menu.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    /// Highlight the item above, or the last item from the first.
    Prev,
    /// Highlight the item below, or the first item from the last.
    Next,
}

/// Source of preview navigation, such as buttons, an encoder or a script.
pub trait InputProvider {
    type Error;

    /// Returns the next pending step, or `None` once the source is idle.
    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
