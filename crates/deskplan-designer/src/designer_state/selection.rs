use super::{AppMode, DesignerState};

impl DesignerState {
    /// Selected ids in selection order.
    pub fn selected_ids(&self) -> &[String] {
        self.selection.ids()
    }

    /// Replaces the selection.
    pub fn set_selection<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection.select_many(ids);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Switches between admin and booking mode and clears the selection.
    pub fn toggle_mode(&mut self) -> AppMode {
        self.mode = match self.mode {
            AppMode::Admin => AppMode::Booking,
            AppMode::Booking => AppMode::Admin,
        };
        self.selection.clear();
        tracing::debug!("Mode switched to {:?}", self.mode);
        self.mode
    }

    pub fn is_admin(&self) -> bool {
        self.mode == AppMode::Admin
    }
}
