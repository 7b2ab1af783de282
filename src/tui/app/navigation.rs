//! Selection movement within the link table.

use super::App;

impl App {
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
        self.table_state.select(Some(self.selected_index));
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index < self.store.len().saturating_sub(1) {
            self.selected_index += 1;
        }
        self.table_state.select(Some(self.selected_index));
    }

    pub fn jump_to_top(&mut self) {
        self.selected_index = 0;
        self.table_state.select(Some(0));
    }

    pub fn jump_to_bottom(&mut self) {
        self.selected_index = self.store.len().saturating_sub(1);
        self.table_state.select(Some(self.selected_index));
    }

    /// Keep the selection inside the list after it shrank or reloaded.
    pub fn clamp_selection(&mut self) {
        let max = self.store.len().saturating_sub(1);
        if self.selected_index > max {
            self.selected_index = max;
        }
        self.table_state.select(Some(self.selected_index));
    }
}
