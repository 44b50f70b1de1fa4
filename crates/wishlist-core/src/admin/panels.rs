//! Admin page sections and burger menu visibility

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Create,
    Edit,
    Delete,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Panels {
    pub create: bool,
    pub edit: bool,
    pub delete: bool,
    pub menu_open: bool,
}

impl Panels {
    pub fn is_visible(&self, panel: Panel) -> bool {
        match panel {
            Panel::Create => self.create,
            Panel::Edit => self.edit,
            Panel::Delete => self.delete,
        }
    }

    /// Menu entry: reveal a panel, hiding the ones it replaces
    pub fn open(&mut self, panel: Panel) {
        self.menu_open = false;
        match panel {
            Panel::Create => {
                self.edit = false;
                self.delete = false;
                self.create = true;
            }
            Panel::Edit => {
                self.create = false;
                self.edit = true;
            }
            Panel::Delete => {
                self.create = false;
                self.edit = false;
                self.delete = true;
            }
        }
    }

    pub fn close(&mut self, panel: Panel) {
        match panel {
            Panel::Create => self.create = false,
            Panel::Edit => self.edit = false,
            Panel::Delete => self.delete = false,
        }
    }

    /// Escape key: hide every visible panel; the menu closes only if one was hidden
    pub fn escape(&mut self) -> bool {
        let closed_any = self.create || self.edit || self.delete;
        self.create = false;
        self.edit = false;
        self.delete = false;
        if closed_any {
            self.menu_open = false;
        }
        closed_any
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
