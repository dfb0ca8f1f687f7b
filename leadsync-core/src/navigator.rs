use shared_types::Screen;

/// Tracks which screen is visible and which lead, if any, is selected.
#[derive(Debug, Clone)]
pub struct Navigator {
    screen: Screen,
    selected_lead_id: Option<String>,
}

impl Navigator {
    pub fn new() -> Self {
        Navigator {
            screen: Screen::Listing,
            selected_lead_id: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selected_lead_id(&self) -> Option<&str> {
        self.selected_lead_id.as_deref()
    }

    /// Selects a lead and moves to the details screen.
    pub fn view_lead(&mut self, lead_id: String) {
        self.selected_lead_id = Some(lead_id);
        self.screen = Screen::Details;
    }

    /// Returns to the listing and drops the selection.
    pub fn back(&mut self) {
        self.selected_lead_id = None;
        self.screen = Screen::Listing;
    }

    /// Switches screens directly. Details is only reachable with a
    /// selection, so without one the request lands on the listing.
    pub fn navigate(&mut self, screen: Screen) {
        if screen == Screen::Details && self.selected_lead_id.is_none() {
            self.screen = Screen::Listing;
        } else {
            self.screen = screen;
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Navigator::new()
    }
}
