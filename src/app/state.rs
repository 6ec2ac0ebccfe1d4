use tui_input::Input;

use crate::render::ScreenModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Results,
    Sidebar,
}

impl Focus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Search => "SEARCH",
            Self::Results => "RESULTS",
            Self::Sidebar => "SIDEBAR",
        }
    }
}

/// Front-end state that never influences what the controller fetches.
#[derive(Debug, Clone)]
pub struct UiState {
    pub focus: Focus,
    pub search_input: Input,
    pub selected_card: usize,
    pub selected_entry: usize,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            focus: Focus::Results,
            search_input: Input::default(),
            selected_card: 0,
            selected_entry: 0,
        }
    }
}

impl UiState {
    /// Keeps selections and focus valid for the model about to be painted.
    pub fn clamp_to(&mut self, screen: &ScreenModel) {
        self.selected_card = clamp_index(self.selected_card, screen.main.cards().len());
        let entries = screen
            .sidebar
            .as_ref()
            .map(|sidebar| sidebar.entries().len())
            .unwrap_or(0);
        self.selected_entry = clamp_index(self.selected_entry, entries);
        if self.focus == Focus::Sidebar && screen.sidebar.is_none() {
            self.focus = Focus::Results;
        }
    }

    pub fn cycle_focus(&mut self, sidebar_shown: bool) {
        self.focus = match self.focus {
            Focus::Search => Focus::Results,
            Focus::Results if sidebar_shown => Focus::Sidebar,
            Focus::Results => Focus::Search,
            Focus::Sidebar => Focus::Search,
        };
    }

    pub fn move_selection(&mut self, delta: isize, screen: &ScreenModel) {
        match self.focus {
            Focus::Results => {
                let len = screen.main.cards().len();
                self.selected_card = step_index(self.selected_card, delta, len);
            }
            Focus::Sidebar => {
                let len = screen
                    .sidebar
                    .as_ref()
                    .map(|sidebar| sidebar.entries().len())
                    .unwrap_or(0);
                self.selected_entry = step_index(self.selected_entry, delta, len);
            }
            Focus::Search => {}
        }
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

fn step_index(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.saturating_add_signed(delta).min(len - 1)
}

#[cfg(test)]
mod tests {
    use crate::catalog::ItemId;
    use crate::render::{CardModel, MainPanelModel, ScreenModel, SidebarModel, Thumbnail};

    use super::{Focus, UiState};

    fn screen(cards: usize, sidebar: bool) -> ScreenModel {
        ScreenModel {
            main: MainPanelModel::Results {
                title: "Search Results".to_string(),
                cards: (0..cards)
                    .map(|i| CardModel {
                        id: ItemId::new(i.to_string()),
                        thumbnail: Thumbnail::Placeholder,
                        title: format!("t{i}"),
                        rank_label: "Rank #?".to_string(),
                    })
                    .collect(),
                pagination: None,
            },
            sidebar: sidebar.then(|| SidebarModel::Loading {
                message: "Loading...".to_string(),
            }),
        }
    }

    #[test]
    fn move_selection_saturates_at_both_ends() {
        let model = screen(3, false);
        let mut ui = UiState::default();
        ui.move_selection(-1, &model);
        assert_eq!(ui.selected_card, 0);
        ui.move_selection(5, &model);
        assert_eq!(ui.selected_card, 2);
    }

    #[test]
    fn clamp_to_drops_sidebar_focus_when_hidden() {
        let mut ui = UiState {
            focus: Focus::Sidebar,
            selected_card: 10,
            ..UiState::default()
        };
        ui.clamp_to(&screen(2, false));
        assert_eq!(ui.focus, Focus::Results);
        assert_eq!(ui.selected_card, 1);
    }

    #[test]
    fn cycle_focus_skips_hidden_sidebar() {
        let mut ui = UiState::default();
        ui.cycle_focus(false);
        assert_eq!(ui.focus, Focus::Search);
        ui.cycle_focus(true);
        assert_eq!(ui.focus, Focus::Results);
        ui.cycle_focus(true);
        assert_eq!(ui.focus, Focus::Sidebar);
    }
}
