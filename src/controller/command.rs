use crate::catalog::ItemId;

/// Typed user intent, consumed by the controller in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search { query: String },
    BrowsePage { page: usize },
    SelectItem { id: ItemId },
    Back,
    ToggleSidebar,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionId {
    Search,
    BrowsePage,
    SelectItem,
    Back,
    ToggleSidebar,
    Quit,
    Startup,
    FetchComplete,
    FetchFailed,
    SidebarLoaded,
    SidebarFailed,
    Input,
}

impl ActionId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::BrowsePage => "browse-page",
            Self::SelectItem => "select-item",
            Self::Back => "back",
            Self::ToggleSidebar => "toggle-sidebar",
            Self::Quit => "quit",
            Self::Startup => "startup",
            Self::FetchComplete => "fetch-complete",
            Self::FetchFailed => "fetch-failed",
            Self::SidebarLoaded => "sidebar-loaded",
            Self::SidebarFailed => "sidebar-failed",
            Self::Input => "input",
        }
    }
}

impl Command {
    pub fn action_id(&self) -> ActionId {
        match self {
            Self::Search { .. } => ActionId::Search,
            Self::BrowsePage { .. } => ActionId::BrowsePage,
            Self::SelectItem { .. } => ActionId::SelectItem,
            Self::Back => ActionId::Back,
            Self::ToggleSidebar => ActionId::ToggleSidebar,
            Self::Quit => ActionId::Quit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Noop,
    QuitRequested,
}
