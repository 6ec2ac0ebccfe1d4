use std::sync::Arc;

use crate::catalog::{CatalogSource, open_default_source};
use crate::config::Config;
use crate::controller::{BrowseController, CommandDispatchResult, Command, FetchCompletion, dispatch};
use crate::error::AppResult;
use crate::render::{ScreenModel, render_screen};

use super::state::UiState;

pub struct App {
    pub controller: BrowseController,
    pub ui: UiState,
    pub config: Config,
    pub(crate) source: Arc<dyn CatalogSource>,
    /// Search submitted from the command line; held back until the startup
    /// page settles so it is not overwritten by it.
    pub(crate) pending_query: Option<String>,
}

impl App {
    pub fn new(config: Config) -> AppResult<Self> {
        let source = open_default_source(&config.api)?;
        Ok(Self::with_source(config, source))
    }

    pub fn with_source(config: Config, source: Arc<dyn CatalogSource>) -> Self {
        Self {
            controller: BrowseController::new(config.ui.sidebar_visible),
            ui: UiState::default(),
            config,
            source,
            pending_query: None,
        }
    }

    pub fn with_initial_query(mut self, query: Option<String>) -> Self {
        self.pending_query = query.filter(|query| !query.trim().is_empty());
        self
    }

    pub fn screen(&self) -> ScreenModel {
        render_screen(&self.controller)
    }

    pub fn apply_command(&mut self, command: Command) -> CommandDispatchResult {
        let result = dispatch(&mut self.controller, command);
        self.sync_ui();
        result
    }

    /// Returns the deferred startup search once the first list has landed.
    pub fn apply_fetch(&mut self, completion: FetchCompletion) -> Option<Command> {
        self.controller.complete_fetch(completion);
        self.ui.selected_card = 0;
        self.sync_ui();
        self.pending_query
            .take()
            .map(|query| Command::Search { query })
    }

    pub(crate) fn sync_ui(&mut self) {
        let screen = self.screen();
        self.ui.clamp_to(&screen);
    }
}
