use std::sync::Arc;

use crate::app::App;
use crate::config::Config;

use super::support::ScriptedSource;

#[test]
fn with_source_applies_ui_config() {
    let mut config = Config::default();
    config.ui.sidebar_visible = false;
    config.keymap.preset = "emacs".to_string();

    let app = App::with_source(config, Arc::new(ScriptedSource::default()));

    assert!(!app.controller.sidebar_visible());
    assert!(app.screen().sidebar.is_none());
    assert_eq!(app.config.keymap.preset, "emacs");
}

#[test]
fn new_builds_http_source_from_default_config() {
    let app = App::new(Config::default()).expect("default config should build a client");
    assert!(app.pending_query.is_none());
}
