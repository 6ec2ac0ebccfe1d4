use std::convert::Infallible;
use std::io;
use std::sync::Arc;

use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Size;

use super::super::terminal_session::TerminalSurface;
use super::support::{ScriptedSource, app_with, page_of, settle};

struct TestTerminalSurface {
    terminal: Terminal<TestBackend>,
}

impl TestTerminalSurface {
    fn new(width: u16, height: u16) -> io::Result<Self> {
        let terminal = infallible_to_io(Terminal::new(TestBackend::new(width, height)))?;
        Ok(Self { terminal })
    }

    fn text(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }
}

impl TerminalSurface for TestTerminalSurface {
    fn size(&self) -> io::Result<Size> {
        infallible_to_io(self.terminal.size())
    }

    fn clear(&mut self) -> io::Result<()> {
        infallible_to_io(self.terminal.clear())
    }

    fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        infallible_to_io(self.terminal.draw(render)).map(|_| ())
    }
}

fn infallible_to_io<T>(result: Result<T, Infallible>) -> io::Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(err) => match err {},
    }
}

#[test]
fn draws_loading_panels_before_anything_settles() {
    let mut app = app_with(Arc::new(ScriptedSource::default()));
    let _ = app.controller.start();
    let mut surface = TestTerminalSurface::new(100, 30).expect("test terminal should initialize");

    assert_eq!(surface.size().expect("size should resolve"), Size::new(100, 30));
    app.draw(&mut surface).expect("draw should succeed");

    let text = surface.text();
    assert!(text.contains("Popular Manga (Page 1)"));
    assert!(text.contains("Loading..."));
}

#[tokio::test]
async fn draws_cards_and_no_results_message() {
    let source = Arc::new(ScriptedSource::default());
    source.push_items(page_of(0, 3));
    source.push_items(Vec::new());
    let mut app = app_with(source);
    let mut surface = TestTerminalSurface::new(100, 30).expect("test terminal should initialize");

    let (request, _plan) = app.controller.start();
    settle(&mut app, request).await;
    app.draw(&mut surface).expect("draw should succeed");
    let text = surface.text();
    assert!(text.contains("Manga 0"));
    assert!(text.contains("Manga 2"));
    assert!(text.contains("Rank #1"));

    let request = app
        .apply_command(crate::controller::Command::BrowsePage { page: 1 })
        .fetch
        .expect("browse fetches");
    settle(&mut app, request).await;
    surface.clear().expect("clear should succeed");
    app.draw(&mut surface).expect("draw should succeed");
    assert!(surface.text().contains("No results found."));
}

#[test]
fn narrow_terminal_still_draws_main_panel() {
    let mut app = app_with(Arc::new(ScriptedSource::default()));
    let _ = app.controller.start();
    let mut surface = TestTerminalSurface::new(40, 12).expect("test terminal should initialize");

    app.draw(&mut surface).expect("draw should succeed");
    assert!(surface.text().contains("Loading..."));
}

#[test]
fn paste_lands_in_search_bar_and_resize_requests_redraw() {
    let mut app = app_with(Arc::new(ScriptedSource::default()));
    let mut surface = TestTerminalSurface::new(80, 24).expect("test terminal should initialize");
    let mut needs_redraw = false;

    let outcome = app
        .handle_input_event(
            crossterm::event::Event::Paste("blue\nperiod".to_string()),
            &mut surface,
            &mut needs_redraw,
        )
        .expect("paste should be handled");
    assert!(outcome.command.is_none());
    assert!(needs_redraw);
    assert_eq!(app.ui.focus, crate::app::Focus::Search);
    assert_eq!(app.ui.search_input.value(), "blue period");

    needs_redraw = false;
    app.handle_input_event(
        crossterm::event::Event::Resize(80, 24),
        &mut surface,
        &mut needs_redraw,
    )
    .expect("resize should be handled");
    assert!(needs_redraw);
}
