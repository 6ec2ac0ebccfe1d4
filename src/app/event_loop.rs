use crate::controller::{ActionId, Command, CommandOutcome};
use crate::error::AppResult;
use crate::event::{AppEvent, DomainEvent};
use crate::ui;

use super::core::App;
use super::event_bus::EventBus;
use super::fetch::FetchRuntime;
use super::terminal_session::{TerminalSession, TerminalSurface};

struct LoopRuntime {
    session: TerminalSession,
    bus: EventBus,
    fetch: FetchRuntime,
    needs_redraw: bool,
}

enum LoopControl {
    Continue,
    Break,
}

impl App {
    pub async fn run(&mut self) -> AppResult<()> {
        let mut runtime = self.initialize_loop_runtime()?;

        let result = self.drive(&mut runtime).await;

        runtime.bus.shutdown();
        runtime.fetch.shutdown();
        runtime.session.restore()?;
        result
    }

    fn initialize_loop_runtime(&mut self) -> AppResult<LoopRuntime> {
        let session = TerminalSession::enter()?;
        let bus = EventBus::with_terminal_input();
        let mut fetch = FetchRuntime::new(self.source.clone(), bus.sender());

        let (request, plan) = self.controller.start();
        fetch.spawn_list(request);
        fetch.spawn_top_list(plan);
        self.sync_ui();

        Ok(LoopRuntime {
            session,
            bus,
            fetch,
            needs_redraw: true,
        })
    }

    async fn drive(&mut self, runtime: &mut LoopRuntime) -> AppResult<()> {
        loop {
            if runtime.needs_redraw {
                self.draw(&mut runtime.session)?;
                runtime.needs_redraw = false;
            }

            let Some(event) = runtime.bus.next().await else {
                return Ok(());
            };
            if matches!(self.handle_domain_event(event, runtime)?, LoopControl::Break) {
                return Ok(());
            }
        }
    }

    pub(crate) fn draw(&mut self, session: &mut impl TerminalSurface) -> AppResult<()> {
        let screen = self.screen();
        self.ui.clamp_to(&screen);
        let ui_state = &self.ui;
        let status = &self.controller.status;
        session.draw(|frame| ui::draw_screen(frame, &screen, ui_state, status))?;
        Ok(())
    }

    fn handle_domain_event(
        &mut self,
        event: DomainEvent,
        runtime: &mut LoopRuntime,
    ) -> AppResult<LoopControl> {
        match event {
            DomainEvent::Input(event) => {
                let outcome = self.handle_input_event(
                    event,
                    &mut runtime.session,
                    &mut runtime.needs_redraw,
                )?;
                if let Some(command) = outcome.command {
                    runtime.bus.post(DomainEvent::Command(command));
                }
            }
            DomainEvent::InputError(message) => {
                tracing::warn!(%message, "terminal input error");
                self.controller.status.last_action_id = Some(ActionId::Input);
                self.controller.status.message = format!("input error: {message}");
                runtime.needs_redraw = true;
            }
            DomainEvent::Command(command) => return Ok(self.run_command(command, runtime)),
            DomainEvent::App(event) => {
                log_app_event(&event);
            }
            DomainEvent::FetchComplete(completion) => {
                if let Some(command) = self.apply_fetch(completion) {
                    runtime.bus.post(DomainEvent::Command(command));
                }
                runtime.needs_redraw = true;
            }
            DomainEvent::SidebarLoaded(result) => {
                self.controller.complete_sidebar(result);
                self.sync_ui();
                runtime.needs_redraw = true;
            }
        }
        Ok(LoopControl::Continue)
    }

    fn run_command(&mut self, command: Command, runtime: &mut LoopRuntime) -> LoopControl {
        let dispatch = self.apply_command(command);
        if let Some(request) = dispatch.fetch {
            runtime.fetch.spawn_list(request);
            tracing::debug!(in_flight = runtime.fetch.in_flight_len(), "fetch spawned");
        }
        for event in dispatch.emitted_events {
            runtime.bus.post(DomainEvent::App(event));
        }
        runtime.needs_redraw = true;

        match dispatch.outcome {
            CommandOutcome::QuitRequested => LoopControl::Break,
            CommandOutcome::Applied | CommandOutcome::Noop => LoopControl::Continue,
        }
    }
}

fn log_app_event(event: &AppEvent) {
    match event {
        AppEvent::CommandExecuted { id, outcome } => {
            tracing::debug!(command = id.as_str(), ?outcome, "command executed");
        }
        AppEvent::ViewChanged { from, to } => {
            tracing::debug!(from = from.as_str(), to = to.as_str(), "view changed");
        }
        AppEvent::CursorMoved { from, to } => {
            tracing::debug!(from, to, "browse cursor moved");
        }
        AppEvent::FetchIssued { ticket, query } => {
            tracing::debug!(ticket, ?query, "fetch handed to runtime");
        }
    }
}
