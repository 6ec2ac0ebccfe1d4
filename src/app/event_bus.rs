use crossterm::event::EventStream;
use futures_util::StreamExt;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;

use crate::event::DomainEvent;

/// Single queue every loop event goes through, so the controller sees them
/// strictly in arrival order.
pub(crate) struct EventBus {
    tx: UnboundedSender<DomainEvent>,
    rx: UnboundedReceiver<DomainEvent>,
    input_task: Option<JoinHandle<()>>,
}

impl EventBus {
    pub(crate) fn new() -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            tx,
            rx,
            input_task: None,
        }
    }

    pub(crate) fn with_terminal_input() -> Self {
        let mut bus = Self::new();
        bus.input_task = Some(spawn_input_task(bus.tx.clone()));
        bus
    }

    pub(crate) fn sender(&self) -> UnboundedSender<DomainEvent> {
        self.tx.clone()
    }

    pub(crate) fn post(&self, event: DomainEvent) {
        // The receiver lives in `self`, so the send cannot fail.
        let _ = self.tx.send(event);
    }

    pub(crate) async fn next(&mut self) -> Option<DomainEvent> {
        self.rx.recv().await
    }

    pub(crate) fn shutdown(&mut self) {
        if let Some(task) = self.input_task.take() {
            task.abort();
        }
    }
}

fn spawn_input_task(tx: UnboundedSender<DomainEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut input_stream = EventStream::new();
        while let Some(event) = input_stream.next().await {
            let loop_event = match event {
                Ok(event) => DomainEvent::Input(event),
                Err(err) => DomainEvent::InputError(err.to_string()),
            };
            if tx.send(loop_event).is_err() {
                return;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use crate::controller::Command;
    use crate::event::DomainEvent;

    use super::EventBus;

    #[tokio::test]
    async fn bus_delivers_events_in_post_order() {
        let mut bus = EventBus::new();
        bus.post(DomainEvent::Command(Command::BrowsePage { page: 0 }));
        bus.post(DomainEvent::Command(Command::Back));
        let _ = bus.sender().send(DomainEvent::Command(Command::Quit));

        let mut seen = Vec::new();
        for _ in 0..3 {
            match bus.next().await {
                Some(DomainEvent::Command(command)) => seen.push(command),
                other => panic!("unexpected event: {other:?}"),
            }
        }
        assert_eq!(
            seen,
            vec![
                Command::BrowsePage { page: 0 },
                Command::Back,
                Command::Quit
            ]
        );
    }
}
