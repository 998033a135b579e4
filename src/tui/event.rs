//! Terminal event multiplexing.
//!
//! Merges crossterm key input, a tick timer (spinner animation), and a
//! render timer into one stream via `tokio::select!`. Network settlements
//! are not routed through here; the app loop selects over both.

use std::time::Duration;

use crossterm::event::{EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;

const RENDER_INTERVAL: Duration = Duration::from_millis(33);

/// Events delivered to the app loop.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key press.
    Key(KeyEvent),
    /// Animation tick.
    Tick,
    /// Time to redraw (~30 fps).
    Render,
}

/// Merged input/tick/render event source.
pub struct EventHandler {
    input: EventStream,
    tick: tokio::time::Interval,
    render: tokio::time::Interval,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            input: EventStream::new(),
            tick: tokio::time::interval(tick_rate),
            render: tokio::time::interval(RENDER_INTERVAL),
        }
    }

    /// Wait for the next event.
    pub async fn next(&mut self) -> anyhow::Result<Event> {
        loop {
            tokio::select! {
                maybe_event = self.input.next() => {
                    match maybe_event {
                        Some(Ok(crossterm::event::Event::Key(key))) => {
                            // Press only; Windows also reports Release/Repeat.
                            if key.kind == KeyEventKind::Press {
                                return Ok(Event::Key(key));
                            }
                        }
                        Some(Err(e)) => return Err(e.into()),
                        _ => {}
                    }
                }
                _ = self.tick.tick() => return Ok(Event::Tick),
                _ = self.render.tick() => return Ok(Event::Render),
            }
        }
    }
}
