//! src/controller/event_loop.rs
//! ============================================================================
//! # Event Loop
//!
//! Waits on the terminal, the clipboard sampling interval and SIGTERM, and
//! hands back one [`Action`] at a time. The caller dispatches it to
//! completion before asking for the next, so history mutations never
//! interleave.

use std::{io, time::Duration};

use crossterm::event::EventStream;
use futures::StreamExt;
use tokio::time::{self, Interval, MissedTickBehavior};
use tracing::{debug, info, trace, warn};

use crate::controller::{actions::Action, context::AppContext};
use crate::model::ui_state::UIState;
use crate::platform::watcher::OwnerChangeWatcher;

pub struct EventLoop {
    event_stream: EventStream,
    ticker: Interval,
    terminate: Terminate,
    watcher: OwnerChangeWatcher,
    events: u64,
}

impl EventLoop {
    pub fn new(poll_interval: Duration) -> io::Result<Self> {
        let mut ticker = time::interval(poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!("Sampling clipboard every {poll_interval:?}");
        Ok(Self {
            event_stream: EventStream::new(),
            ticker,
            terminate: Terminate::new()?,
            watcher: OwnerChangeWatcher::new(),
            events: 0,
        })
    }

    /// Next action to dispatch. `None` once the terminal input is gone.
    pub async fn next_action(&mut self, ctx: &mut AppContext, ui: &UIState) -> Option<Action> {
        loop {
            tokio::select! {
                maybe_event = self.event_stream.next() => match maybe_event {
                    Some(Ok(event)) => {
                        self.events += 1;
                        trace!("Terminal event received: {:?}", event);
                        if let Some(action) = ui.action_for_event(&event) {
                            debug!("Terminal event mapped to action: {:?}", action);
                            return Some(action);
                        }
                    }
                    Some(Err(err)) => {
                        warn!("Terminal input failed: {err}");
                        return Some(Action::Quit);
                    }
                    None => {
                        info!("Terminal input closed");
                        return None;
                    }
                },

                _ = self.ticker.tick() => {
                    if self.watcher.poll(ctx.clipboard.as_mut()) {
                        return Some(Action::ClipboardChanged);
                    }
                }

                _ = self.terminate.recv() => {
                    info!("Received SIGTERM");
                    return Some(Action::Quit);
                }
            }
        }
    }

    /// (terminal events, clipboard changes) seen so far
    pub fn counts(&self) -> (u64, u64) {
        (self.events, self.watcher.changes())
    }
}

#[cfg(unix)]
struct Terminate(tokio::signal::unix::Signal);

#[cfg(unix)]
impl Terminate {
    fn new() -> io::Result<Self> {
        use tokio::signal::unix::{SignalKind, signal};
        signal(SignalKind::terminate()).map(Self)
    }

    async fn recv(&mut self) {
        if self.0.recv().await.is_none() {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
struct Terminate;

#[cfg(not(unix))]
impl Terminate {
    fn new() -> io::Result<Self> {
        Ok(Self)
    }

    async fn recv(&mut self) {
        std::future::pending::<()>().await;
    }
}
