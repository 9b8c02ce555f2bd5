//! Terminal input plumbing: crossterm polling and event normalisation

use crossterm::event::{self, KeyEvent, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Raw event from crossterm before processing
#[derive(Debug)]
pub enum RawEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Input event delivered to components
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// Key press
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Periodic tick
    Tick,
}

impl EventKind {
    /// Returns the key event if this is a key press
    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            EventKind::Key(key) => Some(key),
            _ => None,
        }
    }
}

/// Spawn the input polling task with cancellation support
///
/// The task polls crossterm for key and resize events and forwards them
/// through `tx` until the token is cancelled or the receiver is dropped.
///
/// # Arguments
/// * `tx` - Channel to send raw events
/// * `poll_timeout` - Timeout for each poll operation
/// * `loop_sleep` - Sleep duration between poll cycles
/// * `cancel_token` - Token to cancel the polling task
pub fn spawn_input_poller(
    tx: mpsc::UnboundedSender<RawEvent>,
    poll_timeout: Duration,
    loop_sleep: Duration,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        const MAX_EVENTS_PER_BATCH: usize = 20;

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    info!("Input poller cancelled, draining buffer");
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(loop_sleep) => {
                    let mut processed = 0;
                    while processed < MAX_EVENTS_PER_BATCH
                        && event::poll(poll_timeout).unwrap_or(false)
                    {
                        processed += 1;
                        let raw = match event::read() {
                            Ok(event::Event::Key(key)) => RawEvent::Key(key),
                            Ok(event::Event::Resize(w, h)) => RawEvent::Resize(w, h),
                            _ => continue,
                        };
                        if tx.send(raw).is_err() {
                            debug!("Input channel closed, stopping poller");
                            return;
                        }
                    }
                }
            }
        }
    })
}

/// Process a raw event into an `EventKind`
///
/// Key releases and repeats are dropped (some terminals report them);
/// components only react to presses.
pub fn process_raw_event(raw: RawEvent) -> Option<EventKind> {
    match raw {
        RawEvent::Key(key) if key.kind == KeyEventKind::Press => Some(EventKind::Key(key)),
        RawEvent::Key(_) => None,
        RawEvent::Resize(w, h) => Some(EventKind::Resize(w, h)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key_with_kind(kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn test_process_key_press() {
        let kind = process_raw_event(RawEvent::Key(key_with_kind(KeyEventKind::Press)));
        assert!(matches!(kind, Some(EventKind::Key(_))));
        assert!(kind.unwrap().as_key().is_some());
    }

    #[test]
    fn test_process_key_release_dropped() {
        let kind = process_raw_event(RawEvent::Key(key_with_kind(KeyEventKind::Release)));
        assert_eq!(kind, None);
    }

    #[test]
    fn test_process_resize() {
        let kind = process_raw_event(RawEvent::Resize(80, 24));
        assert_eq!(kind, Some(EventKind::Resize(80, 24)));
        assert!(EventKind::Resize(80, 24).as_key().is_none());
    }
}
