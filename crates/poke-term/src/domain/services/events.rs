use std::io;

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseEventKind;
use futures::future;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time;

use crate::domain::models::Event;

pub struct EventsService {
    crossterm_events: Option<EventStream>,
    events: mpsc::UnboundedReceiver<Event>,
}

fn map_terminal_event(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Mouse(mouseevent) => match mouseevent.kind {
            MouseEventKind::ScrollUp => {
                return Some(Event::UIScrollUp);
            }
            MouseEventKind::ScrollDown => {
                return Some(Event::UIScrollDown);
            }
            _ => {
                return None;
            }
        },
        CrosstermEvent::Key(keyevent) => return map_key(keyevent),
        CrosstermEvent::Resize(..) => return Some(Event::UITick),
        _ => return None,
    }
}

/// Maps a key press to an application event. Only quitting, selecting and tree
/// navigation are bound.
pub fn map_key(keyevent: KeyEvent) -> Option<Event> {
    if keyevent.kind == KeyEventKind::Release {
        return None;
    }

    match keyevent.code {
        KeyCode::Char('c') if keyevent.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Event::KeyboardQuit);
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            return Some(Event::KeyboardQuit);
        }
        KeyCode::Enter => {
            return Some(Event::KeyboardEnter);
        }
        KeyCode::Down => {
            return Some(Event::UIScrollDown);
        }
        KeyCode::Up => {
            return Some(Event::UIScrollUp);
        }
        KeyCode::PageDown => {
            return Some(Event::UIScrollPageDown);
        }
        KeyCode::PageUp => {
            return Some(Event::UIScrollPageUp);
        }
        KeyCode::Home => {
            return Some(Event::UIScrollFirst);
        }
        KeyCode::End => {
            return Some(Event::UIScrollLast);
        }
        _ => {
            return None;
        }
    }
}

async fn next_terminal_event(
    stream: &mut Option<EventStream>,
) -> Option<io::Result<CrosstermEvent>> {
    match stream {
        Some(stream) => return stream.next().await,
        None => return future::pending().await,
    }
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            crossterm_events: Some(EventStream::new()),
            events,
        };
    }

    /// Service fed only by the channel, without reading the terminal.
    pub fn from_channel(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            crossterm_events: None,
            events,
        };
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.events.recv() => event,
                event = next_terminal_event(&mut self.crossterm_events) => match event {
                    Some(Ok(input)) => map_terminal_event(input),
                    Some(Err(_)) => None,
                    None => None
                },
                _ = time::sleep(time::Duration::from_millis(500)) => Some(Event::UITick)
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
