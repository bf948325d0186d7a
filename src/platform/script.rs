//! Scripted event source for headless runs

use std::collections::BTreeMap;

use super::{Event, EventSource};

/// Delivers pre-recorded events on given poll counts (frames)
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    frame: u64,
    script: BTreeMap<u64, Vec<Event>>,
    quit_at: Option<u64>,
}

impl ScriptedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `Quit` on the given frame (0-based poll count)
    pub fn quit_at(mut self, frame: u64) -> Self {
        self.quit_at = Some(frame);
        self
    }

    /// Queue an event for the given frame
    pub fn at(mut self, frame: u64, event: Event) -> Self {
        self.script.entry(frame).or_default().push(event);
        self
    }

    /// Number of polls so far
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl EventSource for ScriptedEvents {
    fn poll_events(&mut self) -> Vec<Event> {
        let frame = self.frame;
        self.frame += 1;

        let mut events = self.script.remove(&frame).unwrap_or_default();
        if self.quit_at.is_some_and(|q| frame >= q) {
            events.push(Event::Quit);
        }
        events
    }
}
