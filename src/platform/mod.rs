//! Platform abstraction layer
//!
//! The simulation talks to the outside world through two collaborators:
//! - [`Clock`]: elapsed time per frame
//! - [`EventSource`]: quit and key events
//!
//! Windowing backends live outside this crate; headless implementations are
//! provided for the CLI and tests.

pub mod clock;
pub mod script;

pub use clock::{FixedClock, RealtimeClock};
pub use script::ScriptedEvents;

use std::collections::BTreeSet;

use crate::sim::Controls;

/// Logical keys the simulation reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// Rotate counter-clockwise
    Left,
    /// Rotate clockwise
    Right,
    /// Thrust forward
    Up,
    /// Thrust backward
    Down,
    /// Fire
    Space,
}

/// External event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// Frame clock
pub trait Clock {
    /// Wait out the rest of the frame (if the clock paces) and return the
    /// seconds elapsed since the previous tick
    fn tick(&mut self, target_fps: u32) -> f32;
}

/// Event queue
pub trait EventSource {
    /// Drain all events that arrived since the previous poll
    fn poll_events(&mut self) -> Vec<Event>;
}

/// Keys currently held down
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: BTreeSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the held-key set
    pub fn apply(&mut self, event: &Event) {
        match *event {
            Event::KeyDown(key) => {
                self.held.insert(key);
            }
            Event::KeyUp(key) => {
                self.held.remove(&key);
            }
            Event::Quit => {}
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Player controls implied by the held keys (opposing keys cancel)
    pub fn controls(&self) -> Controls {
        let axis = |neg: Key, pos: Key| -> f32 {
            (self.is_held(pos) as i8 - self.is_held(neg) as i8) as f32
        };
        Controls {
            turn: axis(Key::Left, Key::Right),
            thrust: axis(Key::Down, Key::Up),
            fire: self.is_held(Key::Space),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_state_tracks_held_keys() {
        let mut input = InputState::new();
        input.apply(&Event::KeyDown(Key::Up));
        input.apply(&Event::KeyDown(Key::Space));
        let controls = input.controls();
        assert_eq!(controls.thrust, 1.0);
        assert_eq!(controls.turn, 0.0);
        assert!(controls.fire);

        input.apply(&Event::KeyUp(Key::Space));
        assert!(!input.controls().fire);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut input = InputState::new();
        input.apply(&Event::KeyDown(Key::Left));
        assert_eq!(input.controls().turn, -1.0);
        input.apply(&Event::KeyDown(Key::Right));
        assert_eq!(input.controls().turn, 0.0);
    }
}
