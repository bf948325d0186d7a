//! Frame loop
//!
//! Drives the world once per rendered frame. Order within a frame:
//! events, clear, update, collisions, spawn tick, draw, present, clock.
//! Every update of a frame happens before any of its draw calls.

use crate::platform::{Clock, Event, EventSource, InputState};
use crate::renderer::{Color, Renderer};
use crate::sim::{SpawnController, World};

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// External quit event
    Quit,
    /// An asteroid reached the player
    PlayerDestroyed,
}

/// Loop state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated(TerminationReason),
}

/// Per-run counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Frames presented
    pub frames: u64,
    pub asteroids_spawned: u64,
    pub asteroids_hit: u64,
    pub entities_culled: u64,
}

/// Owns the world and its collaborators for the lifetime of a run
pub struct FrameLoop<R, C, E> {
    world: World,
    spawner: SpawnController,
    renderer: R,
    clock: C,
    events: E,
    input: InputState,
    dt: f32,
    state: LoopState,
    stats: FrameStats,
}

impl<R: Renderer, C: Clock, E: EventSource> FrameLoop<R, C, E> {
    /// Build a loop around a populated world. The spawn controller is created
    /// once here and lives as long as the loop.
    pub fn new(world: World, renderer: R, clock: C, events: E) -> Self {
        let spawner = SpawnController::new(&world);
        Self {
            world,
            spawner,
            renderer,
            clock,
            events,
            input: InputState::new(),
            dt: 0.0,
            state: LoopState::Running,
            stats: FrameStats::default(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn spawner(&self) -> &SpawnController {
        &self.spawner
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Seconds the next update will advance by
    pub fn dt(&self) -> f32 {
        self.dt
    }

    fn terminate(&mut self, reason: TerminationReason) -> LoopState {
        log::info!(
            "Frame loop terminated after {} frames: {:?}",
            self.stats.frames,
            reason
        );
        self.state = LoopState::Terminated(reason);
        self.state
    }

    /// Run one frame. A terminated loop stays terminated and does nothing.
    pub fn step(&mut self) -> LoopState {
        if self.state != LoopState::Running {
            return self.state;
        }

        // 1. Events
        for event in self.events.poll_events() {
            if event == Event::Quit {
                return self.terminate(TerminationReason::Quit);
            }
            self.input.apply(&event);
        }

        // 2. Clear
        self.renderer.clear(Color::BLACK);

        // 3. Update
        let dt = self.dt;
        self.world.set_controls(self.input.controls());
        self.world.update_all(dt);

        // 3.5 Collisions
        if let Some(asteroid) = self.world.player_collision() {
            log::info!("Player hit by asteroid {asteroid}");
            return self.terminate(TerminationReason::PlayerDestroyed);
        }
        let hits = self.world.resolve_shot_hits();
        self.stats.asteroids_hit += hits.len() as u64;

        // 4. Spawn tick and off-screen cleanup
        if self.spawner.tick(dt, &mut self.world).is_some() {
            self.stats.asteroids_spawned += 1;
        }
        self.stats.entities_culled += self.world.cull_offscreen() as u64;

        // 5. Draw
        self.world.draw_all(&mut self.renderer);

        // 6. Present
        self.renderer.present();
        self.stats.frames += 1;

        // 7. Clock
        self.dt = self.clock.tick(self.world.settings().target_fps);
        log::trace!(
            "Frame {} dt={:.4} entities={}",
            self.stats.frames,
            self.dt,
            self.world.len()
        );

        self.state
    }

    /// Step until terminated
    pub fn run(&mut self) -> TerminationReason {
        loop {
            if let LoopState::Terminated(reason) = self.step() {
                return reason;
            }
        }
    }
}
