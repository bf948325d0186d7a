//! Asteroid Field entry point
//!
//! Runs a headless session: the renderer records draw calls and a scripted
//! pilot spins and fires until the frame limit or until an asteroid gets
//! through.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use asteroid_field::frame::FrameLoop;
use asteroid_field::platform::{Clock, Event, FixedClock, Key, RealtimeClock, ScriptedEvents};
use asteroid_field::renderer::RecordingRenderer;
use asteroid_field::sim::{EntityKind, World};
use asteroid_field::Settings;

#[derive(Parser)]
#[command(name = "asteroid-field")]
#[command(about = "Headless asteroid-field survival simulation")]
struct Args {
    /// JSON settings file (defaults are used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed
    #[arg(long, default_value_t = 0xA57E_801D)]
    seed: u64,

    /// Quit after this many frames
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Pace frames against the wall clock instead of a fixed step
    #[arg(long)]
    realtime: bool,

    /// Print the default settings as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.dump_config {
        println!("{}", Settings::default().to_json()?);
        return Ok(());
    }

    let settings = match &args.config {
        Some(path) => Settings::load_from_file(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };

    log::info!("Starting Asteroid Field (seed {})", args.seed);
    log::info!("Screen width: {}", settings.screen_width);
    log::info!("Screen height: {}", settings.screen_height);

    if args.realtime {
        run(settings, args.seed, args.frames, RealtimeClock::new());
    } else {
        run(settings, args.seed, args.frames, FixedClock::new());
    }
    Ok(())
}

/// Scripted pilot: keep turning and firing for the whole run
fn pilot(frames: u64) -> ScriptedEvents {
    ScriptedEvents::new()
        .at(0, Event::KeyDown(Key::Right))
        .at(0, Event::KeyDown(Key::Space))
        .quit_at(frames)
}

fn run(settings: Settings, seed: u64, frames: u64, clock: impl Clock) {
    let center = settings.screen_center();
    let mut world = World::new(settings, seed);
    world.spawn_player(center);

    let mut frame_loop = FrameLoop::new(world, RecordingRenderer::new(), clock, pilot(frames));
    let reason = frame_loop.run();

    let stats = frame_loop.stats();
    let world = frame_loop.world();
    log::info!("Finished: {reason:?}");
    log::info!(
        "Frames: {}, spawned: {}, hits: {}, culled: {}",
        stats.frames,
        stats.asteroids_spawned,
        stats.asteroids_hit,
        stats.entities_culled
    );
    log::info!(
        "Alive at exit: {} asteroids, {} shots; {} draw calls issued",
        world.count_kind(EntityKind::Asteroid),
        world.count_kind(EntityKind::Shot),
        frame_loop.renderer().total_calls()
    );
}
