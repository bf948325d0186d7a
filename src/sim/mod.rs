//! Simulation module
//!
//! All entity lifecycle logic lives here. Like the rest of the crate it is
//! single-threaded and deterministic for a given seed:
//! - Seeded RNG only (split and spawn streams)
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies beyond the `Renderer` trait

pub mod asteroid;
pub mod collision;
pub mod entity;
pub mod player;
pub mod registry;
pub mod shot;
pub mod spawn;
pub mod split;
pub mod state;

pub use asteroid::Asteroid;
pub use collision::{ShotHit, circles_overlap};
pub use entity::{Body, Entity, EntityId, EntityKind, Simulated};
pub use player::{Controls, Player};
pub use registry::{Category, CategorySet, EntityRegistry};
pub use shot::Shot;
pub use spawn::{Edge, SpawnController, SpawnPlan};
pub use split::{deflected_velocities, max_split_generations, split_bodies};
pub use state::World;
