//! World state: entity storage plus registry membership
//!
//! Every entity is created through a factory method that names the category
//! set it joins, and destroyed through [`World::despawn`], which evicts it from
//! every category and from storage in one call.

use std::collections::BTreeMap;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::asteroid::Asteroid;
use super::entity::{Body, Entity, EntityId, EntityKind, Simulated};
use super::player::{Controls, Player};
use super::registry::{Category, CategorySet, EntityRegistry};
use super::shot::Shot;
use crate::renderer::Renderer;
use crate::settings::Settings;

/// All live entities and the sets they belong to
#[derive(Debug, Clone)]
pub struct World {
    settings: Settings,
    seed: u64,
    rng: Pcg32,
    registry: EntityRegistry,
    entities: BTreeMap<EntityId, Entity>,
    player: Option<EntityId>,
    next_id: u32,
}

impl World {
    /// Create an empty world with the given seed
    pub fn new(settings: Settings, seed: u64) -> Self {
        Self {
            settings,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            registry: EntityRegistry::new(),
            entities: BTreeMap::new(),
            player: None,
            next_id: 1,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Split RNG
    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    fn next_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Store an entity and register it into `categories`
    pub fn insert(&mut self, entity: Entity, categories: CategorySet) -> EntityId {
        debug_assert!(entity.body().radius > 0.0);
        let id = self.next_entity_id();
        self.registry.register(id, categories);
        self.entities.insert(id, entity);
        id
    }

    /// Place the player ship. Replaces any previous player.
    pub fn spawn_player(&mut self, pos: Vec2) -> EntityId {
        if let Some(old) = self.player.take() {
            self.despawn(old);
        }
        let player = Player::new(pos, self.settings.player.clone());
        let id = self.insert(Entity::Player(player), Player::CATEGORIES);
        self.player = Some(id);
        log::debug!("Spawned player {id} at {pos}");
        id
    }

    pub fn spawn_asteroid(&mut self, pos: Vec2, vel: Vec2, radius: f32) -> EntityId {
        self.insert(Entity::Asteroid(Asteroid::new(pos, vel, radius)), Asteroid::CATEGORIES)
    }

    pub fn spawn_shot(&mut self, shot: Shot) -> EntityId {
        self.insert(Entity::Shot(shot), Shot::CATEGORIES)
    }

    /// Remove an entity from every category and from storage. Absent ids are a no-op.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        self.registry.unregister(id);
        if self.player == Some(id) {
            self.player = None;
        }
        self.entities.remove(&id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn body(&self, id: EntityId) -> Option<&Body> {
        self.get(id).map(Simulated::body)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Live view over a category's members
    pub fn members(&self, category: Category) -> impl Iterator<Item = (EntityId, &Entity)> + '_ {
        self.registry
            .members(category)
            .filter_map(|id| self.entities.get(&id).map(|e| (id, e)))
    }

    /// Snapshot of a category's ids, safe to hold across mutation
    pub fn member_ids(&self, category: Category) -> Vec<EntityId> {
        self.registry.members(category).collect()
    }

    pub fn count(&self, category: Category) -> usize {
        self.registry.len(category)
    }

    pub fn count_kind(&self, kind: EntityKind) -> usize {
        self.entities.values().filter(|e| e.kind() == kind).count()
    }

    /// Total live entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn player_id(&self) -> Option<EntityId> {
        self.player
    }

    pub fn player(&self) -> Option<&Player> {
        self.player
            .and_then(|id| self.entities.get(&id))
            .and_then(Entity::as_player)
    }

    /// Hand this frame's controls to the player
    pub fn set_controls(&mut self, controls: Controls) {
        if let Some(player) = self
            .player
            .and_then(|id| self.entities.get_mut(&id))
            .and_then(Entity::as_player_mut)
        {
            player.set_controls(controls);
        }
    }

    /// Update every updatable entity, then create any shot the player fired
    pub fn update_all(&mut self, dt: f32) {
        let Self {
            registry, entities, ..
        } = self;
        for id in registry.members(Category::Updatable) {
            if let Some(entity) = entities.get_mut(&id) {
                entity.update(dt);
            }
        }
        self.spawn_requested_shot();
    }

    fn spawn_requested_shot(&mut self) -> Option<EntityId> {
        let shot = self
            .player
            .and_then(|id| self.entities.get_mut(&id))
            .and_then(Entity::as_player_mut)
            .and_then(Player::take_shot)?;
        let id = self.spawn_shot(shot);
        log::debug!("Player fired shot {id}");
        Some(id)
    }

    /// Draw every drawable entity
    pub fn draw_all(&self, renderer: &mut dyn Renderer) {
        for (_, entity) in self.members(Category::Drawable) {
            entity.draw(renderer);
        }
    }

    /// Remove shots and asteroids that drifted past the off-screen margin.
    /// Returns how many were removed.
    pub fn cull_offscreen(&mut self) -> usize {
        let margin = self.settings.asteroid.max_starting_radius() * 2.0;
        let (w, h) = (self.settings.screen_width, self.settings.screen_height);
        let outside = |body: &Body| {
            body.pos.x < -margin
                || body.pos.x > w + margin
                || body.pos.y < -margin
                || body.pos.y > h + margin
        };

        let doomed: Vec<EntityId> = self
            .members(Category::Asteroids)
            .chain(self.members(Category::Shots))
            .filter(|(_, e)| outside(e.body()))
            .map(|(id, _)| id)
            .collect();
        for id in &doomed {
            self.despawn(*id);
        }
        if !doomed.is_empty() {
            log::trace!("Culled {} off-screen entities", doomed.len());
        }
        doomed.len()
    }
}
