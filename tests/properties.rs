//! Property tests for the entity lifecycle core

use std::collections::HashMap;

use glam::Vec2;
use proptest::prelude::*;

use asteroid_field::Settings;
use asteroid_field::sim::{
    Body, Category, CategorySet, EntityId, EntityRegistry, World, max_split_generations,
};

fn vec2() -> impl Strategy<Value = Vec2> {
    (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Vec2::new(x, y))
}

fn any_body() -> impl Strategy<Value = Body> {
    (vec2(), vec2(), 0.1f32..200.0).prop_map(|(pos, vel, radius)| Body::new(pos, vel, radius))
}

#[derive(Debug, Clone)]
enum Op {
    Register(u32, u8),
    Unregister(u32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u32..8, 1u8..16).prop_map(|(id, mask)| Op::Register(id, mask)),
        (0u32..8).prop_map(Op::Unregister),
    ]
}

fn categories(mask: u8) -> CategorySet {
    Category::ALL
        .into_iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, c)| c)
        .collect()
}

proptest! {
    #[test]
    fn split_lineage_terminates(radius in 0.5f32..1000.0, seed in any::<u64>()) {
        let settings = Settings::default();
        let min_radius = settings.asteroid.min_radius;
        let bound = max_split_generations(radius, min_radius);
        let mut world = World::new(settings, seed);

        let mut current = world.spawn_asteroid(Vec2::ZERO, Vec2::new(30.0, 10.0), radius);
        let mut generations = 0;
        loop {
            let parent_radius = world.body(current).unwrap().radius;
            let children = world.split_asteroid(current);
            generations += 1;
            prop_assert!(generations <= bound, "{generations} > {bound}");

            if parent_radius > min_radius {
                prop_assert_eq!(children.len(), 2);
            } else {
                prop_assert!(children.is_empty());
                break;
            }
            for child in &children {
                let child_radius = world.body(*child).unwrap().radius;
                prop_assert_eq!(child_radius, parent_radius - min_radius);
                prop_assert!(child_radius < parent_radius);
            }
            // Follow one branch; drop its sibling
            world.despawn(children[1]);
            current = children[0];
        }
        prop_assert_eq!(world.count(Category::Asteroids), 0);
    }

    #[test]
    fn update_is_linear_in_dt(mut body in any_body(), dt1 in 0.0f32..1.0, dt2 in 0.0f32..1.0) {
        let mut once = body;
        body.integrate(dt1);
        body.integrate(dt2);
        once.integrate(dt1 + dt2);
        let tolerance = 1e-3 * (1.0 + once.pos.length());
        prop_assert!((body.pos - once.pos).length() <= tolerance);
    }

    #[test]
    fn overlap_is_symmetric(a in any_body(), b in any_body()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn registry_matches_model(ops in proptest::collection::vec(op(), 0..64)) {
        let mut registry = EntityRegistry::new();
        let mut model: HashMap<u32, CategorySet> = HashMap::new();

        for op in ops {
            match op {
                Op::Register(id, mask) => {
                    let set = categories(mask);
                    registry.register(EntityId(id), set);
                    let entry = model.entry(id).or_default();
                    *entry = set.iter().fold(*entry, CategorySet::with);
                }
                Op::Unregister(id) => {
                    let was = model.remove(&id).is_some();
                    prop_assert_eq!(registry.unregister(EntityId(id)), was);
                    // Second unregister is always a no-op
                    prop_assert!(!registry.unregister(EntityId(id)));
                }
            }
        }

        for id in 0u32..8 {
            let expected = model.get(&id).copied().unwrap_or_default();
            prop_assert_eq!(registry.categories_of(EntityId(id)), expected);
        }
        for category in Category::ALL {
            let members: Vec<_> = registry.members(category).collect();
            let mut sorted = members.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(&members, &sorted);
            let expected = model.values().filter(|s| s.contains(category)).count();
            prop_assert_eq!(members.len(), expected);
        }
    }
}
