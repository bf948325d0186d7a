//! Entity registry: named, overlapping membership sets
//!
//! Each category is an ordered set of entity ids, and iterating a category
//! visits members in ascending id order. The registry only tracks
//! membership; entity storage lives in the world.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::entity::EntityId;

/// A named membership set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Receives `update(dt)` every frame
    Updatable,
    /// Receives `draw(renderer)` every frame
    Drawable,
    /// Collidable asteroids
    Asteroids,
    /// Collidable player shots
    Shots,
}

impl Category {
    pub const COUNT: usize = 4;
    pub const ALL: [Category; Self::COUNT] = [
        Category::Updatable,
        Category::Drawable,
        Category::Asteroids,
        Category::Shots,
    ];

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    const fn bit(self) -> u8 {
        1 << self.index()
    }
}

/// A set of categories, fixed per entity type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CategorySet(u8);

impl CategorySet {
    pub const EMPTY: CategorySet = CategorySet(0);

    pub const fn of(categories: &[Category]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < categories.len() {
            bits |= categories[i].bit();
            i += 1;
        }
        CategorySet(bits)
    }

    pub const fn with(self, category: Category) -> Self {
        CategorySet(self.0 | category.bit())
    }

    pub const fn contains(self, category: Category) -> bool {
        self.0 & category.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Category> {
        Category::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        iter.into_iter().fold(CategorySet::EMPTY, CategorySet::with)
    }
}

/// Membership sets keyed by category
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    sets: [BTreeSet<EntityId>; Category::COUNT],
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` to every category in `categories`; existing memberships are kept
    pub fn register(&mut self, id: EntityId, categories: CategorySet) {
        for category in categories.iter() {
            self.sets[category.index()].insert(id);
        }
    }

    /// Remove `id` from every category. Returns whether it was in any.
    pub fn unregister(&mut self, id: EntityId) -> bool {
        let mut removed = false;
        for set in &mut self.sets {
            removed |= set.remove(&id);
        }
        removed
    }

    /// Current members of a category, in ascending id order
    pub fn members(&self, category: Category) -> impl Iterator<Item = EntityId> + '_ {
        self.sets[category.index()].iter().copied()
    }

    pub fn contains(&self, id: EntityId, category: Category) -> bool {
        self.sets[category.index()].contains(&id)
    }

    /// Every category `id` currently belongs to
    pub fn categories_of(&self, id: EntityId) -> CategorySet {
        Category::ALL
            .into_iter()
            .filter(|c| self.contains(id, *c))
            .collect()
    }

    pub fn is_registered(&self, id: EntityId) -> bool {
        self.sets.iter().any(|set| set.contains(&id))
    }

    pub fn len(&self, category: Category) -> usize {
        self.sets[category.index()].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH: CategorySet = CategorySet::of(&[Category::Updatable, Category::Drawable]);

    #[test]
    fn test_category_set_membership() {
        let set = CategorySet::of(&[Category::Drawable, Category::Asteroids]);
        assert!(set.contains(Category::Drawable));
        assert!(set.contains(Category::Asteroids));
        assert!(!set.contains(Category::Updatable));
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Category::Drawable, Category::Asteroids]
        );
        assert!(CategorySet::EMPTY.is_empty());
    }

    #[test]
    fn test_register_adds_to_each_category() {
        let mut registry = EntityRegistry::new();
        registry.register(EntityId(1), BOTH);
        assert!(registry.contains(EntityId(1), Category::Updatable));
        assert!(registry.contains(EntityId(1), Category::Drawable));
        assert!(!registry.contains(EntityId(1), Category::Asteroids));
        assert_eq!(registry.categories_of(EntityId(1)), BOTH);
    }

    #[test]
    fn test_register_twice_keeps_set_semantics() {
        let mut registry = EntityRegistry::new();
        registry.register(EntityId(7), BOTH);
        registry.register(EntityId(7), BOTH.with(Category::Asteroids));
        assert_eq!(registry.len(Category::Updatable), 1);
        assert_eq!(registry.len(Category::Asteroids), 1);
    }

    #[test]
    fn test_unregister_is_idempotent() {
        let mut registry = EntityRegistry::new();
        registry.register(EntityId(3), BOTH);
        assert!(registry.unregister(EntityId(3)));
        assert!(!registry.unregister(EntityId(3)));
        assert!(!registry.is_registered(EntityId(3)));
        assert!(!registry.unregister(EntityId(99)));
    }

    #[test]
    fn test_members_in_ascending_id_order_and_restartable() {
        let mut registry = EntityRegistry::new();
        for id in [9, 2, 5, 1] {
            registry.register(EntityId(id), BOTH);
        }
        registry.unregister(EntityId(2));

        let first: Vec<_> = registry.members(Category::Drawable).collect();
        let second: Vec<_> = registry.members(Category::Drawable).collect();
        assert_eq!(first, vec![EntityId(1), EntityId(5), EntityId(9)]);
        assert_eq!(first, second);
        assert_eq!(registry.members(Category::Shots).count(), 0);
    }

    #[test]
    fn test_empty_category_set_registers_nothing() {
        let mut registry = EntityRegistry::new();
        registry.register(EntityId(1), CategorySet::EMPTY);
        assert!(!registry.is_registered(EntityId(1)));
    }
}
