//! Entities and typed component attachment.
//!
//! Every entity carries the same fixed set of optional component slots.
//! The `Component` trait maps a component type onto its slot, which gives
//! generic `add`/`get`/`has`/`remove` without any runtime registry.

use serde::{Deserialize, Serialize};

use shapestorm_core::components::{Collision, Input, LifeSpan, Score, Shape, Transform};
use shapestorm_core::enums::Tag;

/// Process-unique entity identifier. Ids increase monotonically and are
/// never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// The component slots of one entity. A slot is present iff it is `Some`,
/// independent of the values inside it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Components {
    transform: Option<Transform>,
    lifespan: Option<LifeSpan>,
    input: Option<Input>,
    collision: Option<Collision>,
    score: Option<Score>,
    shape: Option<Shape>,
}

/// A component type with a dedicated slot on every entity.
pub trait Component: Sized + 'static {
    fn slot(components: &Components) -> &Option<Self>;
    fn slot_mut(components: &mut Components) -> &mut Option<Self>;
}

macro_rules! component_slot {
    ($ty:ty => $field:ident) => {
        impl Component for $ty {
            fn slot(components: &Components) -> &Option<Self> {
                &components.$field
            }

            fn slot_mut(components: &mut Components) -> &mut Option<Self> {
                &mut components.$field
            }
        }
    };
}

component_slot!(Transform => transform);
component_slot!(LifeSpan => lifespan);
component_slot!(Input => input);
component_slot!(Collision => collision);
component_slot!(Score => score);
component_slot!(Shape => shape);

/// A simulated game object. Only `EntityManager` creates entities.
#[derive(Debug)]
pub struct Entity {
    id: EntityId,
    tag: Tag,
    alive: bool,
    components: Components,
}

impl Entity {
    pub(crate) fn new(id: EntityId, tag: Tag) -> Self {
        Self {
            id,
            tag,
            alive: true,
            components: Components::default(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Mark the entity dead. It stays visible, components included, until
    /// the manager's next `update()`.
    pub fn destroy(&mut self) {
        self.alive = false;
    }

    /// Attach `component`, replacing any previous value of the same type.
    pub fn add<T: Component>(&mut self, component: T) -> &mut T {
        T::slot_mut(&mut self.components).insert(component)
    }

    pub fn get<T: Component>(&self) -> Option<&T> {
        T::slot(&self.components).as_ref()
    }

    pub fn get_mut<T: Component>(&mut self) -> Option<&mut T> {
        T::slot_mut(&mut self.components).as_mut()
    }

    pub fn has<T: Component>(&self) -> bool {
        T::slot(&self.components).is_some()
    }

    /// Detach the component, returning its last value.
    pub fn remove<T: Component>(&mut self) -> Option<T> {
        T::slot_mut(&mut self.components).take()
    }

    /// Access a component this entity is guaranteed to carry.
    ///
    /// # Panics
    /// If the component is absent, which means an invariant broke elsewhere.
    pub fn require<T: Component>(&self) -> &T {
        let (id, tag) = (self.id, self.tag);
        self.get::<T>()
            .unwrap_or_else(|| panic!("{tag} entity {id} is missing {}", std::any::type_name::<T>()))
    }

    /// Mutable form of [`Entity::require`].
    pub fn require_mut<T: Component>(&mut self) -> &mut T {
        let (id, tag) = (self.id, self.tag);
        self.get_mut::<T>()
            .unwrap_or_else(|| panic!("{tag} entity {id} is missing {}", std::any::type_name::<T>()))
    }
}
