//! Interpolation entities: the state behind one gradient strip.
//!
//! State is immutable and only changes through [`EntityState::apply`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::animation::DisplayMode;
use crate::space::{ColorSpace, NavKey};
use crate::steps::{clamp_steps, steps_from_slider_position};

/// Fewest live entities the list keeps.
pub const MIN_ENTITIES: usize = 1;
/// Most live entities the list allows.
pub const MAX_ENTITIES: usize = 10;

pub type EntityId = Uuid;

/// Initial values for a new entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDefaults {
    pub start_color: String,
    pub end_color: String,
    pub steps: u32,
    pub color_space: ColorSpace,
}

impl Default for EntityDefaults {
    fn default() -> Self {
        Self {
            start_color: "#0000FF".to_string(),
            end_color: "#FF0000".to_string(),
            steps: 10,
            color_space: ColorSpace::Srgb,
        }
    }
}

/// A swatch the user clicked, valid only for the configuration it was made in.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub color: String,
    pub index: usize,
    key: String,
}

/// State transitions of an entity.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityAction {
    SetStart(String),
    SetEnd(String),
    SetSteps(u32),
    SetStepsFromSlider(u32),
    SetColorSpace(ColorSpace),
    Navigate(NavKey),
    Swap,
    SetMode(DisplayMode),
    SelectSwatch { index: usize, color: String },
    ClearSelection,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntityState {
    pub start_color: String,
    pub end_color: String,
    pub steps: u32,
    pub color_space: ColorSpace,
    pub mode: DisplayMode,
    selection: Option<Selection>,
}

impl Default for EntityState {
    fn default() -> Self {
        Self::from_defaults(&EntityDefaults::default())
    }
}

impl EntityState {
    pub fn from_defaults(defaults: &EntityDefaults) -> Self {
        Self {
            start_color: defaults.start_color.clone(),
            end_color: defaults.end_color.clone(),
            steps: clamp_steps(defaults.steps),
            color_space: defaults.color_space,
            mode: DisplayMode::Static,
            selection: None,
        }
    }

    /// Identifies the current gradient configuration.
    pub fn config_key(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.start_color, self.end_color, self.steps, self.color_space
        )
    }

    /// The selected swatch, if it belongs to the current configuration.
    pub fn active_selection(&self) -> Option<&Selection> {
        self.selection
            .as_ref()
            .filter(|selection| selection.key == self.config_key())
    }

    #[must_use]
    pub fn apply(self, action: EntityAction) -> Self {
        match action {
            EntityAction::SetStart(color) => Self { start_color: color, ..self },
            EntityAction::SetEnd(color) => Self { end_color: color, ..self },
            EntityAction::SetSteps(steps) => Self { steps: clamp_steps(steps), ..self },
            EntityAction::SetStepsFromSlider(position) => Self {
                steps: steps_from_slider_position(position),
                ..self
            },
            EntityAction::SetColorSpace(color_space) => Self { color_space, ..self },
            EntityAction::Navigate(key) => Self {
                color_space: self.color_space.navigate(key),
                ..self
            },
            EntityAction::Swap => Self {
                start_color: self.end_color,
                end_color: self.start_color,
                ..self
            },
            EntityAction::SetMode(mode) => Self { mode, ..self },
            EntityAction::SelectSwatch { index, color } => {
                let key = self.config_key();
                Self {
                    selection: Some(Selection { color, index, key }),
                    ..self
                }
            }
            EntityAction::ClearSelection => Self { selection: None, ..self },
        }
    }
}

/// One entry in the entity list.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityEntry {
    pub id: EntityId,
    pub state: EntityState,
    /// Removed and playing its exit animation.
    pub leaving: bool,
}

/// Ordered list of entities, bounded to `[MIN_ENTITIES, MAX_ENTITIES]` live entries.
#[derive(Debug, Clone)]
pub struct EntityList {
    entries: Vec<EntityEntry>,
    defaults: EntityDefaults,
}

impl Default for EntityList {
    fn default() -> Self {
        Self::new(EntityDefaults::default())
    }
}

impl EntityList {
    /// Create a list holding one entity.
    pub fn new(defaults: EntityDefaults) -> Self {
        let mut list = Self { entries: Vec::new(), defaults };
        list.push_entry();
        list
    }

    fn push_entry(&mut self) -> EntityId {
        let id = Uuid::new_v4();
        self.entries.push(EntityEntry {
            id,
            state: EntityState::from_defaults(&self.defaults),
            leaving: false,
        });
        id
    }

    /// Number of entities not on their way out.
    pub fn live_count(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.leaving).count()
    }

    pub fn can_add(&self) -> bool {
        self.live_count() < MAX_ENTITIES
    }

    pub fn can_remove(&self) -> bool {
        self.live_count() > MIN_ENTITIES
    }

    /// Append a new entity. Returns `None` at the cap.
    pub fn add(&mut self) -> Option<EntityId> {
        if !self.can_add() {
            return None;
        }
        let id = self.push_entry();
        log::info!("Added entity {} ({} live)", id, self.live_count());
        Some(id)
    }

    /// Start removing an entity. It stays in the list until [`finish_exit`](Self::finish_exit).
    pub fn remove(&mut self, id: EntityId) -> bool {
        if !self.can_remove() {
            return false;
        }
        match self.entries.iter_mut().find(|entry| entry.id == id && !entry.leaving) {
            Some(entry) => {
                entry.leaving = true;
                log::info!("Removing entity {}", id);
                true
            }
            None => false,
        }
    }

    /// Mark the most recently added live entity as leaving.
    pub fn remove_last(&mut self) -> Option<EntityId> {
        let id = self.entries.iter().rev().find(|entry| !entry.leaving)?.id;
        self.remove(id).then_some(id)
    }

    /// Drop an entity whose exit animation has finished.
    pub fn finish_exit(&mut self, id: EntityId) {
        self.entries.retain(|entry| !(entry.id == id && entry.leaving));
    }

    /// Apply an action to one entity.
    pub fn dispatch(&mut self, id: EntityId, action: EntityAction) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) {
            let state = std::mem::take(&mut entry.state);
            entry.state = state.apply(action);
        }
    }

    pub fn get(&self, id: EntityId) -> Option<&EntityState> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.state)
    }

    pub fn entries(&self) -> &[EntityEntry] {
        &self.entries
    }
}
