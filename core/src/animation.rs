use alloc::collections::BTreeMap;
use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// Renderer-defined effect values (opacity, scale, ...) keyed by property name.
///
/// Only finite values are stored. The meaning of each key belongs to the renderer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f32>", into = "BTreeMap<String, f32>")]
pub struct AnimationProperties(BTreeMap<String, f32>);

impl AnimationProperties {
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn try_from_iter<K, I>(iter: I) -> Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f32)>,
    {
        let mut properties = Self::new();
        for (name, value) in iter {
            properties.insert(name, value)?;
        }
        Ok(properties)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<f32> {
        self.0.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.0.iter().map(|(name, &value)| (name.as_str(), value))
    }

    /// Inserts or replaces a value, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, value: f32) -> Result<Option<f32>> {
        let name = name.into();
        if !value.is_finite() {
            return Err(AnimationError::NonFiniteValue { name });
        }
        Ok(self.0.insert(name, value))
    }
}

impl TryFrom<BTreeMap<String, f32>> for AnimationProperties {
    type Error = AnimationError;

    fn try_from(values: BTreeMap<String, f32>) -> Result<Self> {
        Self::try_from_iter(values)
    }
}

impl From<AnimationProperties> for BTreeMap<String, f32> {
    fn from(properties: AnimationProperties) -> Self {
        properties.0
    }
}

/// Transient visual-effect state embedded in a [`Cell`].
///
/// Independent from the cell's click state. Fields only change as a whole through
/// [`Cell::start_animate`] and [`Cell::stop_animate`], plus the per-frame helpers
/// [`Cell::advance_animation`] and [`Cell::set_animation_property`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAnimationState")]
pub struct AnimationState {
    enabled: bool,
    tick: Tick,
    properties: AnimationProperties,
}

#[derive(Deserialize)]
struct RawAnimationState {
    enabled: bool,
    tick: Tick,
    properties: AnimationProperties,
}

/// A stopped animation is always the inert state; only a running one carries a tick or values.
impl TryFrom<RawAnimationState> for AnimationState {
    type Error = AnimationError;

    fn try_from(raw: RawAnimationState) -> Result<Self> {
        let state = Self {
            enabled: raw.enabled,
            tick: raw.tick,
            properties: raw.properties,
        };
        if state.enabled || state.is_inert() {
            Ok(state)
        } else {
            Err(AnimationError::StaleState { tick: state.tick })
        }
    }
}

impl AnimationState {
    pub(crate) fn running(properties: AnimationProperties) -> Self {
        Self {
            enabled: true,
            tick: 0,
            properties,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn properties(&self) -> &AnimationProperties {
        &self.properties
    }

    /// Whether this is the reset state: disabled, tick zero, no properties.
    pub fn is_inert(&self) -> bool {
        !self.enabled && self.tick == 0 && self.properties.is_empty()
    }

    pub(crate) fn advance(&mut self) -> Option<Tick> {
        if !self.enabled {
            return None;
        }

        match self.tick.checked_add(1) {
            Some(next) => self.tick = next,
            None => log::warn!("Animation tick saturated at {}", self.tick),
        }
        Some(self.tick)
    }

    pub(crate) fn set_property(
        &mut self,
        name: impl Into<String>,
        value: f32,
    ) -> Result<Option<f32>> {
        if !self.enabled {
            return Err(AnimationError::NotRunning);
        }
        self.properties.insert(name, value)
    }
}
