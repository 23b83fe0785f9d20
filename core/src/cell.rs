use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// One cell of a color-clicking grid.
///
/// Position is fixed at construction. Color only changes through the single click that moves the
/// cell from [`ClickState::Unclicked`] to [`ClickState::Clicked`]. The embedded [`AnimationState`] is
/// driven separately and never affects either.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell<C> {
    x: Coord,
    y: Coord,
    color: C,
    state: ClickState,
    animation: AnimationState,
}

impl<C> Cell<C> {
    pub fn new(x: Coord, y: Coord, color: C) -> Self {
        Self::with_state(x, y, color, false)
    }

    pub fn with_state(x: Coord, y: Coord, color: C, clicked: bool) -> Self {
        Self {
            x,
            y,
            color,
            state: clicked.into(),
            animation: Default::default(),
        }
    }

    pub fn x(&self) -> Coord {
        self.x
    }

    pub fn y(&self) -> Coord {
        self.y
    }

    pub fn coords(&self) -> Coord2 {
        (self.x, self.y)
    }

    pub fn color(&self) -> &C {
        &self.color
    }

    pub fn click_state(&self) -> ClickState {
        self.state
    }

    pub fn is_clicked(&self) -> bool {
        self.state.is_clicked()
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    /// Claims the cell with `new_color`.
    ///
    /// Only the first click on an unclicked cell takes effect; every later call returns
    /// [`ClickOutcome::AlreadyClicked`] and drops `new_color`. Animation state is left alone so the
    /// caller decides whether a claimed click gets an effect.
    pub fn on_click(&mut self, new_color: C) -> ClickOutcome {
        let (state, outcome) = self.state.click();
        match outcome {
            ClickOutcome::Claimed => {
                self.state = state;
                self.color = new_color;
                log::debug!("Cell {:?} claimed", self.coords());
            }
            ClickOutcome::AlreadyClicked => {
                log::trace!("Cell {:?} already clicked, click ignored", self.coords());
            }
        }
        outcome
    }

    /// Starts a new effect from tick zero, replacing any running one.
    pub fn start_animate(&mut self, properties: AnimationProperties) {
        log::debug!(
            "Cell {:?} animation started with {} properties",
            self.coords(),
            properties.len()
        );
        self.animation = AnimationState::running(properties);
    }

    /// Moves a running animation one frame forward and returns the new tick, or `None` when the
    /// animation is stopped.
    pub fn advance_animation(&mut self) -> Option<Tick> {
        let tick = self.animation.advance();
        if let Some(tick) = tick {
            log::trace!("Cell {:?} animation tick {}", self.coords(), tick);
        }
        tick
    }

    /// Updates a single property of the running animation, returning its previous value.
    pub fn set_animation_property(
        &mut self,
        name: impl Into<String>,
        value: f32,
    ) -> Result<Option<f32>> {
        self.animation.set_property(name, value)
    }

    /// Returns the animation to the inert state in one step. Safe to call at any time.
    pub fn stop_animate(&mut self) {
        log::trace!("Cell {:?} animation stopped", self.coords());
        self.animation = AnimationState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn flashing<C>(cell: &mut Cell<C>, opacity: f32, ticks: usize) {
        let properties = AnimationProperties::try_from_iter([("opacity", opacity)]).unwrap();
        cell.start_animate(properties);
        for _ in 0..ticks {
            cell.advance_animation();
        }
    }

    #[test]
    fn first_click_claims_cell_and_sets_color() {
        let mut cell = Cell::new(2, 3, "red");

        assert_eq!(cell.on_click("blue"), ClickOutcome::Claimed);
        assert_eq!(*cell.color(), "blue");
        assert!(cell.is_clicked());
        assert_eq!(cell.coords(), (2, 3));
    }

    #[test]
    fn second_click_is_rejected_and_keeps_color() {
        let mut cell = Cell::new(2, 3, "red");
        cell.on_click("blue");

        assert_eq!(cell.on_click("green"), ClickOutcome::AlreadyClicked);
        assert_eq!(*cell.color(), "blue");
        assert!(cell.is_clicked());
    }

    #[test]
    fn cell_constructed_clicked_rejects_first_click() {
        let mut cell = Cell::with_state(0, 0, "white", true);

        assert!(cell.on_click("black").is_rejected());
        assert_eq!(*cell.color(), "white");
        assert_eq!(cell.click_state(), ClickState::Clicked);
    }

    #[test]
    fn new_cell_is_unclicked_and_inert() {
        let cell = Cell::new(4, 1, Rgb::RED);

        assert_eq!(cell.click_state(), ClickState::Unclicked);
        assert_eq!((cell.x(), cell.y()), (4, 1));
        assert!(cell.animation().is_inert());
    }

    #[test]
    fn stop_animate_resets_everything_at_once() {
        let mut cell = Cell::new(1, 1, "red");
        flashing(&mut cell, 0.5, 5);

        assert!(cell.animation().is_enabled());
        assert_eq!(cell.animation().tick(), 5);
        assert_eq!(cell.animation().properties().get("opacity"), Some(0.5));

        cell.stop_animate();

        assert_eq!(*cell.animation(), AnimationState::default());
    }

    #[test]
    fn stop_animate_is_idempotent() {
        let mut cell = Cell::new(1, 1, "red");
        flashing(&mut cell, 1.0, 2);

        cell.stop_animate();
        let once = cell.clone();
        cell.stop_animate();
        cell.stop_animate();

        assert_eq!(cell, once);
        assert!(cell.animation().is_inert());
    }

    #[test]
    fn start_animate_replaces_stale_properties() {
        let mut cell = Cell::new(0, 0, "red");
        flashing(&mut cell, 0.5, 3);
        cell.set_animation_property("scale", 2.0).unwrap();

        let properties = AnimationProperties::try_from_iter([("opacity", 1.0)]).unwrap();
        cell.start_animate(properties);

        assert_eq!(cell.animation().tick(), 0);
        assert_eq!(cell.animation().properties().len(), 1);
        assert_eq!(cell.animation().properties().get("scale"), None);
    }

    #[test]
    fn set_animation_property_patches_running_animation() {
        let mut cell = Cell::new(0, 0, "red");
        assert_eq!(
            cell.set_animation_property("opacity", 1.0),
            Err(AnimationError::NotRunning)
        );

        flashing(&mut cell, 1.0, 0);
        assert_eq!(cell.set_animation_property("opacity", 0.75), Ok(Some(1.0)));
        assert_eq!(cell.animation().properties().get("opacity"), Some(0.75));
    }

    #[test]
    fn advance_animation_is_noop_when_stopped() {
        let mut cell = Cell::new(0, 0, "red");

        assert_eq!(cell.advance_animation(), None);
        assert!(cell.animation().is_inert());
    }

    #[test]
    fn click_and_animation_do_not_touch_each_other() {
        let mut cell = Cell::new(5, 5, "red");
        flashing(&mut cell, 0.5, 3);
        let animation = cell.animation().clone();

        assert_eq!(cell.on_click("blue"), ClickOutcome::Claimed);
        assert_eq!(*cell.animation(), animation);

        cell.stop_animate();
        assert_eq!(*cell.color(), "blue");
        assert!(cell.is_clicked());
    }

    #[test]
    fn cells_at_same_coords_are_independent() {
        let mut first = Cell::new(3, 3, "red");
        let second = Cell::new(3, 3, "red");

        first.on_click("blue");
        flashing(&mut first, 0.5, 1);

        assert!(!second.is_clicked());
        assert_eq!(*second.color(), "red");
        assert!(second.animation().is_inert());
    }

    #[test]
    fn random_sequences_keep_first_claimed_color() {
        const COLORS: [Rgb; 4] = [Rgb::RED, Rgb::GREEN, Rgb::BLUE, Rgb::BLACK];
        let mut rng = SmallRng::seed_from_u64(0x5eed);

        for _ in 0..64 {
            let mut cell = Cell::new(0, 0, Rgb::WHITE);
            let mut claimed: Option<Rgb> = None;

            for _ in 0..32 {
                match rng.random_range(0..4) {
                    0 => {
                        let color = COLORS[rng.random_range(0..COLORS.len())];
                        let animation = cell.animation().clone();
                        let outcome = cell.on_click(color);

                        assert_eq!(outcome.has_update(), claimed.is_none());
                        assert_eq!(*cell.animation(), animation);
                        claimed.get_or_insert(color);
                    }
                    1 => flashing(&mut cell, 0.5, rng.random_range(0..4)),
                    2 => {
                        cell.advance_animation();
                    }
                    _ => cell.stop_animate(),
                }

                assert_eq!(cell.is_clicked(), claimed.is_some());
                assert_eq!(*cell.color(), claimed.unwrap_or(Rgb::WHITE));
            }
        }
    }

    #[test]
    fn serializes_snapshot_with_animation() {
        let mut cell = Cell::new(1, 2, Rgb::RED);
        cell.on_click(Rgb::BLUE);
        flashing(&mut cell, 0.5, 1);

        let json = serde_json::to_string(&cell).unwrap();
        let restored: Cell<Rgb> = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, cell);
        assert!(json.contains("\"Clicked\""));
    }

    #[test]
    fn snapshot_with_stale_animation_is_rejected() {
        let json = r#"{"x":1,"y":2,"color":{"r":255,"g":0,"b":0},"state":"Unclicked",
            "animation":{"enabled":false,"tick":7,"properties":{"opacity":0.5}}}"#;

        assert!(serde_json::from_str::<Cell<Rgb>>(json).is_err());
    }
}
