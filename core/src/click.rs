use serde::{Deserialize, Serialize};

/// Interaction state of a cell. `Clicked` is terminal: nothing moves a cell back to `Unclicked`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickState {
    Unclicked,
    Clicked,
}

impl ClickState {
    pub const fn is_clicked(self) -> bool {
        matches!(self, Self::Clicked)
    }

    /// Applies a click, returning the state after it and whether it took effect.
    pub const fn click(self) -> (Self, ClickOutcome) {
        match self {
            Self::Unclicked => (Self::Clicked, ClickOutcome::Claimed),
            Self::Clicked => (Self::Clicked, ClickOutcome::AlreadyClicked),
        }
    }
}

impl Default for ClickState {
    fn default() -> Self {
        Self::Unclicked
    }
}

impl From<bool> for ClickState {
    fn from(clicked: bool) -> Self {
        if clicked {
            Self::Clicked
        } else {
            Self::Unclicked
        }
    }
}

/// Result of clicking a cell. Exactly one click per cell is ever `Claimed`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    Claimed,
    AlreadyClicked,
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Claimed => true,
            Self::AlreadyClicked => false,
        }
    }

    pub const fn is_rejected(self) -> bool {
        !self.has_update()
    }
}
