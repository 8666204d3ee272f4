//! Dialog state per chat user.

use serde::{Deserialize, Serialize};

use crate::domain::schedule::WeightProfile;

/// Where a user is in the calculation dialog.
///
/// - `Menu`: main menu shown; a menu button or a bare weight is expected
/// - `AwaitingStartDate`: weight accepted, a `DD.MM.YYYY` date is expected
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DialogState {
    #[default]
    Menu,

    AwaitingStartDate { profile: WeightProfile },
}

impl DialogState {
    /// Returns true if the next text message is read as a start date.
    pub fn expects_date(&self) -> bool {
        matches!(self, DialogState::AwaitingStartDate { .. })
    }

    /// Weight profile collected so far, if any.
    pub fn pending_profile(&self) -> Option<&WeightProfile> {
        match self {
            DialogState::AwaitingStartDate { profile } => Some(profile),
            DialogState::Menu => None,
        }
    }
}
