//! The states with hot ZIP rules, and their band tables.

use crate::band::Band;

const WA_HOT: [Band; 3] = [
    Band::new(98_600, 98_699),
    Band::new(98_810, 98_899),
    Band::new(99_080, 99_459),
];
const OR_HOT: [Band; 1] = [Band::new(97_000, 97_999)];
const CA_HOT: [Band; 1] = [Band::new(95_500, 95_509)];
const ID_HOT: [Band; 1] = [Band::new(83_500, 83_899)];

/// A state that has hot ZIP bands.
///
/// This is the closed set the game draws from. Codes outside it parse to
/// `None` and classify as not hot, so an unsupported state is unrepresentable
/// past this boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotState {
    Wa,
    Or,
    Ca,
    Id,
}

impl HotState {
    /// Every hot state, in the order uniform picks index into.
    pub const ALL: [HotState; 4] = [HotState::Wa, HotState::Or, HotState::Ca, HotState::Id];

    /// The two-letter postal code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            HotState::Wa => "WA",
            HotState::Or => "OR",
            HotState::Ca => "CA",
            HotState::Id => "ID",
        }
    }

    /// Parses an exact uppercase postal code. No trimming, no case folding.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "WA" => Some(HotState::Wa),
            "OR" => Some(HotState::Or),
            "CA" => Some(HotState::Ca),
            "ID" => Some(HotState::Id),
            _ => None,
        }
    }

    /// The bands whose numbers are hot for this state.
    #[must_use]
    pub const fn hot_bands(self) -> &'static [Band] {
        match self {
            HotState::Wa => &WA_HOT,
            HotState::Or => &OR_HOT,
            HotState::Ca => &CA_HOT,
            HotState::Id => &ID_HOT,
        }
    }

    /// The full span a practice draw for this state can land in.
    ///
    /// Invariant: strictly wider than the state's hot bands combined, so a
    /// cold number always exists. Rejection sampling relies on this.
    #[must_use]
    pub const fn valid_space(self) -> Band {
        match self {
            HotState::Wa => Band::new(98_000, 99_499),
            HotState::Or => Band::new(96_000, 97_999),
            HotState::Ca => Band::new(90_000, 96_199),
            HotState::Id => Band::new(83_200, 83_899),
        }
    }
}
