//! First-class invariants for the move history.
//!
//! Invariants are logical properties that must hold after every move.
//! They are testable independently and checked in debug builds.

use super::GameState;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every
    /// violation found.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod active_step_in_range;
pub mod alternating_marks;
pub mod genesis_empty;
pub mod single_square_delta;

pub use active_step_in_range::ActiveStepInRange;
pub use alternating_marks::AlternatingMarks;
pub use genesis_empty::GenesisEmpty;
pub use single_square_delta::SingleSquareDelta;

/// All history invariants as a composable set.
pub type TimelineInvariants = (
    GenesisEmpty,
    SingleSquareDelta,
    AlternatingMarks,
    ActiveStepInRange,
);

/// Asserts that all history invariants hold (panics on violation in debug builds).
#[instrument(skip(game))]
pub fn assert_invariants(game: &GameState) {
    debug_assert!(
        TimelineInvariants::check_all(game)
            .inspect_err(|violations| warn!(?violations, "History invariant violated"))
            .is_ok(),
        "History invariants violated"
    );
}
