//! State: allow an object to alter its behaviour when its internal state
//! changes.
//!
//! Each state set is a closed enum. A state answers every operation with a
//! [`Transition`]: the state to install next plus the message explaining what
//! happened. Operations a state does not support are not errors; they return
//! the same state with a "cannot"/"already" message.
//!
//! - [`vending`]: a coin-operated vending machine that cycles forever
//! - [`approval`]: a document workflow with two absorbing end states

pub mod approval;
pub mod vending;

pub use approval::{ApprovalAction, ApprovalState, Document};
pub use vending::{VendingAction, VendingMachine, VendingState};

/// Result of routing one operation to a state handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition<S> {
    pub next: S,
    pub message: &'static str,
}

impl<S: PartialEq> Transition<S> {
    pub fn to(next: S, message: &'static str) -> Self {
        Self { next, message }
    }

    /// Whether applying this transition moves a context away from `from`.
    pub fn changes(&self, from: &S) -> bool {
        self.next != *from
    }
}
