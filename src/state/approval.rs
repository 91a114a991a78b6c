use super::Transition;
use crate::console::MessageSink;
use crate::error::{normalize_tag, PatternError};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Document approval workflow. `Approved` and `Rejected` are absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApprovalState {
    #[default]
    Draft,
    PendingApproval,
    Approved,
    Rejected,
}

impl ApprovalState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ApprovalState::Approved | ApprovalState::Rejected)
    }

    pub fn submit_for_approval(self) -> Transition<Self> {
        match self {
            ApprovalState::Draft => Transition::to(
                ApprovalState::PendingApproval,
                "Submitting document for approval.",
            ),
            ApprovalState::PendingApproval => {
                Transition::to(self, "Document is already pending approval.")
            }
            ApprovalState::Approved => {
                Transition::to(self, "Cannot submit an approved document for approval.")
            }
            ApprovalState::Rejected => {
                Transition::to(self, "Cannot submit a rejected document for approval.")
            }
        }
    }

    pub fn approve(self) -> Transition<Self> {
        match self {
            ApprovalState::Draft => Transition::to(self, "Cannot approve a draft document."),
            ApprovalState::PendingApproval => {
                Transition::to(ApprovalState::Approved, "Approving document.")
            }
            ApprovalState::Approved => Transition::to(self, "Document is already approved."),
            ApprovalState::Rejected => Transition::to(self, "Cannot approve a rejected document."),
        }
    }

    pub fn reject(self) -> Transition<Self> {
        match self {
            ApprovalState::Draft => Transition::to(self, "Cannot reject a draft document."),
            ApprovalState::PendingApproval => {
                Transition::to(ApprovalState::Rejected, "Rejecting document.")
            }
            ApprovalState::Approved => Transition::to(self, "Cannot reject an approved document."),
            ApprovalState::Rejected => Transition::to(self, "Document is already rejected."),
        }
    }

    pub fn apply(self, action: ApprovalAction) -> Transition<Self> {
        match action {
            ApprovalAction::Submit => self.submit_for_approval(),
            ApprovalAction::Approve => self.approve(),
            ApprovalAction::Reject => self.reject(),
        }
    }
}

impl fmt::Display for ApprovalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApprovalState::Draft => "Draft",
            ApprovalState::PendingApproval => "PendingApproval",
            ApprovalState::Approved => "Approved",
            ApprovalState::Rejected => "Rejected",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum ApprovalAction {
    Submit,
    Approve,
    Reject,
}

impl ApprovalAction {
    pub const ALL: [ApprovalAction; 3] = [
        ApprovalAction::Submit,
        ApprovalAction::Approve,
        ApprovalAction::Reject,
    ];
}

impl fmt::Display for ApprovalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApprovalAction::Submit => write!(f, "submit"),
            ApprovalAction::Approve => write!(f, "approve"),
            ApprovalAction::Reject => write!(f, "reject"),
        }
    }
}

impl FromStr for ApprovalAction {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_tag(s).as_str() {
            "submit" | "submitforapproval" => Ok(ApprovalAction::Submit),
            "approve" => Ok(ApprovalAction::Approve),
            "reject" => Ok(ApprovalAction::Reject),
            _ => Err(PatternError::unknown_action("approval", s)),
        }
    }
}

impl TryFrom<String> for ApprovalAction {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

pub struct Document<S: MessageSink> {
    state: ApprovalState,
    history: Vec<ApprovalState>,
    sink: S,
}

impl<S: MessageSink> Document<S> {
    pub fn new(sink: S) -> Self {
        let state = ApprovalState::default();
        Self {
            state,
            history: vec![state],
            sink,
        }
    }

    pub fn state(&self) -> ApprovalState {
        self.state
    }

    pub fn history(&self) -> &[ApprovalState] {
        &self.history
    }

    pub fn submit_for_approval(&mut self) -> ApprovalState {
        self.perform(ApprovalAction::Submit)
    }

    pub fn approve(&mut self) -> ApprovalState {
        self.perform(ApprovalAction::Approve)
    }

    pub fn reject(&mut self) -> ApprovalState {
        self.perform(ApprovalAction::Reject)
    }

    pub fn perform(&mut self, action: ApprovalAction) -> ApprovalState {
        let transition = self.state.apply(action);
        self.sink.emit(transition.message);

        if transition.changes(&self.state) {
            tracing::debug!(
                from = %self.state,
                to = %transition.next,
                action = %action,
                terminal = transition.next.is_terminal(),
                "document transition"
            );
            self.history.push(transition.next);
            self.state = transition.next;
        } else {
            tracing::debug!(state = %self.state, action = %action, "document action ignored");
        }
        self.state
    }

    pub fn print_status(&mut self) {
        let status = format!("Document is {}", self.state);
        self.sink.emit(&status);
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;
    use proptest::prelude::*;

    #[test]
    fn test_submit_then_approve() {
        let mut document = Document::new(Transcript::new());
        assert_eq!(document.submit_for_approval(), ApprovalState::PendingApproval);
        assert_eq!(document.approve(), ApprovalState::Approved);
        assert!(document.state().is_terminal());
        assert_eq!(
            document.history(),
            [
                ApprovalState::Draft,
                ApprovalState::PendingApproval,
                ApprovalState::Approved
            ]
        );
    }

    #[test]
    fn test_submit_then_reject() {
        let mut document = Document::new(Transcript::new());
        document.submit_for_approval();
        assert_eq!(document.reject(), ApprovalState::Rejected);
        assert_eq!(
            document.into_sink().lines(),
            ["Submitting document for approval.", "Rejecting document."]
        );
    }

    #[test]
    fn test_draft_cannot_be_decided() {
        let mut document = Document::new(Transcript::new());
        assert_eq!(document.approve(), ApprovalState::Draft);
        assert_eq!(document.reject(), ApprovalState::Draft);
        assert_eq!(document.history(), [ApprovalState::Draft]);
        assert_eq!(
            document.into_sink().lines(),
            ["Cannot approve a draft document.", "Cannot reject a draft document."]
        );
    }

    #[test]
    fn test_source_demo_with_status() {
        let mut document = Document::new(Transcript::new());
        document.print_status();
        document.submit_for_approval();
        document.print_status();
        document.approve();
        document.print_status();
        document.reject();
        document.print_status();

        // The late reject is refused: an approved document stays approved.
        assert_eq!(
            document.into_sink().lines(),
            [
                "Document is Draft",
                "Submitting document for approval.",
                "Document is PendingApproval",
                "Approving document.",
                "Document is Approved",
                "Cannot reject an approved document.",
                "Document is Approved",
            ]
        );
    }

    #[test]
    fn test_pending_resubmit_is_noop() {
        let mut document = Document::new(Transcript::new());
        document.submit_for_approval();
        assert_eq!(document.submit_for_approval(), ApprovalState::PendingApproval);
        assert_eq!(
            document.into_sink().last(),
            Some("Document is already pending approval.")
        );
    }

    #[test]
    fn test_action_parsing() {
        assert_eq!(
            "submit-for-approval".parse::<ApprovalAction>().unwrap(),
            ApprovalAction::Submit
        );
        assert_eq!("APPROVE".parse::<ApprovalAction>().unwrap(), ApprovalAction::Approve);
        let err = "shred".parse::<ApprovalAction>().unwrap_err();
        assert_eq!(err.to_string(), "unknown approval action: 'shred'");
    }

    fn any_action() -> impl Strategy<Value = ApprovalAction> {
        prop::sample::select(ApprovalAction::ALL.to_vec())
    }

    fn terminal_state() -> impl Strategy<Value = ApprovalState> {
        prop_oneof![Just(ApprovalState::Approved), Just(ApprovalState::Rejected)]
    }

    proptest! {
        #[test]
        fn test_terminal_states_absorb(
            start in terminal_state(),
            actions in prop::collection::vec(any_action(), 1..32),
        ) {
            let mut state = start;
            for action in actions {
                let transition = state.apply(action);
                prop_assert_eq!(transition.next, start);
                state = transition.next;
            }
        }

        #[test]
        fn test_history_only_grows_on_change(
            actions in prop::collection::vec(any_action(), 0..32),
        ) {
            let mut document = Document::new(Transcript::new());
            let mut changes = 0;
            for action in &actions {
                let before = document.state();
                if document.perform(*action) != before {
                    changes += 1;
                }
            }

            // Draft -> Pending -> terminal is the longest possible path.
            prop_assert!(changes <= 2);
            prop_assert_eq!(document.history().len(), changes + 1);
            prop_assert_eq!(document.into_sink().len(), actions.len());
        }
    }
}
