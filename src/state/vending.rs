use super::Transition;
use crate::console::MessageSink;
use crate::error::{normalize_tag, PatternError};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VendingState {
    #[default]
    NoCoin,
    HasCoin,
}

impl VendingState {
    pub fn insert_coin(self) -> Transition<Self> {
        match self {
            VendingState::NoCoin => {
                Transition::to(VendingState::HasCoin, "Coin inserted. Please select an item.")
            }
            VendingState::HasCoin => Transition::to(self, "Coin already inserted."),
        }
    }

    pub fn eject_coin(self) -> Transition<Self> {
        match self {
            VendingState::NoCoin => Transition::to(self, "No coin to eject."),
            VendingState::HasCoin => Transition::to(VendingState::NoCoin, "Coin ejected."),
        }
    }

    pub fn dispense_item(self) -> Transition<Self> {
        match self {
            VendingState::NoCoin => Transition::to(self, "Please insert a coin first."),
            VendingState::HasCoin => {
                Transition::to(VendingState::NoCoin, "Item dispensed. Thank you!")
            }
        }
    }

    pub fn apply(self, action: VendingAction) -> Transition<Self> {
        match action {
            VendingAction::InsertCoin => self.insert_coin(),
            VendingAction::EjectCoin => self.eject_coin(),
            VendingAction::DispenseItem => self.dispense_item(),
        }
    }
}

impl fmt::Display for VendingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VendingState::NoCoin => write!(f, "NoCoin"),
            VendingState::HasCoin => write!(f, "HasCoin"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum VendingAction {
    InsertCoin,
    EjectCoin,
    DispenseItem,
}

impl VendingAction {
    pub const ALL: [VendingAction; 3] = [
        VendingAction::InsertCoin,
        VendingAction::EjectCoin,
        VendingAction::DispenseItem,
    ];
}

impl fmt::Display for VendingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VendingAction::InsertCoin => write!(f, "insert-coin"),
            VendingAction::EjectCoin => write!(f, "eject-coin"),
            VendingAction::DispenseItem => write!(f, "dispense-item"),
        }
    }
}

impl FromStr for VendingAction {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_tag(s).as_str() {
            "insertcoin" | "insert" => Ok(VendingAction::InsertCoin),
            "ejectcoin" | "eject" => Ok(VendingAction::EjectCoin),
            "dispenseitem" | "dispense" => Ok(VendingAction::DispenseItem),
            _ => Err(PatternError::unknown_action("vending", s)),
        }
    }
}

impl TryFrom<String> for VendingAction {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Vending machine context. Starts with no coin and never terminates.
pub struct VendingMachine<S: MessageSink> {
    state: VendingState,
    history: Vec<VendingState>,
    sink: S,
}

impl<S: MessageSink> VendingMachine<S> {
    pub fn new(sink: S) -> Self {
        let state = VendingState::default();
        Self {
            state,
            history: vec![state],
            sink,
        }
    }

    pub fn state(&self) -> VendingState {
        self.state
    }

    /// States entered so far, beginning with the initial one.
    pub fn history(&self) -> &[VendingState] {
        &self.history
    }

    pub fn insert_coin(&mut self) -> VendingState {
        self.perform(VendingAction::InsertCoin)
    }

    pub fn eject_coin(&mut self) -> VendingState {
        self.perform(VendingAction::EjectCoin)
    }

    pub fn dispense_item(&mut self) -> VendingState {
        self.perform(VendingAction::DispenseItem)
    }

    pub fn perform(&mut self, action: VendingAction) -> VendingState {
        let transition = self.state.apply(action);
        if transition.changes(&self.state) {
            tracing::debug!(
                from = %self.state,
                to = %transition.next,
                action = %action,
                "vending machine transition"
            );
            self.history.push(transition.next);
        } else {
            tracing::debug!(state = %self.state, action = %action, "vending action ignored");
        }

        self.state = transition.next;
        self.sink.emit(transition.message);
        self.state
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
