//! Commands sent from the engine to whatever renders the table.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::game::GameState;
use crate::hand::Seat;
use crate::result::Outcome;

/// Which player actions are currently enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AvailableActions {
    /// Hit is enabled.
    pub can_hit: bool,
    /// Stand is enabled.
    pub can_stand: bool,
    /// Double down is enabled.
    pub can_double: bool,
    /// Split is enabled.
    pub can_split: bool,
}

/// A display instruction issued by the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Redraw a whole hand.
    RenderHand {
        /// Whose hand.
        seat: Seat,
        /// The cards, face-down cards included.
        cards: Vec<Card>,
        /// Total of the face-up cards.
        total: u8,
    },
    /// Append one card to a hand.
    AddCard {
        /// Whose hand.
        seat: Seat,
        /// The new card.
        card: Card,
    },
    /// Update a hand's displayed total.
    UpdateTotal {
        /// Whose hand.
        seat: Seat,
        /// The new total.
        total: u8,
    },
    /// Show a status line.
    DisplayMessage(String),
    /// Show the bankroll.
    DisplayBankroll(f64),
    /// Show the current stake.
    DisplayBet(f64),
    /// Enable or disable the action controls.
    UpdateAvailableActions(AvailableActions),
    /// Offer insurance for the given stake.
    OfferInsurance(f64),
    /// Show the outcome banner.
    ShowOutcome {
        /// The outcome.
        outcome: Outcome,
        /// Banner title.
        title: String,
        /// Banner detail line.
        detail: String,
    },
    /// The engine entered a new state.
    UpdateGameState(GameState),
    /// A bet is on the table and the deal control may be enabled.
    EnableDeal,
    /// Betting controls may be enabled.
    EnableBetting,
    /// Remove both hands from the table.
    ClearHands,
    /// Enable or disable the repeat-bet control.
    UpdateRepeatBet {
        /// Whether the previous bet can be repeated.
        enabled: bool,
        /// The previous bet.
        amount: f64,
    },
}

/// Receiver of engine display commands.
///
/// The engine calls [`apply`](Self::apply) synchronously and never reads
/// anything back.
pub trait Presentation {
    /// Handles one command.
    fn apply(&mut self, command: Command);
}

/// Presentation that ignores every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl Presentation for Headless {
    fn apply(&mut self, _command: Command) {}
}

/// Records every command, in order.
impl Presentation for Vec<Command> {
    fn apply(&mut self, command: Command) {
        self.push(command);
    }
}

impl<P: Presentation + ?Sized> Presentation for &mut P {
    fn apply(&mut self, command: Command) {
        (**self).apply(command);
    }
}
