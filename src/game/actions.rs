use alloc::format;

use tracing::{debug, info};

use crate::error::ActionError;
use crate::hand::Seat;
use crate::pacing::Pacer;
use crate::presentation::{AvailableActions, Command, Presentation};
use crate::result::Outcome;

use super::{Action, Game, GameState};

impl<P: Presentation, C: Pacer> Game<P, C> {
    pub(super) fn enter_player_turn(&mut self) {
        self.transition(GameState::PlayerTurn);
        self.update_available_actions();
    }

    /// Returns the actions the player may take right now.
    ///
    /// Everything is disabled outside [`GameState::PlayerTurn`]. Hit and
    /// stand are enabled unless the hand is bust; double needs exactly two
    /// cards and funds to match the stake; split needs a pair and the same
    /// funds.
    pub fn available_actions(&self) -> AvailableActions {
        if self.state != GameState::PlayerTurn {
            return AvailableActions::default();
        }

        let busted = self.player_hand.is_busted();
        let can_match_stake = self.ledger.can_afford(self.current_bet);
        AvailableActions {
            can_hit: !busted,
            can_stand: !busted,
            can_double: self.player_hand.len() == 2 && can_match_stake && !busted,
            can_split: self.player_hand.can_split() && can_match_stake,
        }
    }

    fn update_available_actions(&mut self) {
        let actions = self.available_actions();
        self.emit(Command::UpdateAvailableActions(actions));
    }

    /// Applies a player decision.
    ///
    /// Ignored outside [`GameState::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::CannotDouble`] unless a double is made on a
    /// two-card hand, a ledger error if the balance cannot match a doubled
    /// stake, [`ActionError::CannotSplit`] for a split on a non-pair,
    /// [`ActionError::Unimplemented`] for a split on a pair, or a shoe error
    /// if the shoe ran dry (the round is then voided).
    pub fn player_action(&mut self, action: Action) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            self.ignored("player_action");
            return Ok(());
        }

        debug!(?action, total = self.player_hand.best_total(), "player action");
        match action {
            Action::Hit => self.hit(),
            Action::Stand => self.stand(),
            Action::Double => self.double_down(),
            Action::Split => self.split(),
        }
    }

    /// Draws a card. A bust settles the round at once; reaching 21 stands
    /// automatically.
    fn hit(&mut self) -> Result<(), ActionError> {
        let card = match self.shoe.draw() {
            Ok(card) => card,
            Err(err) => {
                self.void_round(err);
                return Err(err.into());
            }
        };
        self.deal_card(Seat::Player, card);

        let total = self.player_hand.best_total();
        if total > 21 {
            self.message("Busted! You lose.");
            self.resolve(Outcome::Bust);
            Ok(())
        } else if total == 21 {
            self.stand()
        } else {
            self.update_available_actions();
            Ok(())
        }
    }

    fn stand(&mut self) -> Result<(), ActionError> {
        self.message(format!(
            "You stand with {}",
            self.player_hand.best_total()
        ));
        self.transition(GameState::DealerTurn);
        self.dealer_turn()?;
        Ok(())
    }

    /// Doubles the stake, draws exactly one card, then stands. Only a
    /// two-card hand may double.
    fn double_down(&mut self) -> Result<(), ActionError> {
        if self.player_hand.len() != 2 {
            return Err(ActionError::CannotDouble);
        }

        if let Err(err) = self.ledger.place_bet(self.current_bet) {
            self.message(format!("Cannot double: {err}"));
            return Err(err.into());
        }
        self.current_bet *= 2.0;
        info!(bet = self.current_bet, "doubled down");
        self.emit(Command::DisplayBet(self.current_bet));
        self.emit(Command::DisplayBankroll(self.ledger.balance()));

        let card = match self.shoe.draw() {
            Ok(card) => card,
            Err(err) => {
                self.void_round(err);
                return Err(err.into());
            }
        };
        self.deal_card(Seat::Player, card);

        let total = self.player_hand.best_total();
        if total > 21 {
            self.message("Busted! You lose.");
            self.resolve(Outcome::Bust);
        } else {
            self.message(format!("Doubled down. Standing with {total}"));
            self.transition(GameState::DealerTurn);
            self.dealer_turn()?;
        }
        Ok(())
    }

    /// Split hands are not played at this table: a pair is answered with
    /// [`ActionError::Unimplemented`] and the hand is left as it was.
    fn split(&mut self) -> Result<(), ActionError> {
        if !self.player_hand.can_split() {
            return Err(ActionError::CannotSplit);
        }

        debug!(pair = %self.player_hand, stake = self.current_bet, "split requested");
        self.message("Split not yet implemented");
        Err(ActionError::Unimplemented)
    }
}
