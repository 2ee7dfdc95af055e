use alloc::format;

use tracing::{debug, info};

use crate::error::InsuranceError;
use crate::hand::Seat;
use crate::pacing::Pacer;
use crate::presentation::{Command, Presentation};
use crate::result::Outcome;

use super::{Game, GameState, dollars};

impl<P: Presentation, C: Pacer> Game<P, C> {
    /// Returns whether insurance is currently being offered.
    pub fn is_insurance_offered(&self) -> bool {
        self.state == GameState::OfferingInsurance
    }

    /// Insurance stake for the current bet: half of it.
    pub fn insurance_amount(&self) -> f64 {
        self.current_bet / 2.0
    }

    /// Offers insurance, or declines it on the player's behalf when the
    /// stake is unaffordable.
    pub(super) fn offer_insurance(&mut self) {
        let amount = self.insurance_amount();
        if self.ledger.can_afford(amount) {
            self.emit(Command::OfferInsurance(amount));
        } else {
            debug!(amount, "insurance unaffordable, declined automatically");
            self.has_insurance = false;
            self.transition(GameState::CheckingBlackjack);
            self.check_blackjack();
        }
    }

    /// Takes or declines insurance, then runs the blackjack check.
    ///
    /// Ignored outside [`GameState::OfferingInsurance`].
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger rejects the stake; the offer stays open
    /// so the player can still decline.
    pub fn insurance_decision(&mut self, take: bool) -> Result<(), InsuranceError> {
        if self.state != GameState::OfferingInsurance {
            self.ignored("insurance_decision");
            return Ok(());
        }

        if take {
            let amount = self.insurance_amount();
            if let Err(err) = self.ledger.place_bet(amount) {
                self.message(format!("{err}"));
                return Err(err.into());
            }
            self.insurance_bet = amount;
            self.has_insurance = true;
            info!(amount, "insurance taken");
            self.message(format!("Insurance placed: {}", dollars(amount)));
            self.emit(Command::DisplayBankroll(self.ledger.balance()));
        } else {
            self.has_insurance = false;
        }

        self.transition(GameState::CheckingBlackjack);
        self.check_blackjack();
        Ok(())
    }

    /// Whether the up-card could complete a dealer natural.
    fn dealer_shows_blackjack_possibility(&self) -> bool {
        self.dealer_hand
            .up_card()
            .is_some_and(|card| card.is_ace() || card.is_ten_value())
    }

    /// Peeks for naturals. The hole card is only revealed when a natural on
    /// either side ends the round here.
    pub(super) fn check_blackjack(&mut self) {
        let player_blackjack = self.player_hand.is_blackjack();

        if !self.dealer_shows_blackjack_possibility() {
            if player_blackjack {
                self.message("Blackjack! You win 3:2!");
                self.resolve(Outcome::Blackjack);
            } else {
                self.enter_player_turn();
            }
            return;
        }

        let dealer_blackjack = self.dealer_hand.is_blackjack();
        if self.has_insurance {
            self.resolve_insurance(dealer_blackjack);
        }

        match (player_blackjack, dealer_blackjack) {
            (true, true) => {
                self.reveal_dealer();
                self.message("Both have Blackjack! Push.");
                self.resolve(Outcome::Push);
            }
            (true, false) => {
                self.reveal_dealer();
                self.message("Blackjack! You win 3:2!");
                self.resolve(Outcome::Blackjack);
            }
            (false, true) => {
                self.reveal_dealer();
                self.message("Dealer has Blackjack. You lose.");
                self.resolve(Outcome::Loss);
            }
            (false, false) => self.enter_player_turn(),
        }
    }

    /// Settles the insurance side bet: 2:1 on a dealer natural, otherwise
    /// the already-debited stake is forfeited.
    fn resolve_insurance(&mut self, dealer_blackjack: bool) {
        let stake = self.insurance_bet;
        let payout = if dealer_blackjack { stake * 3.0 } else { 0.0 };

        if dealer_blackjack {
            self.credit(payout);
            self.message(format!("Insurance pays 2:1! Won {}", dollars(stake * 2.0)));
            self.emit(Command::DisplayBankroll(self.ledger.balance()));
        } else {
            self.message(format!("Insurance lost: {}", dollars(stake)));
        }
        info!(stake, payout, "insurance settled");

        self.insurance_bet = 0.0;
        self.has_insurance = false;
        self.insurance_settled = (stake, payout);
    }

    pub(super) fn reveal_dealer(&mut self) {
        self.dealer_hand.reveal_hole();
        self.render_hand(Seat::Dealer);
    }
}
