use alloc::format;
use alloc::string::String;

use tracing::info;

use crate::error::ShoeError;
use crate::hand::Seat;
use crate::pacing::Pacer;
use crate::presentation::{Command, Presentation};
use crate::result::{Outcome, RoundResult};

use super::{Game, GameState, dollars};

/// Dealer draws below this total.
const DEALER_STAND_VALUE: u8 = 17;

impl<P: Presentation, C: Pacer> Game<P, C> {
    /// Dealer plays their hand: reveal the hole card, then draw until
    /// reaching 17 or more.
    ///
    /// Soft 17 stands unless the table is configured to hit it.
    pub(super) fn dealer_turn(&mut self) -> Result<(), ShoeError> {
        self.reveal_dealer();
        self.pacer.pause(self.options.reveal_delay);

        while self.dealer_should_hit() {
            self.pacer.pause(self.options.dealer_draw_delay);
            let card = match self.shoe.draw() {
                Ok(card) => card,
                Err(err) => {
                    self.void_round(err);
                    return Err(err);
                }
            };
            self.deal_card(Seat::Dealer, card);
        }

        self.compare_hands();
        Ok(())
    }

    fn dealer_should_hit(&self) -> bool {
        let total = self.dealer_hand.best_total();
        total < DEALER_STAND_VALUE
            || (total == DEALER_STAND_VALUE
                && self.dealer_hand.is_soft()
                && !self.options.stand_on_soft_17)
    }

    fn compare_hands(&mut self) {
        let player_total = self.player_hand.best_total();
        let dealer_total = self.dealer_hand.best_total();

        let outcome = if dealer_total > 21 {
            self.message("Dealer busts! You win!");
            Outcome::Win
        } else if player_total > dealer_total {
            self.message(format!("You win! {player_total} vs {dealer_total}"));
            Outcome::Win
        } else if player_total == dealer_total {
            self.message("Push - it's a tie!");
            Outcome::Push
        } else {
            self.message(format!("Dealer wins. {dealer_total} vs {player_total}"));
            Outcome::Loss
        };

        self.resolve(outcome);
    }

    /// Settles the stake, shows the outcome banner and completes the round.
    pub(super) fn resolve(&mut self, outcome: Outcome) {
        self.transition(GameState::ResolvingBets);

        let bet = self.current_bet;
        let settlement = outcome.settle(
            bet,
            self.options.blackjack_pays,
            self.options.rounding_blackjack,
        );
        if settlement.credit > 0.0 {
            self.credit(settlement.credit);
        }

        let player_total = self.player_hand.best_total();
        let dealer_total = self.dealer_hand.best_total();
        let (message, detail) = match outcome {
            Outcome::Blackjack => {
                self.ledger.record_win(settlement.net);
                (
                    format!("Blackjack! You win {}!", dollars(settlement.net)),
                    format!(
                        "You win {} ({}:1 payout)",
                        dollars(settlement.net),
                        self.options.blackjack_pays
                    ),
                )
            }
            Outcome::Win => {
                self.ledger.record_win(settlement.net);
                (
                    format!("You win {}!", dollars(settlement.net)),
                    format!(
                        "{} • Player: {player_total} vs Dealer: {dealer_total}",
                        dollars(settlement.net)
                    ),
                )
            }
            Outcome::Push => {
                self.ledger.record_push();
                (
                    String::from("Push - Bet returned"),
                    format!("Tie at {player_total} • Bet returned"),
                )
            }
            Outcome::Bust => {
                self.ledger.record_loss(bet);
                (
                    format!("Busted! You lose {}", dollars(bet)),
                    format!("Lost {} • Over 21", dollars(bet)),
                )
            }
            Outcome::Loss => {
                self.ledger.record_loss(bet);
                (
                    format!("You lose {}", dollars(bet)),
                    format!(
                        "Lost {} • Player: {player_total} vs Dealer: {dealer_total}",
                        dollars(bet)
                    ),
                )
            }
        };

        let (insurance_bet, insurance_payout) = self.insurance_settled;
        let result = RoundResult {
            outcome,
            bet,
            payout: settlement.credit,
            insurance_bet,
            insurance_payout,
            net: settlement.net + insurance_payout - insurance_bet,
            player_total,
            dealer_total,
            dealer_blackjack: self.dealer_hand.is_blackjack(),
        };
        info!(
            ?outcome,
            bet,
            payout = result.payout,
            net = result.net,
            player_total,
            dealer_total,
            balance = self.ledger.balance(),
            "round settled"
        );
        self.last_result = Some(result);

        self.message(message);
        self.emit(Command::DisplayBankroll(self.ledger.balance()));
        self.emit(Command::ShowOutcome {
            outcome,
            title: outcome.title().into(),
            detail,
        });

        self.pacer.pause(self.options.outcome_delay);
        self.transition(GameState::RoundComplete);
        self.complete_round();
    }

    /// Records the stake for repeat betting, clears the table and reopens
    /// betting, unless the bankroll is exhausted.
    fn complete_round(&mut self) {
        self.last_bet = self.current_bet;
        self.current_bet = 0.0;
        self.clear_insurance();
        self.shoe.discard_hand(&mut self.player_hand);
        self.shoe.discard_hand(&mut self.dealer_hand);

        if self.ledger.is_broke() {
            info!("bankroll exhausted");
            self.message("Out of money! Game Over.");
            self.transition(GameState::GameOver);
            return;
        }

        self.emit(Command::ClearHands);
        self.emit(Command::DisplayBet(0.0));
        self.transition(GameState::WaitingForBet);
        self.emit(Command::EnableBetting);
        self.emit_repeat_bet();
        self.message("Place your bet for the next round");
    }
}
