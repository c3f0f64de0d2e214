use crate::error::BetError;
use crate::hand::Hand;
use crate::result::RoundResult;

use super::{Game, GameState};

impl Game {
    /// Takes the bet and deals a new round.
    ///
    /// The shoe is reshuffled first if it has fallen below the reshuffle
    /// threshold. Cards go player, dealer, player, dealer. A natural settles
    /// the round on the spot and its result is returned; otherwise the round
    /// moves to the player's turn and `None` is returned.
    ///
    /// Valid in [`GameState::Betting`], or in [`GameState::Settled`], which is
    /// cleared first.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, the game is over, the bet is
    /// below the table minimum, or the balance does not cover it. The last case
    /// also ends the game.
    pub fn start_round(&mut self, amount: usize) -> Result<Option<RoundResult>, BetError> {
        if matches!(self.state, GameState::PlayerTurn | GameState::DealerTurn) {
            return Err(BetError::InvalidPhase);
        }

        if self.game_over {
            return Err(BetError::GameOver);
        }

        if amount < self.options.min_bet {
            return Err(BetError::BelowMinimum {
                minimum: self.options.min_bet,
            });
        }

        if self.balance < amount {
            log::info!("balance {} cannot cover bet {amount}, game over", self.balance);
            self.game_over = true;
            return Err(BetError::InsufficientFunds);
        }

        self.clear_round();

        if self.shoe.reshuffle_if_below(self.options.reshuffle_threshold) {
            log::info!("shoe below {} cards, reshuffled", self.options.reshuffle_threshold);
        }

        self.balance -= amount;
        self.base_bet = amount;
        self.hands.push(Hand::new());

        for _ in 0..2 {
            let card = self.draw();
            self.hands[0].add_card(card);
            let card = self.draw();
            self.dealer_hand.add_card(card);
        }

        self.active = 0;
        self.state = GameState::PlayerTurn;
        log::info!("round started with bet {amount}, balance {}", self.balance);

        if self.hands[0].is_natural() {
            log::debug!("natural dealt, settling immediately");
            return Ok(Some(self.settle()));
        }

        Ok(None)
    }
}
