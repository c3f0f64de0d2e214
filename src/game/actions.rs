use crate::card::Card;
use crate::error::ActionError;
use crate::hand::Hand;
use crate::result::RoundResult;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn || self.active >= self.hands.len() {
            return Err(ActionError::InvalidPhase);
        }
        Ok(())
    }

    fn active_hand_mut(&mut self) -> Result<&mut Hand, ActionError> {
        self.hands
            .get_mut(self.active)
            .ok_or(ActionError::InvalidPhase)
    }

    fn deal_to_active(&mut self) -> Result<Card, ActionError> {
        let card = self.draw();
        self.active_hand_mut()?.add_card(card);
        Ok(card)
    }

    /// Moves past the active hand: to the next hand if there is one, otherwise
    /// ends the player's turn.
    ///
    /// When every hand has busted the dealer does not draw.
    fn finish_hand(&mut self) -> Option<RoundResult> {
        if self.active + 1 < self.hands.len() {
            self.active += 1;
            log::debug!("moving to hand {}", self.active);
            return None;
        }

        if self.hands.iter().all(Hand::is_bust) {
            log::debug!("all hands bust, dealer stands pat");
        } else {
            self.state = GameState::DealerTurn;
            self.dealer_play();
        }
        Some(self.settle())
    }

    /// Player action: Hit (draw a card into the active hand).
    ///
    /// A bust moves on to the next hand, or ends the round if it was the last.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidPhase`] outside the player's turn.
    pub fn hit(&mut self) -> Result<Option<RoundResult>, ActionError> {
        self.ensure_player_turn()?;

        self.deal_to_active()?;

        if self.active_hand_mut()?.is_bust() {
            return Ok(self.finish_hand());
        }
        Ok(None)
    }

    /// Player action: Stand (keep the active hand).
    ///
    /// After the last hand the dealer plays and the round is settled.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidPhase`] outside the player's turn.
    pub fn stand(&mut self) -> Result<Option<RoundResult>, ActionError> {
        self.ensure_player_turn()?;
        Ok(self.finish_hand())
    }

    /// Player action: Double down (one more base bet, exactly one card, then stand).
    ///
    /// # Errors
    ///
    /// Returns an error outside the player's turn, if the active hand is not a
    /// two-card 9, 10 or 11, or if the balance does not cover the extra stake.
    pub fn double_down(&mut self) -> Result<Option<RoundResult>, ActionError> {
        self.ensure_player_turn()?;

        if !self.active_hand_mut()?.can_double() {
            return Err(ActionError::CannotDouble);
        }

        if self.balance < self.base_bet {
            return Err(ActionError::InsufficientFunds);
        }

        self.balance -= self.base_bet;
        self.active_hand_mut()?.mark_doubled();
        let card = self.deal_to_active()?;
        log::debug!("hand {} doubled, drew {card}", self.active);

        Ok(self.finish_hand())
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// Charges one more base bet. Each half receives one new card, and play
    /// continues on the first of the two. One split is allowed per round.
    ///
    /// # Errors
    ///
    /// Returns an error outside the player's turn, if the active hand is not a
    /// pair, if the round was already split, or if the balance does not cover
    /// the extra stake.
    pub fn split(&mut self) -> Result<Option<RoundResult>, ActionError> {
        self.ensure_player_turn()?;

        if !self.active_hand_mut()?.can_split() {
            return Err(ActionError::CannotSplit);
        }

        if self.hands.len() > 1 {
            return Err(ActionError::SplitLimitReached);
        }

        if self.balance < self.base_bet {
            return Err(ActionError::InsufficientFunds);
        }

        let split_card = self
            .active_hand_mut()?
            .take_split_card()
            .ok_or(ActionError::CannotSplit)?;
        self.balance -= self.base_bet;

        let first = self.draw();
        self.active_hand_mut()?.add_card(first);

        let mut second_hand = Hand::from_split(split_card);
        let second = self.draw();
        second_hand.add_card(second);
        self.hands.insert(self.active + 1, second_hand);

        log::debug!("split into {} hands, balance {}", self.hands.len(), self.balance);
        Ok(None)
    }
}
