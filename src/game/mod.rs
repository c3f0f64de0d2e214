//! Round engine and state management.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::{DealerHand, Hand};
use crate::options::TableOptions;
use crate::profile::PlayerProfile;
use crate::result::{RoundResult, RoundSummary};
use crate::shoe::Shoe;
use crate::stats::Statistics;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{GameState, HandView, TableSnapshot};

/// Number of settled rounds kept in [`Game::history`].
pub const HISTORY_LIMIT: usize = 20;

/// A single-player blackjack table that runs one round at a time.
///
/// The game owns the shoe, the round's hands, the player's balance and their
/// running statistics. Every action runs to completion; an action that ends
/// the round returns the settled [`RoundResult`].
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards in the shoe.
    shoe: Shoe,
    /// Table options.
    options: TableOptions,
    /// Current round phase.
    state: GameState,
    /// Player hands for this round (more than one after a split).
    hands: Vec<Hand>,
    /// Dealer's hand.
    dealer_hand: DealerHand,
    /// Index of the hand being played.
    active: usize,
    /// Base bet for this round.
    base_bet: usize,
    /// Player balance, stakes already deducted.
    balance: usize,
    /// Running statistics.
    stats: Statistics,
    /// Cards drawn from the shoe this round.
    drawn: Vec<Card>,
    /// Set when the balance can no longer cover the minimum bet.
    game_over: bool,
    /// Result of the last settled round.
    last_result: Option<RoundResult>,
    /// Recent rounds, newest first.
    history: VecDeque<RoundSummary>,
}

impl Game {
    /// Creates a game for the given profile with a shoe shuffled from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Game, GameState, PlayerProfile, TableOptions};
    ///
    /// let game = Game::new(PlayerProfile::new(100), TableOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Betting);
    /// assert_eq!(game.balance(), 100);
    /// ```
    #[must_use]
    pub fn new(profile: PlayerProfile, options: TableOptions, seed: u64) -> Self {
        Self {
            shoe: Shoe::new(seed),
            options,
            state: GameState::Betting,
            hands: Vec::new(),
            dealer_hand: DealerHand::new(),
            active: 0,
            base_bet: 0,
            game_over: profile.balance < options.min_bet,
            balance: profile.balance,
            stats: profile.stats,
            drawn: Vec::new(),
            last_result: None,
            history: VecDeque::with_capacity(HISTORY_LIMIT),
        }
    }

    /// Draws a card from the shoe and records it for the round's statistics.
    fn draw(&mut self) -> Card {
        let card = self.shoe.draw();
        self.drawn.push(card);
        log::debug!("drew {card}");
        card
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the player's balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the base bet of the current or last round.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.base_bet
    }

    /// Returns the player's hands.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the index of the hand being played.
    #[must_use]
    pub const fn active_hand_index(&self) -> usize {
        self.active
    }

    /// Returns the hand being played, if a round is in progress.
    #[must_use]
    pub fn active_hand(&self) -> Option<&Hand> {
        if self.state == GameState::PlayerTurn {
            self.hands.get(self.active)
        } else {
            None
        }
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the running statistics.
    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Returns the balance and statistics as a profile.
    #[must_use]
    pub fn profile(&self) -> PlayerProfile {
        PlayerProfile {
            balance: self.balance,
            stats: self.stats.clone(),
        }
    }

    /// Returns whether no further rounds may start.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Returns the result of the last settled round.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns up to [`HISTORY_LIMIT`] recent rounds, newest first.
    pub fn history(&self) -> impl Iterator<Item = &RoundSummary> + '_ {
        self.history.iter()
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns the shoe, for stacking known cards.
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }

    /// Returns whether the active hand may be doubled right now.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.active_hand()
            .is_some_and(|hand| hand.can_double() && self.balance >= self.base_bet)
    }

    /// Returns whether the active hand may be split right now.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.hands.len() == 1
            && self
                .active_hand()
                .is_some_and(|hand| hand.can_split() && self.balance >= self.base_bet)
    }

    /// Replaces the balance, e.g. after a top-up, and clears the game-over flag
    /// if the new balance covers the minimum bet.
    pub const fn reset_balance(&mut self, balance: usize) {
        self.balance = balance;
        self.game_over = balance < self.options.min_bet;
    }

    /// Clears the settled round and returns to betting.
    ///
    /// Does nothing while a round is in progress.
    pub fn clear_round(&mut self) {
        if matches!(self.state, GameState::PlayerTurn | GameState::DealerTurn) {
            return;
        }
        self.hands.clear();
        self.dealer_hand.clear();
        self.drawn.clear();
        self.active = 0;
        self.state = GameState::Betting;
    }

    /// Returns a view of the table with the hole card hidden until revealed.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            phase: self.state,
            dealer_cards: self.dealer_hand.visible_cards().to_vec(),
            dealer_value: self.dealer_hand.visible_value(),
            dealer_hand_visible: self.dealer_hand.is_hole_revealed(),
            player_hands: self.hands.iter().map(HandView::from).collect(),
            active_hand_index: self.active,
            balance: self.balance,
            current_bet: self.base_bet,
            game_over: self.game_over,
            message: None,
        }
    }
}
