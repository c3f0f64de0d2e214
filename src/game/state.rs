//! Game state types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum GameState {
    /// Waiting for a bet to start the next round.
    #[default]
    Betting,
    /// Waiting for player actions on the active hand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has been paid out.
    Settled,
}

/// A player hand as shown at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HandView {
    /// Cards in the hand.
    pub cards: Vec<Card>,
    /// Hand total.
    pub value: u8,
    /// Whether the stake on this hand was doubled.
    pub doubled: bool,
}

impl From<&Hand> for HandView {
    fn from(hand: &Hand) -> Self {
        Self {
            cards: hand.cards().to_vec(),
            value: hand.value(),
            doubled: hand.is_doubled(),
        }
    }
}

/// Everything the presentation layer needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TableSnapshot {
    /// Current phase.
    pub phase: GameState,
    /// Dealer cards the player may see.
    pub dealer_cards: Vec<Card>,
    /// Total of the visible dealer cards.
    pub dealer_value: u8,
    /// Whether the hole card is showing.
    pub dealer_hand_visible: bool,
    /// Player hands in table order.
    pub player_hands: Vec<HandView>,
    /// Index of the hand being played.
    pub active_hand_index: usize,
    /// Player balance.
    pub balance: usize,
    /// Base bet of the current or last round.
    pub current_bet: usize,
    /// Whether no further rounds may start.
    pub game_over: bool,
    /// Settlement lines or the reason an action was declined.
    pub message: Option<String>,
}
