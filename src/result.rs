//! Round result types for settlement.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses (player busts or dealer has higher value).
    Loss,
    /// Push (tie).
    Push,
    /// Player was dealt a natural.
    Natural,
}

impl HandOutcome {
    /// Returns whether the outcome counts as a win for streaks and totals.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win | Self::Natural)
    }
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The stake on this hand (doubled hands carry twice the base bet).
    pub bet: usize,
    /// The amount credited back to the balance, stake included.
    pub payout: usize,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
    /// Number of cards in the hand.
    pub card_count: usize,
}

impl HandResult {
    /// Returns the winnings on top of the returned stake.
    #[must_use]
    pub const fn winnings(&self) -> usize {
        self.payout.saturating_sub(self.bet)
    }

    /// Returns whether the hand went over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.player_value > 21
    }
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.hand_index + 1;
        let (bet, won, paid) = (self.bet, self.winnings(), self.payout);
        match self.outcome {
            HandOutcome::Natural => {
                write!(f, "Natural! You win ${won} + your ${bet} bet back = ${paid}!")
            }
            HandOutcome::Loss if self.is_bust() => write!(f, "Hand {n}: Bust! Lost ${bet}"),
            HandOutcome::Loss => write!(f, "Hand {n}: Dealer wins. Lost ${bet}"),
            HandOutcome::Win if self.dealer_value > 21 => write!(
                f,
                "Hand {n}: Dealer busts! You win ${won} + your ${bet} bet back = ${paid}!"
            ),
            HandOutcome::Win => write!(
                f,
                "Hand {n}: You win ${won} + your ${bet} bet back = ${paid}!"
            ),
            HandOutcome::Push => write!(f, "Hand {n}: Push! Your ${bet} bet returned."),
        }
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RoundResult {
    /// Results for each player hand, in table order.
    pub hands: Vec<HandResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Total staked across all hands this round.
    pub total_bet: usize,
    /// Total credited back to the balance.
    pub total_payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// Balance after the payout was credited.
    pub balance: usize,
    /// Whether the balance fell below the table minimum.
    pub game_over: bool,
}

impl RoundResult {
    /// Returns the per-hand outcomes in table order.
    pub fn outcomes(&self) -> impl Iterator<Item = HandOutcome> + '_ {
        self.hands.iter().map(|hand| hand.outcome)
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, hand) in self.hands.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{hand}")?;
        }
        Ok(())
    }
}

/// One line of table history: the final cards and the first result line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RoundSummary {
    /// The dealer's final cards.
    pub dealer_cards: Vec<Card>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Each player hand's cards, in table order.
    pub player_hands: Vec<Vec<Card>>,
    /// The first hand's result line.
    pub headline: String,
}

fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{card}")?;
    }
    Ok(())
}

impl fmt::Display for RoundSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Dealer: ")?;
        write_cards(f, &self.dealer_cards)?;
        write!(f, " ({}) | You: ", self.dealer_value)?;
        for (i, hand) in self.player_hands.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write_cards(f, hand)?;
        }
        write!(f, " | {}", self.headline)
    }
}
