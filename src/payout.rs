//! Payout calculation.
//!
//! Every hand is settled independently against the single dealer total.
//! Payouts include the returned stake, since stakes are taken from the
//! balance when they are placed.

extern crate alloc;

use alloc::vec::Vec;

use crate::hand::{DealerHand, Hand};
use crate::result::{HandOutcome, HandResult};

/// Returns the payout for a natural: 3:2 winnings, rounded down, plus the stake.
#[must_use]
pub const fn natural_payout(bet: usize) -> usize {
    bet * 3 / 2 + bet
}

/// Settles one hand against the dealer's final total.
#[must_use]
pub fn settle_hand(hand: &Hand, hand_index: usize, dealer_value: u8, base_bet: usize) -> HandResult {
    let bet = hand.wager(base_bet);
    let player_value = hand.value();

    let (outcome, payout) = if hand.is_natural() {
        (HandOutcome::Natural, natural_payout(bet))
    } else if player_value > 21 {
        (HandOutcome::Loss, 0)
    } else if dealer_value > 21 || player_value > dealer_value {
        (HandOutcome::Win, bet * 2)
    } else if player_value < dealer_value {
        (HandOutcome::Loss, 0)
    } else {
        (HandOutcome::Push, bet)
    };

    HandResult {
        hand_index,
        outcome,
        bet,
        payout,
        player_value,
        dealer_value,
        card_count: hand.len(),
    }
}

/// Settles all player hands against the dealer hand.
///
/// Returns the per-hand results and the total payout.
#[must_use]
pub fn settle(dealer: &DealerHand, hands: &[Hand], base_bet: usize) -> (Vec<HandResult>, usize) {
    let dealer_value = dealer.value();
    let results: Vec<HandResult> = hands
        .iter()
        .enumerate()
        .map(|(index, hand)| settle_hand(hand, index, dealer_value, base_bet))
        .collect();
    let total = results.iter().map(|r| r.payout).sum();
    (results, total)
}
