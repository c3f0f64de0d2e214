//! Cumulative player statistics.

use crate::card::{Card, RANKS};
use crate::result::{HandOutcome, HandResult};

/// Running statistics for one player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Statistics {
    /// Hands settled, split hands counted separately.
    pub hands_played: u32,
    /// Hands won, naturals included.
    pub wins: u32,
    /// Hands lost.
    pub losses: u32,
    /// Hands pushed.
    pub pushes: u32,
    /// Naturals dealt.
    pub naturals: u32,
    /// Consecutive winning hands up to now.
    pub current_win_streak: u32,
    /// Longest run of winning hands.
    pub best_win_streak: u32,
    /// Consecutive losing hands up to now.
    pub current_loss_streak: u32,
    /// Longest run of losing hands.
    pub best_loss_streak: u32,
    /// Sum of all stakes, doubled stakes counted in full.
    pub total_wagered: usize,
    /// Times each rank was drawn, indexed by `rank - 1`.
    pub rank_counts: [u32; 13],
    /// Rank drawn most often, if any card has been counted.
    pub most_drawn_rank: Option<u8>,
    /// Hands of five or more cards that did not bust.
    pub charlies: u32,
}

impl Statistics {
    /// Creates empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one settled round into the running totals.
    ///
    /// `hands` are the round's per-hand results in table order and `drawn`
    /// every card that left the shoe during the round.
    pub fn record_round(&mut self, hands: &[HandResult], drawn: &[Card]) {
        for hand in hands {
            self.record_hand(hand);
        }
        self.record_draws(drawn);
    }

    fn record_hand(&mut self, hand: &HandResult) {
        self.hands_played += 1;
        self.total_wagered += hand.bet;

        if hand.outcome.is_win() {
            self.wins += 1;
            if hand.outcome == HandOutcome::Natural {
                self.naturals += 1;
            }
            self.current_win_streak += 1;
            self.current_loss_streak = 0;
            self.best_win_streak = self.best_win_streak.max(self.current_win_streak);
        } else if hand.outcome == HandOutcome::Push {
            // A push breaks both streaks.
            self.pushes += 1;
            self.current_win_streak = 0;
            self.current_loss_streak = 0;
        } else {
            self.losses += 1;
            self.current_loss_streak += 1;
            self.current_win_streak = 0;
            self.best_loss_streak = self.best_loss_streak.max(self.current_loss_streak);
        }

        if hand.card_count >= crate::hand::CHARLIE_CARDS && !hand.is_bust() {
            self.charlies += 1;
        }
    }

    fn record_draws(&mut self, drawn: &[Card]) {
        if drawn.is_empty() {
            return;
        }
        for card in drawn {
            if let Some(count) = (card.rank as usize)
                .checked_sub(1)
                .and_then(|i| self.rank_counts.get_mut(i))
            {
                *count += 1;
            }
        }
        self.most_drawn_rank = self.compute_most_drawn();
    }

    /// Argmax over the rank table in canonical order; the first maximum wins ties.
    fn compute_most_drawn(&self) -> Option<u8> {
        let mut best: Option<(u8, u32)> = None;
        for (rank, &count) in RANKS.iter().zip(self.rank_counts.iter()) {
            if count == 0 {
                continue;
            }
            if best.is_none_or(|(_, top)| count > top) {
                best = Some((*rank, count));
            }
        }
        best.map(|(rank, _)| rank)
    }

    /// Returns how often the given rank has been drawn.
    #[must_use]
    pub fn draws_of(&self, rank: u8) -> u32 {
        (rank as usize)
            .checked_sub(1)
            .and_then(|i| self.rank_counts.get(i))
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn result(outcome: HandOutcome, bet: usize, value: u8, cards: usize) -> HandResult {
        HandResult {
            hand_index: 0,
            outcome,
            bet,
            payout: 0,
            player_value: value,
            dealer_value: 18,
            card_count: cards,
        }
    }

    #[test]
    fn empty_round_changes_nothing() {
        let mut stats = Statistics::new();
        stats.record_round(&[result(HandOutcome::Win, 10, 20, 2)], &[Card::new(Suit::Clubs, 7)]);
        let before = stats.clone();

        stats.record_round(&[], &[]);
        assert_eq!(stats, before);
    }

    #[test]
    fn streaks_track_runs_and_push_resets_both() {
        let mut stats = Statistics::new();
        let win = result(HandOutcome::Win, 10, 20, 2);
        let loss = result(HandOutcome::Loss, 10, 17, 2);
        let push = result(HandOutcome::Push, 10, 18, 2);

        stats.record_round(&[win, win, win], &[]);
        assert_eq!(stats.current_win_streak, 3);
        assert_eq!(stats.best_win_streak, 3);

        stats.record_round(&[loss, loss], &[]);
        assert_eq!(stats.current_win_streak, 0);
        assert_eq!(stats.current_loss_streak, 2);
        assert_eq!(stats.best_loss_streak, 2);

        stats.record_round(&[push], &[]);
        assert_eq!(stats.current_win_streak, 0);
        assert_eq!(stats.current_loss_streak, 0);
        assert_eq!(stats.best_win_streak, 3);
        assert_eq!(stats.best_loss_streak, 2);

        assert_eq!(stats.hands_played, 6);
        assert_eq!((stats.wins, stats.losses, stats.pushes), (3, 2, 1));
        assert_eq!(stats.total_wagered, 60);
    }

    #[test]
    fn naturals_count_as_wins() {
        let mut stats = Statistics::new();
        stats.record_round(&[result(HandOutcome::Natural, 10, 21, 2)], &[]);
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.naturals, 1);
        assert_eq!(stats.current_win_streak, 1);
    }

    #[test]
    fn charlies_exclude_busts() {
        let mut stats = Statistics::new();
        stats.record_round(
            &[
                result(HandOutcome::Win, 10, 21, 5),
                result(HandOutcome::Loss, 10, 24, 6),
                result(HandOutcome::Loss, 10, 19, 5),
            ],
            &[],
        );
        assert_eq!(stats.charlies, 2);
    }

    #[test]
    fn most_drawn_rank_breaks_ties_by_rank_order() {
        let mut stats = Statistics::new();
        assert_eq!(stats.most_drawn_rank, None);

        stats.record_round(
            &[],
            &[
                Card::new(Suit::Clubs, 13),
                Card::new(Suit::Hearts, 13),
                Card::new(Suit::Clubs, 4),
                Card::new(Suit::Spades, 4),
            ],
        );
        assert_eq!(stats.most_drawn_rank, Some(4));
        assert_eq!(stats.draws_of(13), 2);

        stats.record_round(&[], &[Card::new(Suit::Diamonds, 13)]);
        assert_eq!(stats.most_drawn_rank, Some(13));
    }
}
