use alloc::string::ToString;

use crate::payout;
use crate::result::{RoundResult, RoundSummary};

use super::{Game, GameState, HISTORY_LIMIT};

impl Game {
    /// Reveals the hole card and draws until the dealer reaches 17 or more.
    ///
    /// A soft 17 stands.
    pub(super) fn dealer_play(&mut self) {
        self.dealer_hand.reveal_hole();

        while self.dealer_hand.must_draw() {
            let card = self.draw();
            self.dealer_hand.add_card(card);
        }

        log::debug!("dealer finishes on {}", self.dealer_hand.value());
    }

    /// Pays out every hand, folds the round into the statistics and moves to
    /// [`GameState::Settled`].
    pub(super) fn settle(&mut self) -> RoundResult {
        self.dealer_hand.reveal_hole();

        let (hands, total_payout) = payout::settle(&self.dealer_hand, &self.hands, self.base_bet);
        let total_bet: usize = hands.iter().map(|hand| hand.bet).sum();

        self.balance += total_payout;
        self.game_over = self.balance < self.options.min_bet;

        self.stats.record_round(&hands, &self.drawn);

        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
        let net = total_payout as isize - total_bet as isize;

        let result = RoundResult {
            hands,
            dealer_value: self.dealer_hand.value(),
            dealer_bust: self.dealer_hand.is_bust(),
            total_bet,
            total_payout,
            net,
            balance: self.balance,
            game_over: self.game_over,
        };

        self.state = GameState::Settled;
        log::info!(
            "round settled: payout {total_payout}, net {net}, balance {}",
            self.balance
        );
        if self.game_over {
            log::info!("balance below minimum bet, game over");
        }

        self.record_history(&result);
        self.last_result = Some(result.clone());
        result
    }

    fn record_history(&mut self, result: &RoundResult) {
        let summary = RoundSummary {
            dealer_cards: self.dealer_hand.cards().to_vec(),
            dealer_value: result.dealer_value,
            player_hands: self.hands.iter().map(|hand| hand.cards().to_vec()).collect(),
            headline: result
                .hands
                .first()
                .map(ToString::to_string)
                .unwrap_or_default(),
        };
        self.history.push_front(summary);
        self.history.truncate(HISTORY_LIMIT);
    }
}
