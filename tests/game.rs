//! Round engine integration tests.

use bjtable::{
    ActionError, BetError, Card, DECK_SIZE, Game, GameState, HISTORY_LIMIT, HandOutcome,
    PlayerProfile, Suit, TableOptions,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Builds a game whose shoe yields `draws` first. Deals go player, dealer, player, dealer.
fn game_with(balance: usize, draws: &[Card]) -> Game {
    let mut game = Game::new(PlayerProfile::new(balance), TableOptions::default(), 7);
    game.shoe_mut().stack(draws);
    game
}

#[test]
fn natural_settles_at_three_to_two() {
    let mut game = game_with(
        100,
        &[
            card(Suit::Spades, 1),   // player
            card(Suit::Diamonds, 9), // dealer up
            card(Suit::Hearts, 13),  // player
            card(Suit::Clubs, 7),    // dealer hole
        ],
    );

    let result = game.start_round(10).unwrap().expect("natural settles");
    assert_eq!(game.state(), GameState::Settled);
    assert_eq!(result.hands[0].outcome, HandOutcome::Natural);
    assert_eq!(result.total_payout, 25);
    assert_eq!(game.balance(), 115);

    // Dealer does not draw on a natural.
    assert_eq!(game.dealer_hand().len(), 2);
    assert!(game.dealer_hand().is_hole_revealed());
    assert_eq!(result.dealer_value, 16);
    assert_eq!(game.stats().naturals, 1);
}

#[test]
fn dealer_bust_pays_double_the_bet() {
    let mut game = game_with(
        100,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 6),    // dealer up
            card(Suit::Diamonds, 8), // player
            card(Suit::Spades, 10),  // dealer hole
            card(Suit::Hearts, 7),   // dealer draw
        ],
    );

    assert!(game.start_round(10).unwrap().is_none());
    assert_eq!(game.balance(), 90);
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert!(!game.dealer_hand().is_hole_revealed());

    let result = game.stand().unwrap().expect("single hand settles on stand");
    assert!(result.dealer_bust);
    assert_eq!(result.dealer_value, 23);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.hands[0].payout, 20);
    assert_eq!(result.net, 10);
    assert_eq!(game.balance(), 110);
}

#[test]
fn push_returns_the_stake() {
    let mut game = game_with(
        100,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 13),
            card(Suit::Diamonds, 12),
            card(Suit::Spades, 11),
        ],
    );

    game.start_round(10).unwrap();
    let result = game.stand().unwrap().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Push);
    assert_eq!(result.total_payout, 10);
    assert_eq!(result.net, 0);
    assert_eq!(game.balance(), 100);
}

#[test]
fn dealer_stands_on_soft_seventeen() {
    let mut game = game_with(
        100,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 1),
            card(Suit::Diamonds, 9),
            card(Suit::Spades, 6),
        ],
    );

    game.start_round(10).unwrap();
    let result = game.stand().unwrap().unwrap();
    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
}

#[test]
fn split_charges_one_more_bet_and_plays_hands_in_order() {
    let mut game = game_with(
        100,
        &[
            card(Suit::Spades, 8),   // player
            card(Suit::Diamonds, 7), // dealer up
            card(Suit::Hearts, 8),   // player
            card(Suit::Clubs, 10),   // dealer hole
            card(Suit::Diamonds, 3), // first split hand
            card(Suit::Hearts, 10),  // second split hand
            card(Suit::Spades, 9),   // hit on first hand
        ],
    );

    game.start_round(10).unwrap();
    assert!(game.can_split());
    assert!(game.split().unwrap().is_none());

    assert_eq!(game.balance(), 80);
    assert_eq!(game.hands().len(), 2);
    assert_eq!(game.hands()[0].len(), 2);
    assert_eq!(game.hands()[1].len(), 2);
    assert_eq!(game.hands()[0].value(), 11);
    assert_eq!(game.hands()[1].value(), 18);
    assert_eq!(game.active_hand_index(), 0);

    game.hit().unwrap();
    assert_eq!(game.hands()[0].value(), 20);

    assert!(game.stand().unwrap().is_none());
    assert_eq!(game.active_hand_index(), 1);

    let result = game.stand().unwrap().unwrap();
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.hands.len(), 2);
    assert!(result.outcomes().all(|o| o == HandOutcome::Win));
    assert_eq!(result.total_bet, 20);
    assert_eq!(result.total_payout, 40);
    assert_eq!(game.balance(), 120);
}

#[test]
fn split_bust_moves_on_to_the_next_hand() {
    let mut game = game_with(
        100,
        &[
            card(Suit::Spades, 8),
            card(Suit::Diamonds, 7),
            card(Suit::Hearts, 8),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 5), // first split hand: 13
            card(Suit::Hearts, 2),   // second split hand: 10
            card(Suit::Spades, 13),  // first hand busts
        ],
    );

    game.start_round(10).unwrap();
    game.split().unwrap();

    assert!(game.hit().unwrap().is_none());
    assert!(game.hands()[0].is_bust());
    assert_eq!(game.active_hand_index(), 1);
    assert_eq!(game.state(), GameState::PlayerTurn);

    let result = game.stand().unwrap().unwrap();
    let outcomes: Vec<_> = result.outcomes().collect();
    assert_eq!(outcomes, [HandOutcome::Loss, HandOutcome::Loss]);
    assert_eq!(game.balance(), 80);
}

#[test]
fn last_split_hand_busting_still_plays_the_dealer() {
    let mut game = game_with(
        100,
        &[
            card(Suit::Spades, 8),
            card(Suit::Diamonds, 10),
            card(Suit::Hearts, 8),
            card(Suit::Clubs, 6),
            card(Suit::Hearts, 10),  // first split hand: 18
            card(Suit::Hearts, 7),   // second split hand: 15
            card(Suit::Spades, 10),  // second hand busts
            card(Suit::Clubs, 12),   // dealer draws to 26
        ],
    );

    game.start_round(10).unwrap();
    game.split().unwrap();
    assert!(game.stand().unwrap().is_none());
    assert_eq!(game.active_hand_index(), 1);

    let result = game.hit().unwrap().expect("last hand settles the round");
    assert_eq!(game.state(), GameState::Settled);
    assert_eq!(game.dealer_hand().len(), 3);
    assert_eq!(result.dealer_value, 26);
    assert!(result.dealer_bust);

    let outcomes: Vec<_> = result.outcomes().collect();
    assert_eq!(outcomes, [HandOutcome::Win, HandOutcome::Loss]);
    assert_eq!(result.hands[0].dealer_value, 26);
    assert_eq!(result.hands[0].payout, 20);
    assert_eq!(result.hands[1].player_value, 25);
    assert_eq!(result.hands[1].payout, 0);
    assert_eq!(game.balance(), 100);
}

#[test]
fn all_hands_bust_skips_the_dealer() {
    let mut game = game_with(
        100,
        &[
            card(Suit::Spades, 9),
            card(Suit::Diamonds, 6),
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 9), // first split hand: 18
            card(Suit::Hearts, 8),   // second split hand: 17
            card(Suit::Spades, 10),  // first hand busts
            card(Suit::Clubs, 10),   // second hand busts
        ],
    );

    game.start_round(10).unwrap();
    game.split().unwrap();
    assert!(game.hit().unwrap().is_none());

    let result = game.hit().unwrap().expect("last bust settles");
    assert_eq!(game.state(), GameState::Settled);
    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(result.dealer_value, 11);
    assert_eq!(result.total_payout, 0);
    assert_eq!(game.balance(), 80);
}

#[test]
fn single_hand_bust_settles_without_dealer_play() {
    let mut game = game_with(
        100,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 6),
            card(Suit::Spades, 6),
            card(Suit::Hearts, 12),
        ],
    );

    game.start_round(10).unwrap();
    let result = game.hit().unwrap().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Loss);
    assert_eq!(result.hands[0].player_value, 26);
    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(game.balance(), 90);
}

#[test]
fn split_rejected_for_non_pairs_and_second_splits() {
    let mut game = game_with(
        100,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 13),
            card(Suit::Spades, 6),
        ],
    );
    game.start_round(10).unwrap();
    assert!(!game.can_split());
    assert_eq!(game.split().unwrap_err(), ActionError::CannotSplit);

    let mut game = game_with(
        100,
        &[
            card(Suit::Spades, 8),
            card(Suit::Diamonds, 7),
            card(Suit::Hearts, 8),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 8), // first split hand pairs again
            card(Suit::Hearts, 3),
        ],
    );
    game.start_round(10).unwrap();
    game.split().unwrap();
    assert!(game.hands()[0].can_split());
    assert!(!game.can_split());
    assert_eq!(game.split().unwrap_err(), ActionError::SplitLimitReached);
    assert_eq!(game.balance(), 80);
}

#[test]
fn split_declined_without_funds() {
    let mut game = game_with(
        15,
        &[
            card(Suit::Spades, 8),
            card(Suit::Diamonds, 7),
            card(Suit::Hearts, 8),
            card(Suit::Clubs, 10),
        ],
    );
    game.start_round(10).unwrap();
    assert_eq!(game.split().unwrap_err(), ActionError::InsufficientFunds);
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.hands().len(), 1);
    assert_eq!(game.balance(), 5);
}

#[test]
fn double_down_charges_once_and_draws_one_card() {
    let mut game = game_with(
        100,
        &[
            card(Suit::Hearts, 6),   // player
            card(Suit::Clubs, 9),    // dealer up
            card(Suit::Diamonds, 4), // player
            card(Suit::Spades, 8),   // dealer hole
            card(Suit::Hearts, 10),  // double draw
        ],
    );

    game.start_round(10).unwrap();
    assert!(game.can_double());
    let result = game.double_down().unwrap().expect("single hand settles");

    let hand = &game.hands()[0];
    assert_eq!(hand.len(), 3);
    assert!(hand.is_doubled());
    assert_eq!(result.hands[0].bet, 20);
    assert_eq!(result.hands[0].payout, 40);
    assert_eq!(game.balance(), 120);
    assert_eq!(game.stats().total_wagered, 20);
}

#[test]
fn double_down_on_first_split_hand_moves_to_second() {
    let mut game = game_with(
        100,
        &[
            card(Suit::Spades, 5),
            card(Suit::Diamonds, 10),
            card(Suit::Hearts, 5),
            card(Suit::Clubs, 8),
            card(Suit::Diamonds, 6), // first split hand: 11
            card(Suit::Hearts, 9),   // second split hand: 14
            card(Suit::Spades, 10),  // double draw: 21
        ],
    );

    game.start_round(10).unwrap();
    game.split().unwrap();
    assert!(game.double_down().unwrap().is_none());
    assert_eq!(game.balance(), 70);
    assert_eq!(game.active_hand_index(), 1);

    let result = game.stand().unwrap().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.hands[0].payout, 40);
    assert_eq!(result.hands[1].outcome, HandOutcome::Loss);
    assert_eq!(game.balance(), 110);
}

#[test]
fn double_down_rejected_outside_nine_to_eleven() {
    let mut game = game_with(
        100,
        &[
            card(Suit::Hearts, 5),
            card(Suit::Clubs, 2),
            card(Suit::Diamonds, 3),
            card(Suit::Spades, 7),
        ],
    );

    game.start_round(10).unwrap();
    assert!(!game.can_double());
    assert_eq!(game.double_down().unwrap_err(), ActionError::CannotDouble);
    assert_eq!(game.balance(), 90);
    assert_eq!(game.state(), GameState::PlayerTurn);

    game.hit().unwrap();
    assert_eq!(game.double_down().unwrap_err(), ActionError::CannotDouble);
}

#[test]
fn double_down_declined_without_funds() {
    let mut game = game_with(
        15,
        &[
            card(Suit::Hearts, 6),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 4),
            card(Suit::Spades, 8),
        ],
    );

    game.start_round(10).unwrap();
    assert_eq!(game.double_down().unwrap_err(), ActionError::InsufficientFunds);
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.hands()[0].len(), 2);
}

#[test]
fn actions_outside_player_turn_are_rejected() {
    let mut game = game_with(100, &[]);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(game.double_down().unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(game.split().unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(game.balance(), 100);

    let mut game = game_with(
        100,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 8),
        ],
    );
    game.start_round(10).unwrap();
    assert_eq!(game.start_round(10).unwrap_err(), BetError::InvalidPhase);

    game.stand().unwrap();
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidPhase);
}

#[test]
fn bet_errors() {
    let mut game = game_with(20, &[]);
    assert_eq!(
        game.start_round(4).unwrap_err(),
        BetError::BelowMinimum { minimum: 5 }
    );
    assert!(!game.is_game_over());

    assert_eq!(game.start_round(30).unwrap_err(), BetError::InsufficientFunds);
    assert!(game.is_game_over());
    assert_eq!(game.start_round(5).unwrap_err(), BetError::GameOver);
    assert_eq!(game.balance(), 20);

    game.reset_balance(100);
    assert!(!game.is_game_over());
    assert!(game.start_round(5).is_ok());
}

#[test]
fn losing_below_minimum_ends_the_game() {
    let mut game = game_with(
        10,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 9),
        ],
    );

    game.start_round(10).unwrap();
    let result = game.stand().unwrap().unwrap();
    assert_eq!(result.balance, 0);
    assert!(result.game_over);
    assert!(game.is_game_over());
    assert_eq!(game.start_round(5).unwrap_err(), BetError::GameOver);
}

#[test]
fn reshuffles_before_deal_when_shoe_runs_low() {
    let mut game = Game::new(PlayerProfile::new(100), TableOptions::default(), 3);
    while game.cards_remaining() >= 15 {
        game.shoe_mut().draw();
    }

    game.start_round(10).unwrap();
    assert_eq!(game.cards_remaining(), DECK_SIZE - 4);
}

#[test]
fn hit_survives_an_empty_shoe() {
    let options = TableOptions::default().with_reshuffle_threshold(0);
    let mut game = Game::new(PlayerProfile::new(100), options, 5);
    while game.cards_remaining() > 0 {
        game.shoe_mut().draw();
    }
    game.shoe_mut().stack(&[
        card(Suit::Hearts, 2),
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 3),
        card(Suit::Spades, 7),
    ]);

    game.start_round(10).unwrap();
    assert_eq!(game.cards_remaining(), 0);

    game.hit().unwrap();
    assert_eq!(game.hands()[0].len(), 3);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 1);
    assert_eq!(game.shoe_mut().reshuffles(), 1);
}

#[test]
fn rounds_chain_and_feed_statistics() {
    let mut game = game_with(
        100,
        &[
            // Round 1: win with a five-card hand.
            card(Suit::Hearts, 2),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 3),
            card(Suit::Spades, 7),
            card(Suit::Hearts, 2),
            card(Suit::Clubs, 4),
            card(Suit::Diamonds, 8),
            // Round 2: push.
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 9),
            card(Suit::Spades, 9),
        ],
    );

    game.start_round(10).unwrap();
    game.hit().unwrap();
    game.hit().unwrap();
    game.hit().unwrap();
    assert_eq!(game.hands()[0].value(), 19);
    let result = game.stand().unwrap().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(game.stats().charlies, 1);
    assert_eq!(game.stats().current_win_streak, 1);

    let drawn: u32 = game.stats().rank_counts.iter().sum();
    assert_eq!(drawn, 7);
    assert_eq!(game.stats().most_drawn_rank, Some(2));

    // Settled rolls straight into the next round.
    game.start_round(10).unwrap();
    let result = game.stand().unwrap().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Push);

    let stats = game.stats();
    assert_eq!(stats.hands_played, 2);
    assert_eq!((stats.wins, stats.pushes), (1, 1));
    assert_eq!(stats.current_win_streak, 0);
    assert_eq!(stats.best_win_streak, 1);
    assert_eq!(stats.total_wagered, 20);
    assert_eq!(game.balance(), 110);
}

#[test]
fn snapshot_hides_the_hole_card_until_the_dealer_plays() {
    let mut game = game_with(
        100,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 8),
        ],
    );

    game.start_round(10).unwrap();
    let snapshot = game.snapshot();
    assert_eq!(snapshot.phase, GameState::PlayerTurn);
    assert_eq!(snapshot.dealer_cards, [card(Suit::Clubs, 9)]);
    assert_eq!(snapshot.dealer_value, 9);
    assert!(!snapshot.dealer_hand_visible);
    assert_eq!(snapshot.player_hands[0].value, 17);
    assert_eq!(snapshot.current_bet, 10);
    assert_eq!(snapshot.balance, 90);

    game.stand().unwrap();
    let snapshot = game.snapshot();
    assert_eq!(snapshot.phase, GameState::Settled);
    assert_eq!(snapshot.dealer_cards.len(), 2);
    assert_eq!(snapshot.dealer_value, 17);
    assert!(snapshot.dealer_hand_visible);
}

#[test]
fn history_keeps_recent_rounds_newest_first() {
    let mut game = game_with(
        10_000,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 8),
            card(Suit::Spades, 8),
        ],
    );
    assert_eq!(game.history().count(), 0);

    game.start_round(10).unwrap();
    game.stand().unwrap().unwrap();

    let first = game.history().next().unwrap().to_string();
    assert_eq!(
        first,
        "Dealer: 9\u{2663} 8\u{2660} (17) | You: 10\u{2665} 8\u{2666} | Hand 1: You win $10 + your $10 bet back = $20!"
    );

    let mut settled = vec![game.history().next().unwrap().clone()];
    for round in 0..HISTORY_LIMIT {
        game.start_round(10).unwrap();
        if game.state() == GameState::PlayerTurn {
            game.stand().unwrap();
        }
        let newest = game.history().next().unwrap();
        assert_eq!(
            newest.headline,
            game.last_result().unwrap().hands[0].to_string()
        );
        settled.push(newest.clone());
        assert_eq!(game.history().count(), (round + 2).min(HISTORY_LIMIT));
    }

    let kept: Vec<_> = game.history().cloned().collect();
    let expected: Vec<_> = settled.iter().rev().take(HISTORY_LIMIT).cloned().collect();
    assert_eq!(kept, expected);
    assert_ne!(kept.last().unwrap().to_string(), first);
}
