//! Game integration tests.

use blackjack::{
    Action, ActionError, BetError, Card, DealError, Deck, DeckError, Game, GameState, HandStatus,
    Rank, ReshuffleError, RoundOutcome, RoundingMode, ShowdownError, Suit, TableOptions,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// A game that deals `draws` in order: dealer up, dealer hole, two player
/// cards, then whatever is drawn after that.
fn stacked_game(options: TableOptions, draws: &[Card]) -> Game {
    Game::with_deck(options, Deck::from_cards(draws.iter().copied()))
}

fn bet_and_deal(game: &mut Game, amount: usize) {
    game.start_betting();
    game.bet(amount).unwrap();
    game.deal().unwrap();
}

#[test]
fn new_game_uses_options() {
    let options = TableOptions::default().with_decks(2).with_starting_chips(500);
    let game = Game::new(options, 7);

    assert_eq!(game.chips(), 500);
    assert_eq!(game.cards_remaining(), 104);
    assert_eq!(game.state(), GameState::Idle);
    assert!(game.hand().is_none());
}

#[test]
fn same_seed_same_shuffle() {
    let mut a = Game::new(TableOptions::default(), 99);
    let mut b = Game::new(TableOptions::default(), 99);

    bet_and_deal(&mut a, 100);
    bet_and_deal(&mut b, 100);

    assert_eq!(a.dealer_hand().cards(), b.dealer_hand().cards());
    assert_eq!(
        a.hand().map(|h| h.cards().to_vec()),
        b.hand().map(|h| h.cards().to_vec())
    );
}

#[test]
fn bet_errors() {
    let mut game = Game::new(TableOptions::default().with_starting_chips(1_000), 1);

    assert_eq!(game.bet(100).unwrap_err(), BetError::InvalidState);

    game.start_betting();
    assert_eq!(
        game.bet(99).unwrap_err(),
        BetError::BelowMinimum { minimum: 100 }
    );
    assert_eq!(
        game.bet(1_001).unwrap_err(),
        BetError::InsufficientFunds { balance: 1_000 }
    );
    assert_eq!(game.chips(), 1_000);
}

#[test]
fn bet_accepts_boundaries() {
    let mut game = Game::new(TableOptions::default().with_starting_chips(1_000), 1);
    game.start_betting();

    game.bet(100).unwrap();
    assert_eq!(game.current_bet(), Some(100));
    assert_eq!(game.chips(), 900);

    // A new bet replaces the previous one, so the whole balance is available.
    game.bet(1_000).unwrap();
    assert_eq!(game.current_bet(), Some(1_000));
    assert_eq!(game.chips(), 0);
}

#[test]
fn deal_errors() {
    let mut game = stacked_game(
        TableOptions::default(),
        &[
            card(Suit::Hearts, Rank::Nine),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Diamonds, Rank::Seven),
        ],
    );

    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);

    game.start_betting();
    assert_eq!(game.deal().unwrap_err(), DealError::NoBet);

    game.bet(100).unwrap();
    assert_eq!(
        game.deal().unwrap_err(),
        DealError::Deck(DeckError::Exhausted {
            requested: 4,
            remaining: 3
        })
    );
    assert_eq!(game.cards_remaining(), 3);
}

#[test]
fn deal_gives_dealer_two_then_player_two() {
    let mut game = stacked_game(
        TableOptions::default(),
        &[
            card(Suit::Clubs, Rank::Six),    // dealer up
            card(Suit::Spades, Rank::Ten),   // dealer hole
            card(Suit::Hearts, Rank::Eight), // player
            card(Suit::Diamonds, Rank::Seven),
        ],
    );
    bet_and_deal(&mut game, 500);

    let dealer = game.dealer_hand();
    assert_eq!(dealer.up_card(), Some(&card(Suit::Clubs, Rank::Six)));
    assert_eq!(dealer.hole_card(), Some(&card(Suit::Spades, Rank::Ten)));
    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 6);

    let hand = game.hand().unwrap();
    assert_eq!(hand.value(), 15);
    assert_eq!(hand.bet(), 500);
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.chips(), 9_500);
}

#[test]
fn player_blackjack_skips_both_turns() {
    let mut game = stacked_game(
        TableOptions::default(),
        &[
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Spades, Rank::Ace),
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Diamonds, Rank::King),
        ],
    );
    bet_and_deal(&mut game, 500);

    assert_eq!(game.hand().unwrap().status(), HandStatus::Blackjack);
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.dealer_play().unwrap_err(), ShowdownError::InvalidState);

    // Dealer blackjack is not checked.
    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, RoundOutcome::Blackjack);
    assert_eq!(result.payout, 1_250);
    assert_eq!(result.net, 750);
    assert_eq!(game.chips(), 10_750);
}

#[test]
fn blackjack_payout_rounding() {
    let draws = [
        card(Suit::Clubs, Rank::Two),
        card(Suit::Spades, Rank::Three),
        card(Suit::Hearts, Rank::Queen),
        card(Suit::Diamonds, Rank::Ace),
    ];

    let mut down = stacked_game(TableOptions::default(), &draws);
    bet_and_deal(&mut down, 101);
    assert_eq!(down.showdown().unwrap().net, 151);

    let options = TableOptions::default().with_rounding_blackjack(RoundingMode::Up);
    let mut up = stacked_game(options, &draws);
    bet_and_deal(&mut up, 101);
    assert_eq!(up.showdown().unwrap().net, 152);
}

#[test]
fn basic_round_flow() {
    let mut game = stacked_game(
        TableOptions::default(),
        &[
            card(Suit::Clubs, Rank::Six),      // dealer up
            card(Suit::Spades, Rank::Ten),     // dealer hole
            card(Suit::Hearts, Rank::Eight),   // player
            card(Suit::Diamonds, Rank::Seven), // player
            card(Suit::Hearts, Rank::Four),    // player hit
            card(Suit::Clubs, Rank::Five),     // dealer draw
        ],
    );
    bet_and_deal(&mut game, 100);

    let hit_card = game.hit().unwrap();
    assert_eq!(hit_card.rank, Rank::Four);
    assert_eq!(game.state(), GameState::PlayerTurn);

    game.stand().unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);
    assert!(game.dealer_hand().is_hole_revealed());

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn, vec![card(Suit::Clubs, Rank::Five)]);
    assert_eq!(game.state(), GameState::RoundOver);

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, RoundOutcome::Lose);
    assert_eq!(result.dealer_value, 21);
    assert_eq!(result.player_value, 19);
    assert_eq!(game.chips(), 9_900);
}

#[test]
fn dealer_busts_at_22() {
    let mut game = stacked_game(
        TableOptions::default(),
        &[
            card(Suit::Clubs, Rank::Ten),   // dealer up
            card(Suit::Spades, Rank::Two),  // dealer hole
            card(Suit::Hearts, Rank::King), // player
            card(Suit::Diamonds, Rank::Queen),
            card(Suit::Clubs, Rank::Four),   // dealer 16
            card(Suit::Hearts, Rank::Six),   // dealer 22
            card(Suit::Spades, Rank::Three), // never drawn
        ],
    );
    bet_and_deal(&mut game, 300);

    game.stand().unwrap();
    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn.len(), 2);
    assert_eq!(game.cards_remaining(), 1);

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, RoundOutcome::Win);
    assert!(result.dealer_bust);
    assert_eq!(result.dealer_value, 22);
    assert_eq!(result.net, 300);
    assert_eq!(game.chips(), 10_300);
}

#[test]
fn equal_totals_push() {
    let mut game = stacked_game(
        TableOptions::default(),
        &[
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Spades, Rank::Nine),
            card(Suit::Hearts, Rank::Jack),
            card(Suit::Diamonds, Rank::Nine),
        ],
    );
    bet_and_deal(&mut game, 200);

    game.stand().unwrap();
    assert!(game.dealer_play().unwrap().is_empty());

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, RoundOutcome::Push);
    assert_eq!(result.net, 0);
    assert_eq!(result.payout, 200);
    assert_eq!(game.chips(), 10_000);
}

#[test]
fn player_bust_skips_dealer_turn() {
    let mut game = stacked_game(
        TableOptions::default(),
        &[
            card(Suit::Clubs, Rank::Six),
            card(Suit::Spades, Rank::Five),
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Hearts, Rank::Nine),
        ],
    );
    bet_and_deal(&mut game, 100);

    game.hit().unwrap();
    assert_eq!(game.hand().unwrap().status(), HandStatus::Bust);
    assert_eq!(game.state(), GameState::RoundOver);
    assert!(!game.dealer_hand().is_hole_revealed());

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, RoundOutcome::Lose);
    assert!(result.player_bust);
    assert!(!result.dealer_bust);
    assert_eq!(game.chips(), 9_900);
}

#[test]
fn hitting_to_21_ends_the_turn() {
    let mut game = stacked_game(
        TableOptions::default(),
        &[
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Spades, Rank::Seven),
            card(Suit::Hearts, Rank::Five),
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Hearts, Rank::Jack),
        ],
    );
    bet_and_deal(&mut game, 100);

    game.hit().unwrap();
    assert_eq!(game.hand().unwrap().status(), HandStatus::Stand);
    assert_eq!(game.state(), GameState::DealerTurn);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn double_down_draws_one_card_and_stands() {
    let mut game = stacked_game(
        TableOptions::default(),
        &[
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Spades, Rank::Seven),
            card(Suit::Hearts, Rank::Five),
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Hearts, Rank::Nine),
        ],
    );
    bet_and_deal(&mut game, 400);
    assert!(game.can_double());

    let drawn = game.act(Action::DoubleDown).unwrap();
    assert_eq!(drawn, Some(card(Suit::Hearts, Rank::Nine)));
    assert_eq!(game.current_bet(), Some(800));
    assert_eq!(game.chips(), 9_200);
    assert_eq!(game.state(), GameState::DealerTurn);

    game.dealer_play().unwrap();
    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, RoundOutcome::Win);
    assert_eq!(result.bet, 800);
    assert_eq!(game.chips(), 10_800);
}

#[test]
fn double_down_only_on_first_decision() {
    let mut game = stacked_game(
        TableOptions::default(),
        &[
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Spades, Rank::Seven),
            card(Suit::Hearts, Rank::Two),
            card(Suit::Diamonds, Rank::Three),
            card(Suit::Hearts, Rank::Four),
        ],
    );
    bet_and_deal(&mut game, 100);

    game.hit().unwrap();
    assert!(!game.can_double());
    assert_eq!(game.double_down().unwrap_err(), ActionError::CannotDouble);
    assert_eq!(game.current_bet(), Some(100));
}

#[test]
fn double_down_needs_funds() {
    let options = TableOptions::default().with_starting_chips(150);
    let mut game = stacked_game(
        options,
        &[
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Spades, Rank::Seven),
            card(Suit::Hearts, Rank::Two),
            card(Suit::Diamonds, Rank::Three),
            card(Suit::Hearts, Rank::Four),
        ],
    );
    bet_and_deal(&mut game, 100);

    assert!(!game.can_double());
    assert_eq!(
        game.double_down().unwrap_err(),
        ActionError::InsufficientFunds { needed: 100 }
    );
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn hit_with_empty_shoe_returns_error() {
    let mut game = stacked_game(
        TableOptions::default(),
        &[
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Diamonds, Rank::Seven),
            card(Suit::Hearts, Rank::Five),
            card(Suit::Spades, Rank::Six),
        ],
    );
    bet_and_deal(&mut game, 100);

    assert_eq!(
        game.hit().unwrap_err(),
        ActionError::Deck(DeckError::Exhausted {
            requested: 1,
            remaining: 0
        })
    );
    assert_eq!(game.hand().unwrap().len(), 2);
}

#[test]
fn dealer_with_empty_shoe_returns_error() {
    let mut game = stacked_game(
        TableOptions::default(),
        &[
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Diamonds, Rank::Two),
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Eight),
        ],
    );
    bet_and_deal(&mut game, 100);
    game.stand().unwrap();

    assert!(matches!(
        game.dealer_play().unwrap_err(),
        ShowdownError::Deck(DeckError::Exhausted { .. })
    ));
}

#[test]
fn dealer_stand_threshold_is_configurable() {
    let options = TableOptions::default().with_dealer_stands_on(18);
    let mut game = stacked_game(
        options,
        &[
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Seven),
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Nine),
            card(Suit::Hearts, Rank::Two),
        ],
    );
    bet_and_deal(&mut game, 100);
    game.stand().unwrap();

    assert_eq!(game.dealer_play().unwrap().len(), 1);
    assert_eq!(game.showdown().unwrap().outcome, RoundOutcome::Push);
}

#[test]
fn round_settles_only_once() {
    let mut game = stacked_game(
        TableOptions::default(),
        &[
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Spades, Rank::Nine),
            card(Suit::Hearts, Rank::Jack),
            card(Suit::Diamonds, Rank::Queen),
        ],
    );
    bet_and_deal(&mut game, 100);
    game.stand().unwrap();
    game.dealer_play().unwrap();

    game.showdown().unwrap();
    assert_eq!(game.showdown().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(game.chips(), 10_100);

    game.clear_round();
    assert_eq!(game.state(), GameState::Idle);
    assert_eq!(game.chips(), 10_100);
    assert!(game.dealer_hand().is_empty());
}

#[test]
fn clear_round_returns_unsettled_stake() {
    let mut game = Game::new(TableOptions::default(), 3);
    game.start_betting();
    game.bet(700).unwrap();
    assert_eq!(game.chips(), 9_300);

    game.clear_round();
    assert_eq!(game.chips(), 10_000);
    assert_eq!(game.current_bet(), None);
}

#[test]
fn reshuffle_when_penetration_reached() {
    let options = TableOptions::default().with_penetration(0.5);
    let mut game = stacked_game(options, &[card(Suit::Hearts, Rank::Two); 10]);

    assert!(game.needs_reshuffle());
    assert!(game.check_and_reshuffle().unwrap());
    assert_eq!(game.cards_remaining(), 52);
    assert!(!game.needs_reshuffle());
}

#[test]
fn no_reshuffle_without_penetration() {
    let mut game = stacked_game(TableOptions::default(), &[card(Suit::Hearts, Rank::Two); 4]);

    assert!(!game.needs_reshuffle());
    assert!(!game.check_and_reshuffle().unwrap());
    assert_eq!(game.cards_remaining(), 4);
}

#[test]
fn reshuffle_refused_mid_round() {
    let mut game = Game::new(TableOptions::default(), 11);
    game.start_betting();
    game.bet(100).unwrap();
    game.deal().unwrap();

    if game.state() == GameState::PlayerTurn {
        assert_eq!(game.reshuffle().unwrap_err(), ReshuffleError::InvalidState);
    }
}
