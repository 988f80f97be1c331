//! Game integration tests.

use std::collections::HashSet;

use popjack::{
    ActionError, BetError, Card, Color, DECK_SIZE, DealError, DealerHand, Deck, Event, Game,
    GameState, Hand, Outcome, Payout, Rank, RoundError, RoundingMode, Seat, SettleError, Status,
    Suit, TableOptions,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn set_deck_from_draws(game: &mut Game, draws: &[Card]) {
    game.deck_mut().set_draw_order(draws);
}

fn hand_of(ranks: &[Rank]) -> Hand {
    let mut hand = Hand::new();
    for &rank in ranks {
        hand.add_card(card(rank, Suit::Clubs));
    }
    hand
}

fn table(balance: usize) -> Game {
    Game::new(TableOptions::default().with_starting_balance(balance), 7)
}

#[test]
fn card_values_colors_and_text() {
    assert_eq!(card(Rank::Ace, Suit::Spades).value(), 11);
    assert_eq!(card(Rank::Seven, Suit::Hearts).value(), 7);
    assert_eq!(card(Rank::Ten, Suit::Hearts).value(), 10);
    assert_eq!(card(Rank::Queen, Suit::Diamonds).value(), 10);

    assert_eq!(card(Rank::Two, Suit::Hearts).color(), Color::Red);
    assert_eq!(card(Rank::Two, Suit::Diamonds).color(), Color::Red);
    assert_eq!(card(Rank::Two, Suit::Spades).color(), Color::Black);
    assert_eq!(card(Rank::Two, Suit::Clubs).color(), Color::Black);

    assert_eq!(card(Rank::Ten, Suit::Hearts).to_string(), "10♥");
    assert_eq!(card(Rank::Ace, Suit::Spades).to_string(), "A♠");
}

#[test]
fn hand_scoring_with_soft_aces() {
    let natural = hand_of(&[Rank::Ace, Rank::King]);
    assert_eq!(natural.value(), 21);
    assert!(natural.is_blackjack());
    assert!(natural.is_soft());

    let soft_bust_avoided = hand_of(&[Rank::Ace, Rank::Six, Rank::Five]);
    assert_eq!(soft_bust_avoided.value(), 12);
    assert!(!soft_bust_avoided.is_soft());
    assert!(!soft_bust_avoided.is_busted());

    assert_eq!(hand_of(&[Rank::Ace, Rank::Ace]).value(), 12);
    assert_eq!(hand_of(&[Rank::Ace, Rank::Ace, Rank::Nine]).value(), 21);

    let three_card_21 = hand_of(&[Rank::Seven, Rank::Seven, Rank::Seven]);
    assert_eq!(three_card_21.value(), 21);
    assert!(!three_card_21.is_blackjack());

    let bust = hand_of(&[Rank::Ten, Rank::Ten, Rank::Two]);
    assert_eq!(bust.value(), 22);
    assert!(bust.is_busted());

    let mut cleared = natural;
    cleared.clear();
    assert!(cleared.is_empty());
    assert_eq!(cleared.value(), 0);
}

#[test]
fn hand_value_is_best_total_for_every_small_hand() {
    fn best_total(ranks: &[Rank]) -> u8 {
        let hard: u8 = ranks
            .iter()
            .map(|rank| if *rank == Rank::Ace { 1 } else { rank.value() })
            .sum();
        let aces = ranks.iter().filter(|rank| **rank == Rank::Ace).count() as u8;
        (0..=aces)
            .map(|soft| hard + soft * 10)
            .filter(|total| *total <= 21)
            .max()
            .unwrap_or(hard)
    }

    let mut ranks = Vec::new();
    for a in Rank::ALL {
        for b in Rank::ALL {
            for c in Rank::ALL {
                for d in Rank::ALL {
                    ranks.clear();
                    ranks.extend([a, b, c, d]);
                    for len in 1..=4 {
                        let hand = hand_of(&ranks[..len]);
                        assert_eq!(hand.value(), best_total(&ranks[..len]), "{ranks:?}");
                        assert_eq!(hand.is_busted(), hand.value() > 21);
                    }
                }
            }
        }
    }
}

#[test]
fn oversized_hands_count_every_ace_as_one() {
    let mut aces = Hand::new();
    for _ in 0..24 {
        aces.add_card(card(Rank::Ace, Suit::Spades));
    }
    assert_eq!(aces.value(), 24);
    assert!(aces.is_busted());
    assert!(!aces.is_soft());

    // 340 points in a full deck, past what a u8 can hold.
    let mut everything = Hand::new();
    for &dealt in Deck::new(3).cards() {
        everything.add_card(dealt);
    }
    assert_eq!(everything.len(), DECK_SIZE);
    assert_eq!(everything.value(), u8::MAX);
    assert!(everything.is_busted());
    assert!(!everything.is_soft());
}

#[test]
fn dealer_hand_masks_hole_until_revealed() {
    let mut dealer = DealerHand::new();
    dealer.add_card(card(Rank::Nine, Suit::Spades));
    assert_eq!(dealer.visible_value(), Some(9));

    dealer.add_card(card(Rank::King, Suit::Hearts));
    assert!(dealer.is_face_down(1));
    assert!(!dealer.is_face_down(0));
    assert_eq!(dealer.visible_value(), None);
    assert_eq!(dealer.value(), 19);

    dealer.reveal_hole();
    assert_eq!(dealer.visible_value(), Some(19));

    dealer.hide_hole();
    assert_eq!(dealer.visible_value(), None);

    dealer.reveal_hole();
    dealer.clear();
    assert!(dealer.is_empty());
    assert!(dealer.is_hole_hidden());
}

#[test]
fn fresh_deck_has_every_card_once() {
    let deck = Deck::new(3);
    assert_eq!(deck.remaining(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(unique.contains(&card(rank, suit)));
        }
    }
}

#[test]
fn deck_draws_without_repeats_then_reshuffles() {
    let mut deck = Deck::new(11);
    let mut seen = HashSet::new();
    for _ in 0..DECK_SIZE {
        assert!(seen.insert(deck.draw()));
    }
    assert_eq!(deck.remaining(), 0);

    let _ = deck.draw();
    assert_eq!(deck.remaining(), DECK_SIZE - 1);
}

#[test]
fn empty_deck_draw_rebuilds_full_deck() {
    let mut deck = Deck::new(5);
    deck.set_draw_order(&[]);
    assert_eq!(deck.remaining(), 0);

    let drawn = deck.draw();
    let mut rest: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(rest.len(), DECK_SIZE - 1);
    assert!(rest.insert(drawn));
    assert_eq!(rest.len(), DECK_SIZE);
}

#[test]
fn same_seed_shuffles_identically() {
    let a = Deck::new(42);
    let b = Deck::new(42);
    assert_eq!(a.cards(), b.cards());
}

#[test]
fn bet_errors_leave_state_untouched() {
    let mut game = table(100);

    assert_eq!(game.place_bet(0).unwrap_err(), BetError::ZeroBet);
    assert_eq!(game.place_bet(101).unwrap_err(), BetError::InsufficientFunds);
    assert!(BetError::InsufficientFunds.is_invalid_bet());
    assert_eq!(game.balance(), 100);
    assert_eq!(game.bet(), 0);
    assert_eq!(game.state(), GameState::AwaitingBet);
    assert!(game.events().is_empty());

    game.place_bet(100).unwrap();
    assert_eq!(game.balance(), 0);
    assert_eq!(game.bet(), 100);
    assert_eq!(game.state(), GameState::Dealing);

    assert_eq!(game.place_bet(10).unwrap_err(), BetError::InvalidState);
}

#[test]
fn actions_rejected_outside_their_state() {
    let mut game = table(100);

    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.settle().unwrap_err(), SettleError::InvalidState);
    assert_eq!(game.dealer_play().unwrap_err(), SettleError::InvalidState);
    assert_eq!(game.start_next_round().unwrap_err(), RoundError::InvalidState);
}

#[test]
fn deal_order_and_hidden_hole_card() {
    let mut game = table(1000);
    game.place_bet(10).unwrap();

    set_deck_from_draws(
        &mut game,
        &[
            card(Rank::Eight, Suit::Hearts),  // player
            card(Rank::Six, Suit::Clubs),     // dealer up
            card(Rank::Seven, Suit::Spades),  // player
            card(Rank::King, Suit::Diamonds), // dealer hole
        ],
    );

    assert_eq!(game.deal().unwrap(), None);
    assert_eq!(game.state(), GameState::PlayerTurn);

    let events = game.drain_events();
    assert_eq!(
        events,
        vec![
            Event::BetPlaced {
                amount: 10,
                balance: 990
            },
            Event::CardDealt {
                seat: Seat::Player,
                card: card(Rank::Eight, Suit::Hearts),
                face_down: false
            },
            Event::CardDealt {
                seat: Seat::Dealer,
                card: card(Rank::Six, Suit::Clubs),
                face_down: false
            },
            Event::CardDealt {
                seat: Seat::Player,
                card: card(Rank::Seven, Suit::Spades),
                face_down: false
            },
            Event::CardDealt {
                seat: Seat::Dealer,
                card: card(Rank::King, Suit::Diamonds),
                face_down: true
            },
            Event::PlayerTurn,
        ]
    );
    assert!(game.events().is_empty());

    let view = game.view();
    assert_eq!(view.player_value, 15);
    assert_eq!(view.dealer_value, None);
    assert_eq!(view.dealer_cards, vec![Some(card(Rank::Six, Suit::Clubs)), None]);
    assert_eq!(view.status, Status::ChooseAction);
    assert!(view.controls.hit && view.controls.stand);
    assert!(!view.controls.bet && !view.controls.next_round);
}

#[test]
fn player_blackjack_pays_three_to_two() {
    let mut game = table(1000);
    game.place_bet(100).unwrap();

    set_deck_from_draws(
        &mut game,
        &[
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::King, Suit::Spades),
            card(Rank::Seven, Suit::Diamonds),
        ],
    );

    let result = game.deal().unwrap().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerBlackjack);
    assert_eq!(result.payout(), Payout::Blackjack);
    assert_eq!(result.credited, 250);
    assert_eq!(result.net, 150);
    assert_eq!(game.balance(), 1150);
    assert_eq!(game.state(), GameState::Settled);
    assert!(!game.dealer_hand().is_hole_hidden());
    assert_eq!(
        result.to_string(),
        "Blackjack! Player Wins! (Blackjack bonus: +$150)"
    );

    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.balance(), 1150);
}

#[test]
fn both_blackjack_is_a_push() {
    let mut game = table(1000);
    game.place_bet(100).unwrap();

    set_deck_from_draws(
        &mut game,
        &[
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Ace, Suit::Clubs),
            card(Rank::Queen, Suit::Spades),
            card(Rank::Ten, Suit::Diamonds),
        ],
    );

    let result = game.deal().unwrap().unwrap();
    assert_eq!(result.outcome, Outcome::BothBlackjack);
    assert_eq!(game.balance(), 1000);
    assert_eq!(result.to_string(), "Push! Both have Blackjack! (Bet returned: $100)");
}

#[test]
fn dealer_blackjack_alone_plays_on() {
    let mut game = table(1000);
    game.place_bet(100).unwrap();

    set_deck_from_draws(
        &mut game,
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Ace, Suit::Clubs),
            card(Rank::Nine, Suit::Spades),
            card(Rank::King, Suit::Diamonds),
        ],
    );

    assert_eq!(game.deal().unwrap(), None);
    game.stand().unwrap();
    let result = game.settle().unwrap();
    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(game.balance(), 900);
}

#[test]
fn rounding_only_matters_for_odd_stakes() {
    for bet in 1..=200 {
        let down = Payout::Blackjack.credit(bet, RoundingMode::Down);
        let up = Payout::Blackjack.credit(bet, RoundingMode::Up);
        assert_eq!(down, bet + bet * 3 / 2, "{bet}");
        assert_eq!(up - down, bet % 2, "{bet}");
    }
}

#[test]
fn settled_status_always_carries_the_result() {
    // Natural, bust and showdown each settle through a different path.
    let rounds: [&[Card]; 3] = [
        &[
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::King, Suit::Spades),
            card(Rank::Seven, Suit::Diamonds),
        ],
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Six, Suit::Spades),
            card(Rank::Seven, Suit::Diamonds),
            card(Rank::King, Suit::Clubs),
        ],
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Eight, Suit::Spades),
            card(Rank::Eight, Suit::Diamonds),
        ],
    ];

    for draws in rounds {
        let mut game = table(1000);
        game.place_bet(10).unwrap();
        set_deck_from_draws(&mut game, draws);
        if game.deal().unwrap().is_none() {
            if game.player_hand().value() < 17 {
                game.hit().unwrap();
            } else {
                game.stand().unwrap();
                game.settle().unwrap();
            }
        }

        assert_eq!(game.state(), GameState::Settled);
        let result = *game.last_result().unwrap();
        assert_eq!(game.status(), Status::Settled(result));
        assert_eq!(game.view().status.to_string(), result.to_string());
    }

    assert_eq!(Status::RoundOver.to_string(), "Round over.");
}

#[test]
fn odd_blackjack_bonus_follows_rounding() {
    let draws = [
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Jack, Suit::Spades),
        card(Rank::Seven, Suit::Diamonds),
    ];

    let mut down = table(1000);
    down.place_bet(25).unwrap();
    set_deck_from_draws(&mut down, &draws);
    down.deal().unwrap();
    assert_eq!(down.balance(), 1000 - 25 + 62);

    let options = TableOptions::default().with_rounding_blackjack(RoundingMode::Up);
    let mut up = Game::new(options, 7);
    up.place_bet(25).unwrap();
    set_deck_from_draws(&mut up, &draws);
    up.deal().unwrap();
    assert_eq!(up.balance(), 1000 - 25 + 63);
}

#[test]
fn hit_to_bust_loses_stake() {
    let mut game = table(1000);
    game.place_bet(50).unwrap();

    set_deck_from_draws(
        &mut game,
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Six, Suit::Clubs),
            card(Rank::Six, Suit::Spades),
            card(Rank::Nine, Suit::Diamonds),
            card(Rank::Three, Suit::Hearts), // player hit: 19
            card(Rank::Five, Suit::Clubs),   // player hit: 24
        ],
    );

    game.deal().unwrap();
    assert_eq!(game.hit().unwrap(), card(Rank::Three, Suit::Hearts));
    assert_eq!(game.state(), GameState::PlayerTurn);

    game.hit().unwrap();
    assert_eq!(game.state(), GameState::Settled);
    let result = *game.last_result().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerBust);
    assert_eq!(result.credited, 0);
    assert_eq!(result.net, -50);
    assert_eq!(game.balance(), 950);
    assert!(!game.dealer_hand().is_hole_hidden());
    assert_eq!(game.dealer_hand().len(), 2);
    game.drain_events();

    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.player_hand().len(), 4);
    assert_eq!(game.balance(), 950);
    assert!(game.events().is_empty());
}

#[test]
fn push_returns_stake() {
    let mut game = table(1000);
    game.place_bet(50).unwrap();

    set_deck_from_draws(
        &mut game,
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Eight, Suit::Spades),
            card(Rank::Nine, Suit::Diamonds),
        ],
    );

    game.deal().unwrap();
    game.stand().unwrap();
    let result = game.settle().unwrap();
    assert_eq!(result.outcome, Outcome::Push);
    assert_eq!(result.net, 0);
    assert_eq!(game.balance(), 1000);
    assert_eq!(result.to_string(), "Push! It's a Tie! (Bet returned: $50)");
}

#[test]
fn stand_reveals_hole_card() {
    let mut game = table(1000);
    game.place_bet(10).unwrap();

    set_deck_from_draws(
        &mut game,
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Nine, Suit::Spades),
            card(Rank::Seven, Suit::Diamonds),
        ],
    );

    game.deal().unwrap();
    game.drain_events();
    game.stand().unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);
    assert_eq!(
        game.drain_events(),
        vec![Event::HoleRevealed {
            card: card(Rank::Seven, Suit::Diamonds),
            value: 17
        }]
    );
    assert_eq!(game.view().dealer_value, Some(17));
    assert_eq!(game.status(), Status::DealerTurn);
}

#[test]
fn player_actions_ignored_once_turn_has_passed() {
    let mut game = table(1000);
    game.place_bet(20).unwrap();

    set_deck_from_draws(
        &mut game,
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Nine, Suit::Spades),
            card(Rank::Six, Suit::Diamonds),
            card(Rank::Two, Suit::Hearts), // dealer draw: 18
        ],
    );

    game.deal().unwrap();
    game.stand().unwrap();
    game.drain_events();

    let player = game.player_hand().clone();
    let dealer = game.dealer_hand().clone();
    let remaining = game.cards_remaining();

    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.state(), GameState::DealerTurn);
    assert_eq!(game.player_hand(), &player);
    assert_eq!(game.dealer_hand(), &dealer);
    assert_eq!(game.cards_remaining(), remaining);
    assert!(game.events().is_empty());
    assert_eq!(game.balance(), 980);

    let result = game.settle().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerWins);
    assert_eq!(result.dealer_value, 18);
    assert_eq!(game.balance(), 1020);
    game.drain_events();

    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.state(), GameState::Settled);
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.dealer_hand().len(), 3);
    assert_eq!(game.last_result(), Some(&result));
    assert_eq!(game.balance(), 1020);
    assert!(game.events().is_empty());
}

#[test]
fn dealer_on_seventeen_draws_nothing() {
    let mut game = table(1000);
    game.place_bet(10).unwrap();

    set_deck_from_draws(
        &mut game,
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Ace, Suit::Clubs),
            card(Rank::Eight, Suit::Spades),
            card(Rank::Six, Suit::Diamonds), // soft 17
        ],
    );

    game.deal().unwrap();
    game.stand().unwrap();
    assert!(game.dealer_play().unwrap().is_empty());
    assert!(game.dealer_play().unwrap().is_empty());

    let result = game.settle().unwrap();
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.outcome, Outcome::PlayerWins);
    assert_eq!(game.balance(), 1010);
    assert_eq!(result.to_string(), "Player Wins! (+$10)");
}

#[test]
fn dealer_below_seventeen_draws_until_standing() {
    let mut game = table(1000);
    game.place_bet(10).unwrap();

    set_deck_from_draws(
        &mut game,
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Two, Suit::Clubs),
            card(Rank::Eight, Suit::Spades),
            card(Rank::Three, Suit::Diamonds), // dealer 5
            card(Rank::Two, Suit::Hearts),     // 7
            card(Rank::Four, Suit::Hearts),    // 11
            card(Rank::Six, Suit::Hearts),     // 17
            card(Rank::King, Suit::Hearts),    // never drawn
        ],
    );

    game.deal().unwrap();
    game.stand().unwrap();
    game.drain_events();

    let drawn = game.dealer_play().unwrap();
    assert_eq!(
        drawn,
        vec![
            card(Rank::Two, Suit::Hearts),
            card(Rank::Four, Suit::Hearts),
            card(Rank::Six, Suit::Hearts),
        ]
    );
    assert_eq!(game.dealer_hand().value(), 17);
    assert_eq!(game.cards_remaining(), 1);

    let events = game.drain_events();
    assert_eq!(events.len(), 4);
    assert_eq!(events[3], Event::DealerStood { value: 17 });

    let result = game.settle().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerWins);
}

#[test]
fn settle_runs_dealer_and_pays_dealer_bust() {
    let mut game = table(1000);
    game.place_bet(50).unwrap();

    set_deck_from_draws(
        &mut game,
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Two, Suit::Spades),
            card(Rank::Six, Suit::Diamonds), // dealer 16
            card(Rank::Nine, Suit::Hearts),  // dealer 25
        ],
    );

    game.deal().unwrap();
    game.stand().unwrap();
    let result = game.settle().unwrap();
    assert_eq!(result.outcome, Outcome::DealerBust);
    assert_eq!(result.dealer_value, 25);
    assert_eq!(game.balance(), 1050);
}

#[test]
fn next_round_clears_table() {
    let mut game = table(1000);
    game.place_bet(50).unwrap();

    set_deck_from_draws(
        &mut game,
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Eight, Suit::Spades),
            card(Rank::Nine, Suit::Diamonds),
        ],
    );

    game.deal().unwrap();
    game.stand().unwrap();
    game.settle().unwrap();
    assert!(game.controls().next_round);

    game.start_next_round().unwrap();
    assert_eq!(game.state(), GameState::AwaitingBet);
    assert_eq!(game.bet(), 0);
    assert!(game.player_hand().is_empty());
    assert!(game.dealer_hand().is_empty());
    assert!(game.dealer_hand().is_hole_hidden());
    assert_eq!(game.rounds_played(), 1);
    assert_eq!(game.status(), Status::PlaceNextBet);
    assert_eq!(
        game.status().to_string(),
        "Place your bet and click Deal for next round!"
    );
}

#[test]
fn broke_player_cannot_start_next_round() {
    let mut game = table(100);
    assert_eq!(
        game.status().to_string(),
        "Place your bet and click Deal to start!"
    );
    game.place_bet(100).unwrap();

    set_deck_from_draws(
        &mut game,
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Seven, Suit::Spades),
            card(Rank::Nine, Suit::Diamonds),
        ],
    );

    game.deal().unwrap();
    game.stand().unwrap();
    let result = game.settle().unwrap();
    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(game.balance(), 0);
    assert!(game.is_session_over());
    assert!(!game.controls().next_round);

    let before = game.view();
    for _ in 0..2 {
        assert_eq!(game.start_next_round().unwrap_err(), RoundError::SessionOver);
        assert_eq!(game.view(), before);
    }
    assert_eq!(game.bet(), 100);
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(
        game.status().to_string(),
        "Dealer Wins! You're out of money! Game Over!"
    );

    game.reset_session();
    assert_eq!(game.balance(), 100);
    assert_eq!(game.state(), GameState::AwaitingBet);
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert!(game.player_hand().is_empty());
    assert_eq!(game.last_result(), None);
    assert!(game.controls().bet);
}

#[test]
fn empty_balance_rejects_bets() {
    let mut game = table(0);
    assert!(game.is_session_over());
    assert_eq!(game.place_bet(10).unwrap_err(), BetError::SessionOver);
    assert_eq!(game.status(), Status::SessionOver(None));
}

#[test]
fn deck_reshuffle_mid_round_is_reported() {
    let mut game = table(1000);
    game.place_bet(10).unwrap();
    set_deck_from_draws(
        &mut game,
        &[card(Rank::Two, Suit::Hearts), card(Rank::Three, Suit::Clubs)],
    );

    game.deal().unwrap();
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 2);
    assert!(game.events().contains(&Event::DeckReshuffled));
}

#[test]
fn seeded_rounds_keep_money_consistent() {
    let mut game = Game::new(TableOptions::default(), 2024);

    for _ in 0..200 {
        if game.is_session_over() {
            break;
        }
        let before = game.balance();
        let stake = before.min(40);
        game.place_bet(stake).unwrap();

        if game.deal().unwrap().is_none() {
            while game.player_hand().value() < 15 && game.state() == GameState::PlayerTurn {
                game.hit().unwrap();
            }
            if game.state() == GameState::PlayerTurn {
                game.stand().unwrap();
                game.settle().unwrap();
            }
        }

        let result = *game.last_result().unwrap();
        assert_eq!(game.balance(), before - stake + result.credited);
        assert_eq!(
            result.credited,
            result.payout().credit(stake, RoundingMode::Down)
        );

        if game.start_next_round().is_err() {
            break;
        }
    }
}
