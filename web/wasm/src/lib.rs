use popjack::{
    BetSlip, Card, Color, Controls, Event, Game, Outcome, RoundResult, Seat, TableOptions,
    TableView, parse_bet,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// The engine as seen by the popup's script.
#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
    slip: BetSlip,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(balance: u32, seed: u32) -> Self {
        let options = TableOptions::default().with_starting_balance(balance as usize);
        Self {
            game: Game::new(options, seed as u64),
            slip: BetSlip::new(),
        }
    }

    /// "Reset Game": restores the starting balance and deck.
    pub fn reset(&mut self) {
        self.game.reset_session();
        self.slip.clear();
    }

    /// Quick-bet button. `"all"` stakes the whole balance.
    pub fn add_chip(&mut self, chip: &str) -> u32 {
        let balance = self.game.balance();
        if chip == "all" {
            self.slip.all_in(balance);
        } else if let Ok(value) = parse_bet(chip, usize::MAX) {
            self.slip.add_chip(value, balance);
        }
        self.slip.amount() as u32
    }

    /// Keeps the slip in sync with the bet input box.
    pub fn set_bet_input(&mut self, input: &str) -> u32 {
        self.slip.set_from_input(input, self.game.balance());
        self.slip.amount() as u32
    }

    /// Deal button: validates the typed bet, places it and deals.
    pub fn place_bet_and_deal(&mut self, input: &str) -> Result<(), JsValue> {
        let amount = parse_bet(input, self.game.balance()).map_err(js_err)?;
        self.game.place_bet(amount).map_err(js_err)?;
        self.slip.clear();
        self.game.deal().map(|_| ()).map_err(js_err)
    }

    pub fn hit(&mut self) -> Result<(), JsValue> {
        self.game.hit().map(|_| ()).map_err(js_err)
    }

    pub fn stand(&mut self) -> Result<(), JsValue> {
        self.game.stand().map_err(js_err)
    }

    pub fn settle(&mut self) -> Result<(), JsValue> {
        self.game.settle().map(|_| ()).map_err(js_err)
    }

    /// Auto-restart after the result has been shown.
    pub fn next_round(&mut self) -> Result<(), JsValue> {
        self.game.start_next_round().map_err(js_err)
    }

    pub fn is_session_over(&self) -> bool {
        self.game.is_session_over()
    }

    /// Pending events, oldest first, for the popup to animate.
    pub fn drain_events(&mut self) -> Result<JsValue, JsValue> {
        let events: Vec<JsEvent> = self
            .game
            .drain_events()
            .into_iter()
            .map(JsEvent::from)
            .collect();
        to_js_value(&events)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot::from(self.game.view());
        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    balance: u32,
    bet: u32,
    player: JsHand,
    dealer: JsHand,
    status: String,
    controls: JsControls,
    cards_remaining: u32,
}

impl From<TableView> for Snapshot {
    fn from(view: TableView) -> Self {
        Self {
            state: view.state.as_str(),
            balance: view.balance as u32,
            bet: view.bet as u32,
            player: JsHand {
                cards: view.player_cards.into_iter().map(card_to_js).collect(),
                value: Some(view.player_value),
            },
            dealer: JsHand {
                cards: view.dealer_cards.into_iter().map(masked_card_to_js).collect(),
                value: view.dealer_value,
            },
            status: view.status.to_string(),
            controls: JsControls::from(view.controls),
            cards_remaining: view.cards_remaining as u32,
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    rank: &'static str,
    suit: char,
    color: &'static str,
    hidden: bool,
}

#[derive(Serialize)]
struct JsHand {
    cards: Vec<JsCard>,
    value: Option<u8>,
}

#[derive(Serialize)]
struct JsControls {
    bet: bool,
    deal: bool,
    hit: bool,
    stand: bool,
    settle: bool,
    next_round: bool,
}

impl From<Controls> for JsControls {
    fn from(controls: Controls) -> Self {
        Self {
            bet: controls.bet,
            // The popup's Deal button places the bet too.
            deal: controls.bet,
            hit: controls.hit,
            stand: controls.stand,
            settle: controls.settle,
            next_round: controls.next_round,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum JsEvent {
    BetPlaced { amount: u32, balance: u32 },
    CardDealt { seat: &'static str, card: JsCard },
    DeckReshuffled,
    PlayerTurn,
    HoleRevealed { card: JsCard, value: u8 },
    DealerStood { value: u8 },
    RoundSettled(JsRoundResult),
    RoundCleared { balance: u32 },
    SessionOver,
    SessionReset { balance: u32 },
}

impl From<Event> for JsEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::BetPlaced { amount, balance } => Self::BetPlaced {
                amount: amount as u32,
                balance: balance as u32,
            },
            Event::CardDealt {
                seat,
                card,
                face_down,
            } => Self::CardDealt {
                seat: seat_to_str(seat),
                card: if face_down {
                    hidden_card()
                } else {
                    card_to_js(card)
                },
            },
            Event::DeckReshuffled => Self::DeckReshuffled,
            Event::PlayerTurn => Self::PlayerTurn,
            Event::HoleRevealed { card, value } => Self::HoleRevealed {
                card: card_to_js(card),
                value,
            },
            Event::DealerStood { value } => Self::DealerStood { value },
            Event::RoundSettled(result) => Self::RoundSettled(JsRoundResult::from(result)),
            Event::RoundCleared { balance } => Self::RoundCleared {
                balance: balance as u32,
            },
            Event::SessionOver => Self::SessionOver,
            Event::SessionReset { balance } => Self::SessionReset {
                balance: balance as u32,
            },
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    outcome: &'static str,
    message: String,
    bet: u32,
    credited: u32,
    net: i32,
    player_value: u8,
    dealer_value: u8,
    balance: u32,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        Self {
            outcome: outcome_to_str(result.outcome),
            message: result.to_string(),
            bet: result.bet as u32,
            credited: result.credited as u32,
            net: result.net as i32,
            player_value: result.player_value,
            dealer_value: result.dealer_value,
            balance: result.balance as u32,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        rank: card.rank.label(),
        suit: card.suit.symbol(),
        color: match card.color() {
            Color::Red => "red",
            Color::Black => "black",
        },
        hidden: false,
    }
}

fn hidden_card() -> JsCard {
    JsCard {
        rank: "?",
        suit: '?',
        color: "hidden",
        hidden: true,
    }
}

fn masked_card_to_js(card: Option<Card>) -> JsCard {
    card.map_or_else(hidden_card, card_to_js)
}

fn seat_to_str(seat: Seat) -> &'static str {
    match seat {
        Seat::Player => "player",
        Seat::Dealer => "dealer",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerBlackjack => "PlayerBlackjack",
        Outcome::BothBlackjack => "BothBlackjack",
        Outcome::PlayerBust => "PlayerBust",
        Outcome::DealerBust => "DealerBust",
        Outcome::PlayerWins => "PlayerWins",
        Outcome::DealerWins => "DealerWins",
        Outcome::Push => "Push",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
