use std::collections::HashSet;

use serde::Serialize;

use crate::betting::TurnSequencer;
use crate::cards::Card;
use crate::config::{TableConfig, MAX_PLAYERS, MIN_PLAYERS};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::events::{EventSink, TableEvent};
use crate::game::{HandResult, ShowdownHand, Street, WinType};
use crate::hand::{evaluate, HandRank};
use crate::logger::ActionRecord;
use crate::player::{Player, PlayerAction};
use crate::pot::Pot;
use crate::provider::{ActingView, Seat};
use crate::rules::{validate_action, LegalActions, ValidatedAction};

/// What the table is waiting for after an action or a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Betting continues with this seat to act
    Continue { next: usize },
    HandComplete(HandResult),
}

/// Drives hands of no-limit Texas Hold'em for 2 to 10 seats.
///
/// One hand at a time: [`start_hand`](Self::start_hand) deals and posts the
/// blinds, actions come in through [`apply_action`](Self::apply_action) or
/// [`step`](Self::step), and the hand resolves by fold or showdown. Then
/// [`next_hand`](Self::next_hand) eliminates busted players, moves the dealer
/// and deals again. When a single player is left standing the game restarts
/// with fresh stacks.
///
/// # Examples
///
/// ```
/// use pokerbots_engine::config::TableConfig;
/// use pokerbots_engine::engine::HandEngine;
/// use pokerbots_engine::player::PlayerAction;
/// use pokerbots_engine::provider::Seat;
///
/// let roster = vec![
///     ("alice".to_string(), Seat::Manual),
///     ("bob".to_string(), Seat::Manual),
/// ];
/// let mut engine = HandEngine::new(TableConfig::with_seed(7), roster).unwrap();
/// engine.start_hand().unwrap();
///
/// // heads-up: the dealer posts the small blind and acts first
/// assert_eq!(engine.current_player(), Some(0));
/// engine.apply_action(0, PlayerAction::Fold).unwrap();
///
/// let result = engine.last_result().unwrap();
/// assert_eq!(result.winners, vec!["bob".to_string()]);
/// assert_eq!(engine.players()[1].stack(), 1025);
/// ```
pub struct HandEngine {
    config: TableConfig,
    deck: Deck,
    players: Vec<Player>,
    sequencer: TurnSequencer,
    pot: Pot,
    board: Vec<Card>,
    street: Street,
    started: bool,
    hand_number: u64,
    game_number: u64,
    history: Vec<ActionRecord>,
    last_result: Option<HandResult>,
    sink: Option<Box<dyn EventSink>>,
}

/// Read-only picture of the table for renderers and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSnapshot {
    pub game_number: u64,
    pub hand_number: u64,
    pub street: Street,
    pub board: Vec<Card>,
    pub pot: u32,
    pub current_bet: u32,
    pub dealer: usize,
    pub small_blind: usize,
    pub big_blind: usize,
    pub current_player: Option<usize>,
    pub legal_actions: Option<LegalActions>,
    pub players: Vec<PlayerSnapshot>,
    pub last_result: Option<HandResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSnapshot {
    pub seat: usize,
    pub name: String,
    pub controller: String,
    pub stack: u32,
    pub hole_cards: Vec<Card>,
    pub street_bet: u32,
    /// Cumulative over the hand, not per street
    pub hand_contribution: u32,
    pub folded: bool,
    pub all_in: bool,
    pub eliminated: bool,
}

impl HandEngine {
    /// Seats the roster in order. Names must be unique and non-empty.
    pub fn new(config: TableConfig, roster: Vec<(String, Seat)>) -> Result<Self, GameError> {
        config.validate()?;
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&roster.len()) {
            return Err(GameError::InvalidTable(format!(
                "need {} to {} players, got {}",
                MIN_PLAYERS,
                MAX_PLAYERS,
                roster.len()
            )));
        }
        let mut names = HashSet::new();
        for (name, _) in &roster {
            if name.trim().is_empty() {
                return Err(GameError::InvalidTable("player name is empty".into()));
            }
            if !names.insert(name.as_str()) {
                return Err(GameError::InvalidTable(format!(
                    "duplicate player name: {}",
                    name
                )));
            }
        }
        let players = roster
            .into_iter()
            .map(|(name, seat)| Player::new(name, config.starting_stack, seat))
            .collect();
        let deck = match config.seed {
            Some(seed) => Deck::new_with_seed(seed),
            None => Deck::new_shuffled(),
        };
        Ok(Self {
            config,
            deck,
            players,
            sequencer: TurnSequencer::new(0),
            pot: Pot::new(),
            board: Vec::with_capacity(5),
            street: Street::PreFlop,
            started: false,
            hand_number: 0,
            game_number: 1,
            history: Vec::new(),
            last_result: None,
            sink: None,
        })
    }

    /// Replaces the deck, e.g. with [`Deck::stacked`] for scripted hands.
    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = deck;
        self
    }

    pub fn set_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sink = Some(sink);
    }

    pub fn take_sink(&mut self) -> Option<Box<dyn EventSink>> {
        self.sink.take()
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }
    pub fn pot(&self) -> u32 {
        self.pot.total()
    }
    pub fn dealer(&self) -> usize {
        self.sequencer.dealer()
    }
    pub fn small_blind_seat(&self) -> usize {
        self.sequencer.small_blind()
    }
    pub fn big_blind_seat(&self) -> usize {
        self.sequencer.big_blind()
    }
    pub fn current_bet(&self) -> u32 {
        self.sequencer.current_bet()
    }
    pub fn hand_number(&self) -> u64 {
        self.hand_number
    }
    pub fn game_number(&self) -> u64 {
        self.game_number
    }
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }
    pub fn last_result(&self) -> Option<&HandResult> {
        self.last_result.as_ref()
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn is_hand_in_progress(&self) -> bool {
        self.started && self.street.is_betting()
    }

    /// Stacks plus the pot. Constant for the life of a game.
    pub fn chips_in_play(&self) -> u32 {
        self.players.iter().map(Player::stack).sum::<u32>() + self.pot.total()
    }

    /// Seat to act, while a hand is in progress.
    pub fn current_player(&self) -> Option<usize> {
        if self.is_hand_in_progress() {
            self.sequencer.current()
        } else {
            None
        }
    }

    /// Seats that may still act this street, in turn order. Empty between hands.
    pub fn acting_order(&self) -> &[usize] {
        if self.is_hand_in_progress() {
            self.sequencer.order()
        } else {
            &[]
        }
    }

    /// Chips `seat` still owes on this street.
    pub fn to_call(&self, seat: usize) -> u32 {
        self.players
            .get(seat)
            .map(|p| self.current_bet().saturating_sub(p.current_bet()))
            .unwrap_or(0)
    }

    pub fn legal_actions(&self) -> Option<LegalActions> {
        let seat = self.current_player()?;
        let p = &self.players[seat];
        Some(LegalActions::compute(
            p.stack(),
            p.current_bet(),
            self.current_bet(),
        ))
    }

    /// What the acting player sees.
    pub fn acting_view(&self) -> Option<ActingView> {
        let seat = self.current_player()?;
        let p = &self.players[seat];
        let legal = self.legal_actions()?;
        Some(ActingView {
            seat,
            name: p.name().to_string(),
            street: self.street,
            hole_cards: p.hole_cards().to_vec(),
            board: self.board.clone(),
            pot: self.pot.total(),
            stack: p.stack(),
            street_bet: p.current_bet(),
            current_bet: self.current_bet(),
            to_call: self.to_call(seat),
            can_check: legal.can_check,
            legal,
            contenders: self.players.iter().filter(|p| p.is_contender()).count(),
            position: self.position_of(seat),
            active_players: self.active_count(),
        })
    }

    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            game_number: self.game_number,
            hand_number: self.hand_number,
            street: self.street,
            board: self.board.clone(),
            pot: self.pot.total(),
            current_bet: self.current_bet(),
            dealer: self.dealer(),
            small_blind: self.small_blind_seat(),
            big_blind: self.big_blind_seat(),
            current_player: self.current_player(),
            legal_actions: self.legal_actions(),
            players: self
                .players
                .iter()
                .enumerate()
                .map(|(seat, p)| PlayerSnapshot {
                    seat,
                    name: p.name().to_string(),
                    controller: p.seat().label().to_string(),
                    stack: p.stack(),
                    hole_cards: p.hole_cards().to_vec(),
                    street_bet: p.current_bet(),
                    hand_contribution: p.hand_contribution(),
                    folded: p.is_folded(),
                    all_in: p.is_all_in(),
                    eliminated: p.is_eliminated(),
                })
                .collect(),
            last_result: self.last_result.clone(),
        }
    }

    /// Deals the table's first hand. Every later hand goes through
    /// [`next_hand`](Self::next_hand), which settles eliminations and moves
    /// the dealer first, so calling this again fails with
    /// [`GameError::HandAlreadyComplete`].
    pub fn start_hand(&mut self) -> Result<(), GameError> {
        if self.is_hand_in_progress() {
            return Err(GameError::HandInProgress);
        }
        if self.started {
            return Err(GameError::HandAlreadyComplete);
        }
        self.deal_hand()
    }

    /// Shuffles, deals two hole cards to every active seat, posts the blinds
    /// and opens pre-flop betting.
    ///
    /// Fewer than two active players restarts the game first. When the blinds
    /// leave nobody able to act the hand runs out to showdown immediately.
    fn deal_hand(&mut self) -> Result<(), GameError> {
        if self.active_count() < MIN_PLAYERS {
            self.restart_game();
        }
        for p in &mut self.players {
            p.reset_hand();
        }
        self.deck.shuffle();
        self.board.clear();
        self.pot = Pot::new();
        self.history.clear();
        self.street = Street::PreFlop;
        self.sequencer.reset_street_bet();
        let dealer = self.sequencer.dealer();
        self.sequencer.set_blinds(&self.players, dealer)?;
        self.started = true;
        self.hand_number += 1;

        self.emit(TableEvent::HandStarted {
            game_number: self.game_number,
            hand_number: self.hand_number,
            dealer: self.sequencer.dealer(),
            small_blind: self.sequencer.small_blind(),
            big_blind: self.sequencer.big_blind(),
        });
        tracing::debug!(
            game = self.game_number,
            hand = self.hand_number,
            dealer = self.sequencer.dealer(),
            "hand started"
        );

        let deal_order = self.seats_after(self.sequencer.dealer());
        for _ in 0..2 {
            for &seat in &deal_order {
                let card = self.deck.draw()?;
                self.players[seat].give_card(card);
            }
        }

        let sb = self.post_blind(self.sequencer.small_blind(), self.config.small_blind);
        let bb = self.post_blind(self.sequencer.big_blind(), self.config.big_blind);
        self.sequencer.raise_to(sb.max(bb));
        self.sequencer
            .build_acting_order(&self.players, Street::PreFlop);

        if self.sequencer.betting_complete(&self.players) {
            self.settle()?;
        }
        Ok(())
    }

    /// Full validation of an action for `seat` without changing anything.
    pub fn validate(&self, seat: usize, action: PlayerAction) -> Result<ValidatedAction, GameError> {
        if !self.started {
            return Err(GameError::NoHandInProgress);
        }
        if self.street.is_terminal() {
            return Err(GameError::HandAlreadyComplete);
        }
        let player = self
            .players
            .get(seat)
            .ok_or(GameError::SeatOutOfRange(seat))?;
        let expected = self.sequencer.current().ok_or(GameError::NoContenders)?;
        if seat != expected {
            return Err(GameError::NotPlayersTurn {
                expected,
                actual: seat,
            });
        }
        if !player.can_act() {
            return Err(GameError::PlayerNotActive(seat));
        }
        validate_action(
            player.stack(),
            player.current_bet(),
            self.current_bet(),
            action,
        )
    }

    /// Applies `action` for `seat`. A rejected action leaves the table as it was.
    pub fn apply_action(&mut self, seat: usize, action: PlayerAction) -> Result<Step, GameError> {
        let validated = match self.validate(seat, action) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(seat, ?action, error = %e, "action rejected");
                return Err(e);
            }
        };

        let chips = validated.chips();
        let player = &mut self.players[seat];
        match validated {
            ValidatedAction::Fold => player.fold(),
            ValidatedAction::Check => player.mark_checked(),
            ValidatedAction::Call { amount } => {
                player.contribute(amount);
            }
            ValidatedAction::Raise { to, amount } => {
                player.contribute(amount);
                self.sequencer.raise_to(to);
                for (i, other) in self.players.iter_mut().enumerate() {
                    if i != seat && other.can_act() {
                        other.reopen();
                    }
                }
            }
        }
        self.players[seat].mark_acted();
        self.pot.add(chips);

        let name = self.players[seat].name().to_string();
        tracing::trace!(seat, player = %name, street = %self.street, ?action, chips, "action applied");
        self.history.push(ActionRecord {
            player: name.clone(),
            street: self.street,
            action,
        });
        self.emit(TableEvent::ActionTaken {
            seat,
            player: name,
            street: self.street,
            action,
            amount: chips,
        });

        self.settle()
    }

    /// Lets the acting seat's provider decide and applies the decision.
    pub fn step(&mut self) -> Result<Step, GameError> {
        if !self.started {
            return Err(GameError::NoHandInProgress);
        }
        if self.street.is_terminal() {
            return Err(GameError::HandAlreadyComplete);
        }
        let view = self.acting_view().ok_or(GameError::NoContenders)?;
        let seat = view.seat;
        let action = match self.players[seat].seat_mut() {
            Seat::Autonomous(provider) => provider.decide(&view),
            Seat::Manual => return Err(GameError::AwaitingManualInput(seat)),
        };
        self.apply_action(seat, action)
    }

    /// Steps until the current hand resolves. Stops with an error at a manual
    /// seat or on an illegal provider decision. A hand the blinds already
    /// resolved returns its result directly.
    pub fn run_hand(&mut self) -> Result<HandResult, GameError> {
        if self.started && self.street.is_terminal() {
            if let Some(result) = self
                .last_result
                .as_ref()
                .filter(|r| r.hand_number == self.hand_number)
            {
                return Ok(result.clone());
            }
        }
        loop {
            if let Step::HandComplete(result) = self.step()? {
                return Ok(result);
            }
        }
    }

    /// Eliminates busted players, moves the dealer to the next active seat and
    /// starts another hand. Restarts the game when one player has all the chips.
    /// The first hand is dealt with [`start_hand`](Self::start_hand).
    pub fn next_hand(&mut self) -> Result<(), GameError> {
        if !self.started {
            return Err(GameError::NoHandInProgress);
        }
        if self.is_hand_in_progress() {
            return Err(GameError::HandInProgress);
        }
        let mut busted = Vec::new();
        for (seat, p) in self.players.iter_mut().enumerate() {
            p.reset_hand();
            if p.stack() == 0 && !p.is_eliminated() {
                p.eliminate();
                busted.push((seat, p.name().to_string()));
            }
        }
        for (seat, player) in busted {
            tracing::debug!(seat, player = %player, "player eliminated");
            self.emit(TableEvent::PlayerEliminated { seat, player });
        }

        if self.active_count() < MIN_PLAYERS {
            self.restart_game();
        } else {
            let dealer = TurnSequencer::next_active_seat(&self.players, self.sequencer.dealer())
                .ok_or(GameError::NoContenders)?;
            self.sequencer.set_dealer(dealer);
        }
        self.deal_hand()
    }

    fn restart_game(&mut self) {
        let stack = self.config.starting_stack;
        for p in &mut self.players {
            p.reinstate(stack);
        }
        self.pot = Pot::new();
        self.sequencer.set_dealer(0);
        self.game_number += 1;
        tracing::debug!(game = self.game_number, "game restarted");
        self.emit(TableEvent::GameRestarted {
            game_number: self.game_number,
        });
    }

    /// Resolves whatever the last change made inevitable: a fold win, the
    /// next street, a run-out or a showdown.
    fn settle(&mut self) -> Result<Step, GameError> {
        loop {
            if self.contender_count() == 1 {
                return self.finish_by_fold();
            }
            if !self.sequencer.betting_complete(&self.players) {
                if let Some(next) = self.sequencer.next(&self.players) {
                    return Ok(Step::Continue { next });
                }
            }
            if self.street == Street::River || self.can_act_count() <= 1 {
                while self.street != Street::River {
                    self.advance_street()?;
                }
                return self.showdown();
            }
            self.advance_street()?;
            if let Some(next) = self.sequencer.current() {
                return Ok(Step::Continue { next });
            }
        }
    }

    fn advance_street(&mut self) -> Result<(), GameError> {
        let (next, count) = match self.street.advance() {
            Some((next, count)) if next.is_betting() => (next, count),
            _ => return Err(GameError::HandAlreadyComplete),
        };
        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            cards.push(self.deck.draw()?);
        }
        self.board.extend_from_slice(&cards);
        self.street = next;
        for p in &mut self.players {
            p.reset_street();
        }
        self.sequencer.reset_street_bet();
        self.sequencer.build_acting_order(&self.players, next);
        tracing::debug!(street = %next, board = ?self.board, "street dealt");
        self.emit(TableEvent::StreetDealt {
            street: next,
            cards,
        });
        Ok(())
    }

    fn finish_by_fold(&mut self) -> Result<Step, GameError> {
        let winner = self
            .players
            .iter()
            .position(Player::is_contender)
            .ok_or(GameError::NoContenders)?;
        self.street = Street::EndedByFold;
        self.distribute(vec![winner], WinType::Fold, Vec::new())
    }

    fn showdown(&mut self) -> Result<Step, GameError> {
        let order = self.seats_after(self.sequencer.dealer());
        let mut hands: Vec<ShowdownHand> = Vec::new();
        for seat in order {
            let p = &self.players[seat];
            if !p.is_contender() {
                continue;
            }
            let mut cards = p.hole_cards().to_vec();
            cards.extend_from_slice(&self.board);
            hands.push(ShowdownHand {
                seat,
                name: p.name().to_string(),
                hole_cards: p.hole_cards().to_vec(),
                rank: evaluate(&cards),
            });
        }
        let best: HandRank = hands
            .iter()
            .map(|h| h.rank)
            .max()
            .ok_or(GameError::NoContenders)?;
        let winners = hands
            .iter()
            .filter(|h| h.rank == best)
            .map(|h| h.seat)
            .collect();
        self.street = Street::Showdown;
        self.distribute(winners, WinType::Showdown, hands)
    }

    fn distribute(
        &mut self,
        winners: Vec<usize>,
        win_type: WinType,
        showdown: Vec<ShowdownHand>,
    ) -> Result<Step, GameError> {
        let pot = self.pot.total();
        let payouts = self.pot.award(&winners);
        if payouts.is_empty() {
            return Err(GameError::NoContenders);
        }
        for payout in &payouts {
            self.players[payout.seat].add_chips(payout.amount);
        }
        let result = HandResult {
            hand_number: self.hand_number,
            win_type,
            pot,
            winners: winners
                .iter()
                .map(|&s| self.players[s].name().to_string())
                .collect(),
            payouts,
            board: self.board.clone(),
            showdown,
        };
        tracing::debug!(hand = self.hand_number, outcome = %result.summary(), "hand resolved");
        self.emit(TableEvent::HandResolved {
            hand_number: result.hand_number,
            winners: result.winners.clone(),
            payouts: result.payouts.clone(),
            pot,
            win_type,
            board: result.board.clone(),
        });
        self.last_result = Some(result.clone());
        Ok(Step::HandComplete(result))
    }

    /// Posts up to `amount`; a short stack goes all-in for what it has.
    fn post_blind(&mut self, seat: usize, amount: u32) -> u32 {
        let paid = self.players[seat].contribute(amount);
        self.pot.add(paid);
        let player = self.players[seat].name().to_string();
        tracing::trace!(seat, player = %player, paid, "blind posted");
        self.emit(TableEvent::BlindPosted {
            seat,
            player,
            amount: paid,
        });
        paid
    }

    /// Active seats in seating order starting right after `seat`.
    fn seats_after(&self, seat: usize) -> Vec<usize> {
        let n = self.players.len();
        (1..=n)
            .map(|k| (seat + k) % n)
            .filter(|&s| !self.players[s].is_eliminated())
            .collect()
    }

    /// 0 for the dealer, then 1, 2, ... clockwise over active seats.
    fn position_of(&self, seat: usize) -> usize {
        let dealer = self.sequencer.dealer();
        if seat == dealer {
            return 0;
        }
        self.seats_after(dealer)
            .iter()
            .position(|&s| s == seat)
            .map_or(0, |i| i + 1)
    }

    fn active_count(&self) -> usize {
        self.players.iter().filter(|p| !p.is_eliminated()).count()
    }

    fn contender_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_contender()).count()
    }

    fn can_act_count(&self) -> usize {
        self.players.iter().filter(|p| p.can_act()).count()
    }

    fn emit(&mut self, event: TableEvent) {
        if let Some(sink) = self.sink.as_mut() {
            sink.on_event(&event);
        }
    }
}
