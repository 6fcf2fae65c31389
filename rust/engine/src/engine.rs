use std::collections::{HashSet, VecDeque};

use tracing::{debug, info};

use crate::cards::Card;
use crate::deck::{Deck, DECK_SIZE};
use crate::errors::EngineError;
use crate::game::{Outcome, Phase, Side, Snapshot};
use crate::items::{catalog_item, Item, CATALOG};
use crate::rng::{RandomSource, SeededRandom};
use crate::rules::{effective_values, round_winner, war_winner};

const DEFAULT_SEED: u64 = 0xC1A5_5EED;

/// Round and war state machine for one game of Class War.
///
/// The engine owns both card sequences, the pot, the face-up cards, the
/// equipped items and the phase. It is driven by three events: [`start`],
/// [`advance`] and [`restart`]. Cards only ever move between the two sequences
/// and the pot, so the three always hold exactly 52 cards once a game is dealt.
///
/// # Examples
///
/// ```
/// use classwar_engine::engine::RoundEngine;
/// use classwar_engine::game::{Outcome, Phase};
///
/// let mut engine = RoundEngine::with_seed(Some(12345));
/// assert_eq!(engine.phase(), Phase::Menu);
///
/// assert_eq!(engine.start(), Outcome::Started);
/// assert_eq!(engine.snapshot().player_cards, 26);
///
/// // Play until somebody holds the whole deck (or give up after a while).
/// for _ in 0..10_000 {
///     if engine.phase() == Phase::GameOver {
///         break;
///     }
///     engine.advance();
/// }
/// ```
///
/// [`start`]: RoundEngine::start
/// [`advance`]: RoundEngine::advance
/// [`restart`]: RoundEngine::restart
#[derive(Debug)]
pub struct RoundEngine<R: RandomSource = SeededRandom> {
    /// Current phase of the state machine
    phase: Phase,
    /// Draw piles indexed by [`Side::index`]; cards are taken from the front
    /// and won cards go to the back
    sequences: [VecDeque<Card>; 2],
    /// Cards committed to the current round or war, in commit order
    pot: Vec<Card>,
    /// Face-up cards; each is also in the pot
    revealed: [Option<Card>; 2],
    /// Equipped item per side
    items: [Option<Item>; 2],
    /// Set only in GameOver
    winner: Option<Side>,
    /// Human-readable line for the host, rewritten on every transition
    status: String,
    rounds: u32,
    wars: u32,
    rng: R,
}

impl RoundEngine<SeededRandom> {
    pub fn with_seed(seed: Option<u64>) -> Self {
        Self::new(SeededRandom::new(seed.unwrap_or(DEFAULT_SEED)))
    }
}

impl<R: RandomSource> RoundEngine<R> {
    /// Engine in the menu, nothing dealt.
    pub fn new(rng: R) -> Self {
        Self {
            phase: Phase::Menu,
            sequences: [VecDeque::new(), VecDeque::new()],
            pot: Vec::new(),
            revealed: [None, None],
            items: [None, None],
            winner: None,
            status: "Press SPACE to start".to_string(),
            rounds: 0,
            wars: 0,
            rng,
        }
    }

    /// Builds an engine already in play from explicit draw piles.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] unless the two piles together hold 52 distinct cards.
    pub fn from_sequences<P, O>(player: P, opponent: O, rng: R) -> Result<Self, EngineError>
    where
        P: IntoIterator<Item = Card>,
        O: IntoIterator<Item = Card>,
    {
        let mut engine = Self::new(rng);
        engine.sequences = [
            player.into_iter().collect(),
            opponent.into_iter().collect(),
        ];
        engine.phase = Phase::Playing;
        engine.status = "Press SPACE to play a round".to_string();
        engine.verify()?;
        engine.check_game_over();
        Ok(engine)
    }

    /// Deals a fresh game from any phase.
    pub fn start(&mut self) -> Outcome {
        let mut deck = Deck::standard();
        deck.shuffle(&mut self.rng);
        let (player, opponent) = deck.deal();
        self.sequences = [player, opponent];
        self.pot.clear();
        self.revealed = [None, None];
        self.items = [None, None];
        self.winner = None;
        self.rounds = 0;
        self.wars = 0;
        self.phase = Phase::Playing;
        self.status = "Cards dealt. Press SPACE to play a round".to_string();
        info!(
            player = self.sequences[0].len(),
            opponent = self.sequences[1].len(),
            "game started"
        );
        self.assert_conserved();
        Outcome::Started
    }

    /// Same as [`start`](Self::start), but only once play has begun.
    pub fn restart(&mut self) -> Outcome {
        if self.phase == Phase::Menu {
            return Outcome::Ignored;
        }
        self.start()
    }

    /// Progresses the game by one step: plays a round in `Playing`, resolves
    /// the pending war in `War`, and does nothing in `Menu` or `GameOver`.
    pub fn advance(&mut self) -> Outcome {
        let outcome = match self.phase {
            Phase::Playing => self.play_round(),
            Phase::War => self.resolve_war(),
            Phase::Menu | Phase::GameOver => Outcome::Ignored,
        };
        self.check_game_over();
        self.assert_conserved();
        outcome
    }

    /// Ends the game when a side has nothing left to play in `Playing`.
    ///
    /// Returns the winner once the game is over.
    pub fn check_game_over(&mut self) -> Option<Side> {
        if self.phase == Phase::Playing && self.pot.is_empty() {
            let beaten = Side::BOTH.into_iter().find(|s| {
                self.sequences[s.index()].is_empty() && self.revealed[s.index()].is_none()
            });
            if let Some(loser) = beaten {
                self.finish(loser.other());
            }
        }
        self.winner
    }

    /// Checks that the sequences and the pot hold the whole deck exactly once.
    pub fn verify(&self) -> Result<(), EngineError> {
        let expected = if self.phase == Phase::Menu { 0 } else { DECK_SIZE };
        let actual = self.card_count();
        if actual != expected {
            return Err(EngineError::CardCount { expected, actual });
        }
        let mut seen = HashSet::with_capacity(actual);
        for c in self.sequences.iter().flatten().chain(self.pot.iter()) {
            if !seen.insert(*c) {
                return Err(EngineError::DuplicateCard(*c));
            }
        }
        Ok(())
    }

    /// Replaces the item equipped by `side`.
    pub fn equip(&mut self, side: Side, item: Option<Item>) {
        self.items[side.index()] = item;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn sequence(&self, side: Side) -> &VecDeque<Card> {
        &self.sequences[side.index()]
    }

    pub fn pot(&self) -> &[Card] {
        &self.pot
    }

    pub fn revealed(&self, side: Side) -> Option<Card> {
        self.revealed[side.index()]
    }

    pub fn item(&self, side: Side) -> Option<&Item> {
        self.items[side.index()].as_ref()
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn wars(&self) -> u32 {
        self.wars
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn card_count(&self) -> usize {
        self.sequences[0].len() + self.sequences[1].len() + self.pot.len()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            player_cards: self.sequences[0].len(),
            opponent_cards: self.sequences[1].len(),
            player_revealed: self.revealed[0],
            opponent_revealed: self.revealed[1],
            player_item: self.items[0].clone(),
            opponent_item: self.items[1].clone(),
            pot: self.pot.len(),
            winner: self.winner,
            status: self.status.clone(),
            rounds: self.rounds,
            wars: self.wars,
        }
    }

    fn play_round(&mut self) -> Outcome {
        // a face-up card means the previous step has not been resolved
        if self.revealed.iter().any(Option::is_some) {
            return Outcome::Ignored;
        }
        if self.sequences.iter().any(VecDeque::is_empty) {
            return Outcome::Ignored;
        }
        let faces = [self.reveal(Side::Player), self.reveal(Side::Opponent)];
        let [Some(player_card), Some(opponent_card)] = faces else {
            return Outcome::Ignored;
        };
        self.rounds += 1;
        let (player_value, opponent_value) = self.values(&player_card, &opponent_card);

        match round_winner(player_value, opponent_value) {
            Some(winner) => {
                let cards = self.pay_out(winner);
                debug!(
                    round = self.rounds,
                    player_value,
                    opponent_value,
                    %winner,
                    cards,
                    "round resolved"
                );
                self.status = format!(
                    "{} wins the round ({} vs {})",
                    winner, player_value, opponent_value
                );
                Outcome::RoundWon {
                    winner,
                    player_value,
                    opponent_value,
                    cards,
                }
            }
            None => {
                self.wars += 1;
                self.phase = Phase::War;
                info!(round = self.rounds, value = player_value, "war declared");
                self.status = format!(
                    "WAR! Both sides show {}. Press SPACE to commit stakes",
                    player_value
                );
                Outcome::WarDeclared {
                    value: player_value,
                }
            }
        }
    }

    fn resolve_war(&mut self) -> Outcome {
        let short = Side::BOTH
            .into_iter()
            .find(|s| self.sequences[s.index()].len() < 2);
        if let Some(loser) = short {
            return self.forfeit(loser);
        }

        let faces = [self.stake(Side::Player), self.stake(Side::Opponent)];
        let [Some(player_card), Some(opponent_card)] = faces else {
            return Outcome::Ignored;
        };
        let (player_value, opponent_value) = self.values(&player_card, &opponent_card);
        let winner = war_winner(player_value, opponent_value);
        let tie_break = player_value == opponent_value;

        let item = catalog_item(self.rng.pick(CATALOG.len()));
        self.items[winner.index()] = Some(item.clone());
        let cards = self.pay_out(winner);
        self.phase = Phase::Playing;

        info!(
            round = self.rounds,
            player_value,
            opponent_value,
            %winner,
            cards,
            tie_break,
            item = %item.name,
            "war resolved"
        );
        self.status = if tie_break {
            format!(
                "War tied at {}; {} takes {} cards by default and gains {}",
                player_value, winner, cards, item
            )
        } else {
            format!(
                "{} wins the war ({} vs {}), takes {} cards and gains {}",
                winner, player_value, opponent_value, cards, item
            )
        };
        Outcome::WarWon {
            winner,
            player_value,
            opponent_value,
            cards,
            item,
            tie_break,
        }
    }

    /// `loser` cannot post a stake plus a face-up card: the other side takes
    /// everything and the game ends.
    fn forfeit(&mut self, loser: Side) -> Outcome {
        let winner = loser.other();
        let remaining: Vec<Card> = self.sequences[loser.index()].drain(..).collect();
        let cards = remaining.len() + self.pot.len();
        self.sequences[winner.index()].extend(remaining);
        self.sequences[winner.index()].extend(self.pot.drain(..));
        self.revealed = [None, None];
        info!(%loser, %winner, cards, "forfeit: not enough cards for war");
        self.finish(winner);
        self.status = format!(
            "{} cannot continue the war. {} wins the game!",
            loser, winner
        );
        Outcome::Forfeit { winner, cards }
    }

    fn finish(&mut self, winner: Side) {
        self.phase = Phase::GameOver;
        self.winner = Some(winner);
        self.status = format!("Game over: {} wins! Press R to restart", winner);
        info!(
            %winner,
            rounds = self.rounds,
            wars = self.wars,
            "game over"
        );
    }

    /// Moves the front card of `side` face-up into the pot.
    fn reveal(&mut self, side: Side) -> Option<Card> {
        let card = self.sequences[side.index()].pop_front()?;
        self.pot.push(card);
        self.revealed[side.index()] = Some(card);
        Some(card)
    }

    /// Commits one hidden stake and one face-up card for `side`.
    fn stake(&mut self, side: Side) -> Option<Card> {
        let hidden = self.sequences[side.index()].pop_front()?;
        self.pot.push(hidden);
        self.reveal(side)
    }

    fn values(&self, player: &Card, opponent: &Card) -> (i32, i32) {
        effective_values(
            player,
            opponent,
            self.items[0].as_ref(),
            self.items[1].as_ref(),
        )
    }

    /// Appends the whole pot to the back of `winner`'s sequence and clears the table.
    fn pay_out(&mut self, winner: Side) -> usize {
        let cards = self.pot.len();
        self.sequences[winner.index()].extend(self.pot.drain(..));
        self.revealed = [None, None];
        cards
    }

    fn assert_conserved(&self) {
        if let Err(e) = self.verify() {
            panic!("card conservation violated: {}", e);
        }
    }
}
