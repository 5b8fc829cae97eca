use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::card_value;
use crate::ports::{BalanceStore, ResetMarker, TableView};
use crate::round::{Outcome, PlayerDraw, Resolution, Round, Side};
use crate::rules::{validate_bet, DEFAULT_BET, STARTING_BALANCE};
use crate::settlement::Settlement;
use crate::timer::{DepletionTimer, Tick, TimerChange, RESET_BALANCE};

pub const EXPIRY_NOTICE: &str = "You have been reset to 100 coins!";
pub const RESTART_NOTICE: &str = "Timer has been reset to 100 coins!";
pub const INVALID_BET_NOTICE: &str = "Invalid bet amount!";
pub const ABORT_NOTICE: &str = "The deck ran out. Round aborted, no coins changed hands.";

/// Options for opening a [`Table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    /// Seed for the deck stream; random when `None`
    pub seed: Option<u64>,
    /// Bet in force when the table opens
    pub bet: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seed: None,
            bet: DEFAULT_BET,
        }
    }
}

/// Single owner of the game state: balance, bet, current round and the
/// depletion timer.
///
/// Every balance change goes through the table, which persists it, shows it
/// and lets the timer react, in that order.
///
/// # Examples
///
/// ```
/// use coinjack_engine::cards::{Card, Rank, Suit};
/// use coinjack_engine::deck::Deck;
/// use coinjack_engine::ports::{MemoryStore, TableView};
/// use coinjack_engine::round::{Outcome, Side};
/// use coinjack_engine::table::{Table, TableConfig};
///
/// struct Quiet;
/// impl TableView for Quiet {
///     fn render_card(&mut self, _: Side, _: Card) {}
///     fn display_message(&mut self, _: &str) {}
///     fn set_input_enabled(&mut self, _: bool, _: bool) {}
/// }
///
/// let mut table = Table::open(Quiet, MemoryStore::default(), TableConfig::default());
/// table
///     .reset_round_with(Deck::from_cards(vec![
///         Card::new(Rank::Ace, Suit::Spades),
///         Card::new(Rank::Ace, Suit::Hearts),
///     ]))
///     .unwrap();
///
/// table.hit().unwrap();
/// let draw = table.hit().unwrap();
/// assert_eq!(draw.outcome, Some(Outcome::PlayerBust));
/// assert_eq!(table.balance(), 90);
/// ```
#[derive(Debug)]
pub struct Table<V: TableView, S: BalanceStore> {
    view: V,
    store: S,
    balance: i64,
    bet: u32,
    round: Option<Round>,
    last_settlement: Option<Settlement>,
    timer: DepletionTimer,
    seed: u64,
    rng: ChaCha20Rng,
}

impl<V: TableView, S: BalanceStore> Table<V, S> {
    /// Loads the persisted balance and opens the first round.
    ///
    /// A pending-reset marker left by a previous session restores the
    /// balance to 100 straight away and is cleared.
    pub fn open(view: V, mut store: S, config: TableConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        let balance = store.load_balance().unwrap_or(STARTING_BALANCE);
        let marker = store.load_marker();

        let mut table = Self {
            view,
            store,
            balance,
            bet: config.bet,
            round: None,
            last_settlement: None,
            timer: DepletionTimer::new(),
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        };
        tracing::info!(seed, balance, bet = config.bet, "table opened");

        let notice = if marker == ResetMarker::PendingReset {
            table.store.persist_marker(ResetMarker::None);
            tracing::info!(balance, "pending reset honoured at startup");
            table.commit_balance(RESET_BALANCE);
            Some(RESTART_NOTICE)
        } else {
            table.commit_balance(balance);
            None
        };

        // the round stays closed if the bet no longer fits the balance
        let _ = table.reset_round();
        if let Some(text) = notice {
            table.view.display_message(text);
        }
        table
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn bet(&self) -> u32 {
        self.bet
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn last_settlement(&self) -> Option<&Settlement> {
        self.last_settlement.as_ref()
    }

    pub fn timer(&self) -> &DepletionTimer {
        &self.timer
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Sets the bet used from the next round on.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidBet`] unless `0 < amount <= balance`; the previous
    /// bet stays in force.
    pub fn place_bet(&mut self, amount: i64) -> Result<u32, GameError> {
        match validate_bet(amount, self.balance) {
            Ok(bet) => {
                tracing::info!(bet, previous = self.bet, "bet placed");
                self.bet = bet;
                Ok(bet)
            }
            Err(e) => {
                tracing::warn!(amount, balance = self.balance, "bet rejected");
                self.view.display_message(INVALID_BET_NOTICE);
                Err(e)
            }
        }
    }

    /// Opens a new round with a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// [`GameError::InsufficientBalance`] when the current bet exceeds the
    /// balance; no round is open afterwards.
    pub fn reset_round(&mut self) -> Result<(), GameError> {
        let deck = Deck::new_with_seed(self.rng.random());
        self.reset_round_with(deck)
    }

    /// Opens a new round dealing from `deck`.
    ///
    /// # Errors
    ///
    /// Same as [`Table::reset_round`].
    pub fn reset_round_with(&mut self, deck: Deck) -> Result<(), GameError> {
        self.round = None;
        self.view.clear_table();
        self.view.show_totals(0, 0);

        if i64::from(self.bet) > self.balance {
            let err = GameError::InsufficientBalance {
                bet: self.bet,
                balance: self.balance,
            };
            tracing::warn!(bet = self.bet, balance = self.balance, "round not opened");
            self.view.set_input_enabled(false, false);
            self.view.display_message(&err.to_string());
            return Err(err);
        }

        tracing::debug!(bet = self.bet, "round opened");
        self.round = Some(Round::new(self.bet, deck));
        self.view.set_input_enabled(true, true);
        Ok(())
    }

    /// Deals one card to the player, settling the round on a bust.
    ///
    /// # Errors
    ///
    /// [`GameError::NoRound`] or [`GameError::IllegalTransition`] when no open
    /// round accepts the draw. [`GameError::EmptyDeck`] aborts the round and
    /// opens a fresh one.
    pub fn hit(&mut self) -> Result<PlayerDraw, GameError> {
        let round = self.round.as_mut().ok_or(GameError::NoRound)?;
        let draw = match round.player_draw() {
            Ok(draw) => draw,
            Err(e) => return Err(self.reject(e)),
        };

        let dealer_total = round.dealer().total();
        let bet = round.bet();
        self.view.render_card(Side::Player, draw.card);
        self.view.show_totals(draw.total, dealer_total);
        if let Some(outcome) = draw.outcome {
            self.settle(outcome, bet);
        }
        Ok(draw)
    }

    /// Ends the player's turn, plays the dealer out and settles.
    ///
    /// # Errors
    ///
    /// Same as [`Table::hit`].
    pub fn stand(&mut self) -> Result<Resolution, GameError> {
        let round = self.round.as_mut().ok_or(GameError::NoRound)?;
        let resolution = match round.player_stand() {
            Ok(resolution) => resolution,
            Err(e) => return Err(self.reject(e)),
        };

        let player_total = round.player().total();
        let bet = round.bet();
        let mut running = 0;
        for &card in &resolution.dealer_cards {
            running += card_value(card);
            self.view.render_card(Side::Dealer, card);
            self.view.show_totals(player_total, running);
        }
        self.settle(resolution.outcome, bet);
        Ok(resolution)
    }

    /// Advances the depletion countdown by one second.
    pub fn on_tick(&mut self) -> Tick {
        let tick = self.timer.tick();
        match tick {
            Tick::Idle => {}
            Tick::Counting(remaining) => self.view.show_countdown(Some(remaining)),
            Tick::Expired => {
                self.commit_balance(RESET_BALANCE);
                self.view.show_countdown(None);
                self.view.display_message(EXPIRY_NOTICE);
            }
        }
        tick
    }

    /// Ends the session. With an empty balance a pending reset is recorded
    /// so the next session starts with 100 coins.
    pub fn close(&mut self) -> ResetMarker {
        let marker = if self.balance <= 0 {
            ResetMarker::PendingReset
        } else {
            ResetMarker::None
        };
        if marker == ResetMarker::PendingReset {
            tracing::info!(balance = self.balance, "recording pending reset");
            self.store.persist_marker(marker);
        }
        marker
    }

    fn settle(&mut self, outcome: Outcome, bet: u32) {
        let settlement = Settlement::apply(outcome, bet, self.balance);
        tracing::info!(
            %outcome,
            bet,
            delta = settlement.delta,
            balance = settlement.balance_after,
            "round settled"
        );
        self.last_settlement = Some(settlement);
        self.commit_balance(settlement.balance_after);
        self.view.display_message(outcome.message());
        self.view.set_input_enabled(false, false);
    }

    fn reject(&mut self, e: GameError) -> GameError {
        if e == GameError::EmptyDeck {
            tracing::error!("deck exhausted mid-round, aborting");
            let _ = self.reset_round();
            self.view.display_message(ABORT_NOTICE);
        } else {
            tracing::warn!(error = %e, "action rejected");
        }
        e
    }

    fn commit_balance(&mut self, balance: i64) {
        self.balance = balance;
        self.store.persist_balance(balance);
        self.view.show_balance(balance);
        match self.timer.observe(balance) {
            TimerChange::Armed => self.view.show_countdown(Some(self.timer.remaining())),
            TimerChange::Cancelled => self.view.show_countdown(None),
            TimerChange::Unchanged => {}
        }
    }
}
