//! A player session: one game bound to one stored profile.
//!
//! The session loads the profile when it opens and saves it after every
//! settled round and on exit. Store failures are logged and kept for the
//! caller; play continues on the in-memory state.

extern crate alloc;

use alloc::string::{String, ToString};

use crate::error::{ActionError, BetError, StoreError};
use crate::game::{Game, TableSnapshot};
use crate::options::TableOptions;
use crate::profile::{PlayerProfile, ProfileStore};
use crate::result::RoundResult;

/// One player's session at the table.
#[derive(Debug)]
pub struct Session<S: ProfileStore> {
    user_id: String,
    store: S,
    game: Game,
    /// Balance and statistics as of the last settlement.
    committed: PlayerProfile,
    message: Option<String>,
    last_store_error: Option<StoreError>,
}

impl<S: ProfileStore> Session<S> {
    /// Opens a session for `user_id`, loading their profile from `store`.
    ///
    /// An unknown player, or a stored balance of zero, starts from
    /// `options.starting_balance`. If the store is unavailable the session
    /// starts from a fresh profile and the failure is kept in
    /// [`Session::last_store_error`].
    #[must_use]
    pub fn open(store: S, user_id: &str, options: TableOptions, seed: u64) -> Self {
        let mut last_store_error = None;

        let mut profile = match store.load(user_id) {
            Ok(record) => PlayerProfile::from(&record),
            Err(StoreError::NotFound) => PlayerProfile::new(options.starting_balance),
            Err(err) => {
                log::warn!("could not load profile for {user_id}: {err}");
                last_store_error = Some(err);
                PlayerProfile::new(options.starting_balance)
            }
        };
        if profile.balance == 0 {
            profile.balance = options.starting_balance;
        }

        log::info!("session opened for {user_id} with balance {}", profile.balance);

        Self {
            user_id: user_id.to_string(),
            store,
            game: Game::new(profile.clone(), options, seed),
            committed: profile,
            message: None,
            last_store_error,
        }
    }

    /// Returns the player identity.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Returns the game.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the game mutably.
    pub const fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// Returns the profile store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the most recent load or save failure, cleared by the next success.
    #[must_use]
    pub const fn last_store_error(&self) -> Option<StoreError> {
        self.last_store_error
    }

    /// Returns the table view with the latest message attached.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        let mut snapshot = self.game.snapshot();
        snapshot.message.clone_from(&self.message);
        snapshot
    }

    /// Starts a round. See [`Game::start_round`].
    ///
    /// # Errors
    ///
    /// Returns the engine's [`BetError`]; the reason is also put in the message.
    pub fn start_round(&mut self, amount: usize) -> Result<Option<RoundResult>, BetError> {
        let outcome = self.game.start_round(amount);
        match &outcome {
            Ok(Some(result)) => self.commit(result),
            Ok(None) => self.message = None,
            Err(BetError::InsufficientFunds) => {
                self.message = Some("Not enough funds to bet. Game over!".to_string());
            }
            Err(err) => self.message = Some(err.to_string()),
        }
        outcome
    }

    /// Hits the active hand. See [`Game::hit`].
    ///
    /// # Errors
    ///
    /// Returns the engine's [`ActionError`].
    pub fn hit(&mut self) -> Result<Option<RoundResult>, ActionError> {
        let outcome = self.game.hit();
        self.after_action(outcome, "hit")
    }

    /// Stands on the active hand. See [`Game::stand`].
    ///
    /// # Errors
    ///
    /// Returns the engine's [`ActionError`].
    pub fn stand(&mut self) -> Result<Option<RoundResult>, ActionError> {
        let outcome = self.game.stand();
        self.after_action(outcome, "stand")
    }

    /// Doubles down on the active hand. See [`Game::double_down`].
    ///
    /// # Errors
    ///
    /// Returns the engine's [`ActionError`]; the round continues.
    pub fn double_down(&mut self) -> Result<Option<RoundResult>, ActionError> {
        let outcome = self.game.double_down();
        self.after_action(outcome, "double down")
    }

    /// Splits the active hand. See [`Game::split`].
    ///
    /// # Errors
    ///
    /// Returns the engine's [`ActionError`]; the round continues.
    pub fn split(&mut self) -> Result<Option<RoundResult>, ActionError> {
        let outcome = self.game.split();
        self.after_action(outcome, "split")
    }

    /// Ends the session, saving the profile as of the last settlement.
    ///
    /// A round still in progress is abandoned and its stake is not committed.
    /// Returns the store together with the outcome of the final save.
    #[must_use]
    pub fn exit(mut self) -> (S, Result<(), StoreError>) {
        let saved = self.save();
        log::info!("session closed for {}", self.user_id);
        (self.store, saved)
    }

    fn after_action(
        &mut self,
        outcome: Result<Option<RoundResult>, ActionError>,
        action: &str,
    ) -> Result<Option<RoundResult>, ActionError> {
        match &outcome {
            Ok(Some(result)) => self.commit(result),
            Ok(None) => self.message = None,
            Err(ActionError::InsufficientFunds) => {
                self.message = Some(alloc::format!("Not enough funds to {action}!"));
            }
            Err(err) => self.message = Some(err.to_string()),
        }
        outcome
    }

    fn commit(&mut self, result: &RoundResult) {
        self.message = Some(result.to_string());
        self.committed = self.game.profile();
        if self.save().is_err() {
            log::debug!("round kept in memory for {}", self.user_id);
        }
    }

    fn save(&mut self) -> Result<(), StoreError> {
        let record = self.committed.to_record();
        match self.store.save(&self.user_id, &record) {
            Ok(()) => {
                self.last_store_error = None;
                Ok(())
            }
            Err(err) => {
                log::warn!("could not save profile for {}: {err}", self.user_id);
                self.last_store_error = Some(err);
                Err(err)
            }
        }
    }
}
