//! Player profiles and the store that persists them.

extern crate alloc;

use alloc::string::{String, ToString};
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{parse_rank, rank_label};
use crate::error::StoreError;
use crate::stats::Statistics;

/// A player's balance and statistics as held by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerProfile {
    /// Current balance.
    pub balance: usize,
    /// Cumulative statistics.
    pub stats: Statistics,
}

impl PlayerProfile {
    /// Creates a fresh profile with the given balance.
    #[must_use]
    pub fn new(balance: usize) -> Self {
        Self {
            balance,
            stats: Statistics::new(),
        }
    }

    /// Flattens the profile into its persisted form.
    #[must_use]
    pub fn to_record(&self) -> ProfileRecord {
        let stats = &self.stats;
        ProfileRecord {
            balance: self.balance,
            total_hands: stats.hands_played,
            wins: stats.wins,
            losses: stats.losses,
            pushes: stats.pushes,
            blackjacks: stats.naturals,
            best_win_streak: stats.best_win_streak,
            best_loss_streak: stats.best_loss_streak,
            total_bet: stats.total_wagered,
            most_drawn_card: stats
                .most_drawn_rank
                .map(|rank| rank_label(rank).to_string())
                .unwrap_or_default(),
            five_card_charlies: stats.charlies,
        }
    }
}

impl From<&ProfileRecord> for PlayerProfile {
    /// Current streaks and per-rank draw counts are not persisted and start at zero.
    fn from(record: &ProfileRecord) -> Self {
        Self {
            balance: record.balance,
            stats: Statistics {
                hands_played: record.total_hands,
                wins: record.wins,
                losses: record.losses,
                pushes: record.pushes,
                naturals: record.blackjacks,
                best_win_streak: record.best_win_streak,
                best_loss_streak: record.best_loss_streak,
                total_wagered: record.total_bet,
                most_drawn_rank: parse_rank(&record.most_drawn_card),
                charlies: record.five_card_charlies,
                ..Statistics::default()
            },
        }
    }
}

/// The flat record a profile store keeps per player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ProfileRecord {
    /// Current balance.
    pub balance: usize,
    /// Hands played.
    pub total_hands: u32,
    /// Hands won.
    pub wins: u32,
    /// Hands lost.
    pub losses: u32,
    /// Hands pushed.
    pub pushes: u32,
    /// Naturals dealt.
    pub blackjacks: u32,
    /// Longest winning run.
    pub best_win_streak: u32,
    /// Longest losing run.
    pub best_loss_streak: u32,
    /// Sum of all stakes.
    pub total_bet: usize,
    /// Label of the most drawn rank, empty if none.
    pub most_drawn_card: String,
    /// Five-card hands that did not bust.
    pub five_card_charlies: u32,
}

/// Durable storage for player profiles, keyed by player identity.
pub trait ProfileStore {
    /// Loads the record for a player.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown player and
    /// [`StoreError::Unavailable`] if the store cannot be reached.
    fn load(&self, user_id: &str) -> Result<ProfileRecord, StoreError>;

    /// Saves the record for a player, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the store cannot be reached.
    fn save(&mut self, user_id: &str, record: &ProfileRecord) -> Result<(), StoreError>;
}

/// An in-memory profile store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, ProfileRecord>,
    offline: bool,
    saves: usize,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record directly, bypassing the offline switch.
    pub fn insert(&mut self, user_id: &str, record: ProfileRecord) {
        self.records.insert(user_id.to_string(), record);
    }

    /// Returns the stored record for a player.
    #[must_use]
    pub fn get(&self, user_id: &str) -> Option<&ProfileRecord> {
        self.records.get(user_id)
    }

    /// Makes every load and save fail with [`StoreError::Unavailable`].
    pub const fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    /// Returns the number of successful saves.
    #[must_use]
    pub const fn saves(&self) -> usize {
        self.saves
    }
}

impl ProfileStore for MemoryStore {
    fn load(&self, user_id: &str) -> Result<ProfileRecord, StoreError> {
        if self.offline {
            return Err(StoreError::Unavailable);
        }
        self.records.get(user_id).cloned().ok_or(StoreError::NotFound)
    }

    fn save(&mut self, user_id: &str, record: &ProfileRecord) -> Result<(), StoreError> {
        if self.offline {
            return Err(StoreError::Unavailable);
        }
        self.records.insert(user_id.to_string(), record.clone());
        self.saves += 1;
        Ok(())
    }
}
