//! Intimacy score - directed affinity between two users
//!
//! The score one user accrues toward another. Directed: score(A→B) and
//! score(B→A) are independent rows and an interaction only moves the
//! actor's side. A missing row is equivalent to a score of 0.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::UserId;

/// An interaction that changes how the actor regards the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    /// Actor reminded the target to check in
    Remind,
    /// Any other lightweight interaction
    General,
    /// Actor and target checked in on the same day
    SharedCheckin,
}

impl InteractionKind {
    /// Score delta applied to the (actor, target) directed pair
    pub const fn delta(&self) -> i32 {
        match self {
            Self::Remind => 5,
            Self::General => 1,
            Self::SharedCheckin => 3,
        }
    }
}

/// One directed intimacy score row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntimacyScore {
    pub user_id: UserId,
    pub friend_id: UserId,
    pub score: i32,
    pub last_interaction: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IntimacyScore {
    /// Seed score for a pair with no prior row
    pub const INITIAL_SCORE: i32 = 0;

    /// The update rule: scores accumulate but never go below zero.
    pub const fn next_score(current: i32, delta: i32) -> i32 {
        let next = current + delta;
        if next < 0 {
            0
        } else {
            next
        }
    }

    /// Apply an interaction to this row, refreshing recency unconditionally.
    pub fn apply(&mut self, kind: InteractionKind) {
        let now = Utc::now();
        self.score = Self::next_score(self.score, kind.delta());
        self.last_interaction = now;
        self.updated_at = now;
    }
}
