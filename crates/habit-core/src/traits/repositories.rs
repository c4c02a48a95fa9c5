//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::entities::{
    CheckinRecord, CheckinTask, FriendEntry, InboxMessage, IntimacyScore, InteractionKind,
    Message, MessageKind, RankedFriend, User,
};
use crate::error::DomainError;
use crate::value_objects::{PageWindow, RankWindow, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

/// Fields required to create a user (the id is assigned by the store)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub nickname: String,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if a username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Create a new user, returning the stored entity with its assigned id
    async fn create(&self, new_user: &NewUser, password_hash: &str) -> RepoResult<User>;

    /// Update profile fields; `None` fields are left unchanged
    async fn update_profile(
        &self,
        id: UserId,
        nickname: Option<&str>,
        phone: Option<&str>,
        avatar_url: Option<&str>,
    ) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: UserId, password_hash: &str) -> RepoResult<()>;
}

// ============================================================================
// Friendship Repository
// ============================================================================

#[async_trait]
pub trait FriendshipRepository: Send + Sync {
    /// Create the accepted friendship in both directions atomically.
    ///
    /// Surfaces `DomainError::AlreadyFriends` when either edge exists.
    async fn create_pair(&self, user_id: UserId, friend_id: UserId) -> RepoResult<()>;

    /// Check whether an accepted edge user -> friend exists
    async fn exists(&self, user_id: UserId, friend_id: UserId) -> RepoResult<bool>;

    /// All friends of a user, most recently befriended first
    async fn find_friends(&self, user_id: UserId) -> RepoResult<Vec<FriendEntry>>;

    /// Number of friends of a user
    async fn count(&self, user_id: UserId) -> RepoResult<i64>;

    /// All friends ranked by the user's directed intimacy score
    /// (score desc, friendship recency desc), windowed.
    ///
    /// Returns the page plus the total friend count.
    async fn ranked_by_intimacy(
        &self,
        user_id: UserId,
        window: PageWindow,
    ) -> RepoResult<(Vec<RankedFriend>, i64)>;

    /// Friends without a check-in on `date`, most recently befriended first
    async fn unfinished(&self, user_id: UserId, date: NaiveDate) -> RepoResult<Vec<FriendEntry>>;

    /// Friends without a check-in on `date`, ranked by intimacy
    /// (score desc, friendship recency desc), windowed.
    ///
    /// Returns the window plus the total count of unfinished friends.
    async fn ranked_unfinished(
        &self,
        user_id: UserId,
        date: NaiveDate,
        window: RankWindow,
    ) -> RepoResult<(Vec<RankedFriend>, i64)>;
}

// ============================================================================
// Intimacy Repository
// ============================================================================

#[async_trait]
pub trait IntimacyRepository: Send + Sync {
    /// Fetch the directed score row, if any
    async fn find(&self, user_id: UserId, friend_id: UserId) -> RepoResult<Option<IntimacyScore>>;

    /// Apply an interaction to the (actor, target) directed pair as one
    /// atomic read-modify-write; returns the new score.
    ///
    /// Seeds from `IntimacyScore::INITIAL_SCORE` when no row exists and
    /// clamps at zero. The reverse direction is left untouched.
    async fn apply_interaction(
        &self,
        actor_id: UserId,
        target_id: UserId,
        kind: InteractionKind,
    ) -> RepoResult<i32>;

    /// Persist a reminder message and apply the `Remind` interaction in one
    /// transaction; either both writes land or neither does.
    ///
    /// Returns the new (actor, target) score.
    async fn record_reminder(
        &self,
        actor_id: UserId,
        target_id: UserId,
        content: &str,
    ) -> RepoResult<i32>;
}

// ============================================================================
// Record Repository
// ============================================================================

#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Insert a check-in for (user, date).
    ///
    /// Surfaces `DomainError::AlreadyCheckedIn` when one already exists;
    /// uniqueness is enforced by the store, not by a prior read.
    async fn create(&self, user_id: UserId, title: &str, date: NaiveDate)
        -> RepoResult<CheckinRecord>;

    /// Subset of `user_ids` that have a check-in on `date`.
    ///
    /// An empty input returns an empty set without querying the store.
    async fn checked_in_on(
        &self,
        user_ids: &[UserId],
        date: NaiveDate,
    ) -> RepoResult<Vec<UserId>>;

    /// All check-ins of a user, newest first
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<CheckinRecord>>;

    /// Most recent check-ins of a user, capped at `limit`
    async fn recent_by_user(&self, user_id: UserId, limit: i64) -> RepoResult<Vec<CheckinRecord>>;

    /// Global check-in feed, newest first, windowed
    async fn recent(&self, window: PageWindow) -> RepoResult<Vec<CheckinRecord>>;

    /// Total number of check-ins of a user
    async fn count_by_user(&self, user_id: UserId) -> RepoResult<i64>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Persist a message
    async fn create(
        &self,
        sender_id: UserId,
        receiver_id: UserId,
        kind: MessageKind,
        content: &str,
    ) -> RepoResult<Message>;

    /// Inbox of a user joined with sender profiles, newest first, windowed
    async fn find_by_receiver(
        &self,
        receiver_id: UserId,
        window: PageWindow,
    ) -> RepoResult<Vec<InboxMessage>>;

    /// Flip read status 0 -> 1; `MessageNotFound` when no row matches
    async fn mark_read(&self, message_id: i64) -> RepoResult<()>;

    /// Number of unread messages of a user
    async fn unread_count(&self, receiver_id: UserId) -> RepoResult<i64>;
}

// ============================================================================
// Task Repository
// ============================================================================

#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a habit task
    async fn create(&self, user_id: UserId, title: &str) -> RepoResult<CheckinTask>;

    /// Find a task by id
    async fn find_by_id(&self, task_id: i64) -> RepoResult<Option<CheckinTask>>;

    /// All tasks of a user, newest first
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<CheckinTask>>;

    /// Delete a task; `TaskNotFound` when no row matches
    async fn delete(&self, task_id: i64) -> RepoResult<()>;
}
