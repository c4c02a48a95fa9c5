//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with migrations applied
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use anyhow::Result;
use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Register a fresh user and return the profile
async fn register_user(server: &TestServer) -> Result<UserResponse> {
    let request = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &request).await?;
    assert_json(response, StatusCode::CREATED).await
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(user.username, request.username);
    // Nickname falls back to the username when omitted
    assert_eq!(user.nickname, request.username);
    assert!(!user.avatar_url.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/api/v1/auth/register", &request).await.unwrap();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "USERNAME_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_register_with_referrer_creates_mutual_friendship() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let referrer = register_user(&server).await.unwrap();

    let request = RegisterRequest::with_referrer(referrer.id);
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let newcomer: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Both directions must exist
    let response = server
        .get(&format!("/api/v1/users/{}/friends", newcomer.id))
        .await
        .unwrap();
    let friends: Vec<FriendResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(friends.iter().any(|f| f.friend_id == referrer.id));

    let response = server
        .get(&format!("/api/v1/users/{}/friends", referrer.id))
        .await
        .unwrap();
    let friends: Vec<FriendResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(friends.iter().any(|f| f.friend_id == newcomer.id));
}

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register_req).await.unwrap();

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.username, register_req.username);
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register_req).await.unwrap();

    let login_req = LoginRequest {
        username: register_req.username.clone(),
        password: "not-the-password".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_change_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let change_req = ChangePasswordRequest {
        user_id: user.id,
        old_password: register_req.password.clone(),
        new_password: "freshpassword".to_string(),
    };
    let response = server
        .post("/api/v1/auth/change-password", &change_req)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Old password no longer works
    let response = server
        .post(
            "/api/v1/auth/login",
            &LoginRequest::from_register(&register_req),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // New password does
    let login_req = LoginRequest {
        username: register_req.username.clone(),
        password: "freshpassword".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_get_and_update_profile() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register_user(&server).await.unwrap();

    let response = server.get(&format!("/api/v1/users/{}", user.id)).await.unwrap();
    let fetched: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, user.id);

    let update = UpdateProfileRequest {
        nickname: Some("Night Owl".to_string()),
        ..UpdateProfileRequest::default()
    };
    let response = server
        .patch(&format!("/api/v1/users/{}", user.id), &update)
        .await
        .unwrap();
    let updated: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.nickname, "Night Owl");
    // Untouched fields survive the partial update
    assert_eq!(updated.username, user.username);
}

#[tokio::test]
async fn test_invalid_user_id_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/users/0").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Check-in Tests
// ============================================================================

#[tokio::test]
async fn test_check_in_and_same_day_conflict() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register_user(&server).await.unwrap();

    let checkin = CheckinRequest {
        user_id: user.id,
        title: "Morning run".to_string(),
    };
    let response = server.post("/api/v1/checkins", &checkin).await.unwrap();
    let record: RecordResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(record.user_id, user.id);
    assert_eq!(record.title, "Morning run");

    // Second check-in on the same calendar day is rejected
    let response = server.post("/api/v1/checkins", &checkin).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "ALREADY_CHECKED_IN");

    let response = server
        .get(&format!("/api/v1/users/{}/records", user.id))
        .await
        .unwrap();
    let records: Vec<RecordResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_global_recent_records() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register_user(&server).await.unwrap();

    let checkin = CheckinRequest {
        user_id: user.id,
        title: "Stretching".to_string(),
    };
    server.post("/api/v1/checkins", &checkin).await.unwrap();

    let response = server.get("/api/v1/records?page=1&page_size=50").await.unwrap();
    let records: Vec<RecordResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(records.iter().any(|r| r.user_id == user.id));
}

// ============================================================================
// Task Tests
// ============================================================================

#[tokio::test]
async fn test_task_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register_user(&server).await.unwrap();

    let create = CreateTaskRequest {
        user_id: user.id,
        title: "Read 20 pages".to_string(),
    };
    let response = server.post("/api/v1/tasks", &create).await.unwrap();
    let task: TaskResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(task.title, "Read 20 pages");

    let response = server
        .get(&format!("/api/v1/users/{}/tasks", user.id))
        .await
        .unwrap();
    let tasks: Vec<TaskResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(tasks.len(), 1);

    let response = server
        .delete(&format!("/api/v1/tasks/{}?user_id={}", task.id, user.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Deleting again is NotFound
    let response = server
        .delete(&format!("/api/v1/tasks/{}?user_id={}", task.id, user.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_task_owned_by_someone_else() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = register_user(&server).await.unwrap();
    let intruder = register_user(&server).await.unwrap();

    let create = CreateTaskRequest {
        user_id: owner.id,
        title: "Water the plants".to_string(),
    };
    let response = server.post("/api/v1/tasks", &create).await.unwrap();
    let task: TaskResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Someone else's task reads as not found
    let response = server
        .delete(&format!("/api/v1/tasks/{}?user_id={}", task.id, intruder.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Friendship Tests
// ============================================================================

#[tokio::test]
async fn test_add_friend_and_conflicts() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register_user(&server).await.unwrap();
    let bob = register_user(&server).await.unwrap();

    let request = AddFriendRequest {
        user_id: alice.id,
        friend_id: bob.id,
    };
    let response = server.post("/api/v1/friends", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // The pair already exists, in either direction
    let response = server.post("/api/v1/friends", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let reversed = AddFriendRequest {
        user_id: bob.id,
        friend_id: alice.id,
    };
    let response = server.post("/api/v1/friends", &reversed).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // Self-friendship is invalid
    let selfie = AddFriendRequest {
        user_id: alice.id,
        friend_id: alice.id,
    };
    let response = server.post("/api/v1/friends", &selfie).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Intimacy & Reminder Tests
// ============================================================================

#[tokio::test]
async fn test_reminders_accumulate_directed_score() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register_user(&server).await.unwrap();
    let bob = register_user(&server).await.unwrap();

    let request = AddFriendRequest {
        user_id: alice.id,
        friend_id: bob.id,
    };
    server.post("/api/v1/friends", &request).await.unwrap();

    // Each reminder adds 5 to Alice's directed score toward Bob
    let remind_path = format!("/api/v1/users/{}/friends/{}/remind", alice.id, bob.id);
    for expected in [5, 10, 15] {
        let response = server.post(&remind_path, &()).await.unwrap();
        let result: RemindResponse = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(result.friend_id, bob.id);
        assert_eq!(result.intimacy_score, expected);
    }

    // The reverse direction is untouched: Bob's first reminder starts at 5
    let reverse_path = format!("/api/v1/users/{}/friends/{}/remind", bob.id, alice.id);
    let response = server.post(&reverse_path, &()).await.unwrap();
    let result: RemindResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(result.intimacy_score, 5);

    // Bob received three reminder messages
    let response = server
        .get(&format!("/api/v1/users/{}/messages", bob.id))
        .await
        .unwrap();
    let inbox: Vec<InboxMessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let reminders: Vec<_> = inbox
        .iter()
        .filter(|m| m.sender_id == alice.id && m.kind == "remind")
        .collect();
    assert_eq!(reminders.len(), 3);

    let response = server
        .get(&format!("/api/v1/users/{}/messages/unread-count", bob.id))
        .await
        .unwrap();
    let unread: UnreadCountBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(unread.unread_count, 3);

    // Mark one as read
    let response = server
        .put(&format!("/api/v1/messages/{}/read", reminders[0].id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/users/{}/messages/unread-count", bob.id))
        .await
        .unwrap();
    let unread: UnreadCountBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(unread.unread_count, 2);
}

#[tokio::test]
async fn test_remind_requires_friendship() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register_user(&server).await.unwrap();
    let stranger = register_user(&server).await.unwrap();

    // A missing friendship edge is a precondition failure, not a 404
    let path = format!("/api/v1/users/{}/friends/{}/remind", alice.id, stranger.id);
    let response = server.post(&path, &()).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "NOT_FRIENDS");
}

// ============================================================================
// Ranking Tests
// ============================================================================

#[tokio::test]
async fn test_unfinished_ranking_excludes_checked_in_friends() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register_user(&server).await.unwrap();
    let bob = register_user(&server).await.unwrap();
    let carol = register_user(&server).await.unwrap();

    for friend_id in [bob.id, carol.id] {
        let request = AddFriendRequest {
            user_id: alice.id,
            friend_id,
        };
        server.post("/api/v1/friends", &request).await.unwrap();
    }

    // Carol checks in today; Bob does not
    let checkin = CheckinRequest {
        user_id: carol.id,
        title: "Evening yoga".to_string(),
    };
    server.post("/api/v1/checkins", &checkin).await.unwrap();

    // Two reminders lift Bob's score to 10
    let remind_path = format!("/api/v1/users/{}/friends/{}/remind", alice.id, bob.id);
    server.post(&remind_path, &()).await.unwrap();
    server.post(&remind_path, &()).await.unwrap();

    // Top list: only Bob, carrying the accumulated score
    let response = server
        .get(&format!("/api/v1/users/{}/friends/unfinished/top", alice.id))
        .await
        .unwrap();
    let top: RankedListBody<RankedFriendResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(top.total_count, 1);
    assert_eq!(top.data.len(), 1);
    assert_eq!(top.data[0].friend_id, bob.id);
    assert_eq!(top.data[0].intimacy_score, 10);

    // Plain unfinished listing agrees
    let response = server
        .get(&format!("/api/v1/users/{}/friends/unfinished", alice.id))
        .await
        .unwrap();
    let unfinished: Vec<FriendResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(unfinished.len(), 1);
    assert_eq!(unfinished[0].friend_id, bob.id);

    // Paged ranked view counts unfinished friends only
    let response = server
        .get(&format!(
            "/api/v1/users/{}/friends/unfinished?page=1&page_size=10",
            alice.id
        ))
        .await
        .unwrap();
    let page: PaginatedBody<RankedFriendResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.total_count, 1);
    assert_eq!(page.data[0].friend_id, bob.id);
}

#[tokio::test]
async fn test_ranked_friends_pagination_total_is_full_friend_count() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register_user(&server).await.unwrap();

    for _ in 0..3 {
        let friend = register_user(&server).await.unwrap();
        let request = AddFriendRequest {
            user_id: alice.id,
            friend_id: friend.id,
        };
        server.post("/api/v1/friends", &request).await.unwrap();
    }

    let response = server
        .get(&format!(
            "/api/v1/users/{}/friends/paginated?page=1&page_size=2",
            alice.id
        ))
        .await
        .unwrap();
    let first: PaginatedBody<RankedFriendResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(first.total_count, 3);
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.data.len(), 2);

    let response = server
        .get(&format!(
            "/api/v1/users/{}/friends/paginated?page=2&page_size=2",
            alice.id
        ))
        .await
        .unwrap();
    let second: PaginatedBody<RankedFriendResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(second.data.len(), 1);

    // Pages never overlap and cover every friend
    let mut seen: Vec<i64> = first
        .data
        .iter()
        .chain(second.data.iter())
        .map(|f| f.friend_id)
        .collect();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), 3);
}

// ============================================================================
// Message Tests
// ============================================================================

#[tokio::test]
async fn test_no_direct_message_send_route() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register_user(&server).await.unwrap();
    let bob = register_user(&server).await.unwrap();

    // Messages are only created by the remind flow
    let body = serde_json::json!({
        "sender_id": alice.id,
        "receiver_id": bob.id,
        "content": "Nice streak!",
    });
    let response = server.post("/api/v1/messages", &body).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .get(&format!("/api/v1/users/{}/messages", bob.id))
        .await
        .unwrap();
    let inbox: Vec<InboxMessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(inbox.is_empty());
}

// ============================================================================
// Stats Tests
// ============================================================================

#[tokio::test]
async fn test_user_stats() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register_user(&server).await.unwrap();
    let bob = register_user(&server).await.unwrap();

    let request = AddFriendRequest {
        user_id: alice.id,
        friend_id: bob.id,
    };
    server.post("/api/v1/friends", &request).await.unwrap();

    let checkin = CheckinRequest {
        user_id: alice.id,
        title: "Journal entry".to_string(),
    };
    server.post("/api/v1/checkins", &checkin).await.unwrap();

    let response = server
        .get(&format!("/api/v1/users/{}/stats", alice.id))
        .await
        .unwrap();
    let stats: StatsBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(stats.total_checkins, 1);
    assert_eq!(stats.friend_count, 1);
    // Bob has not checked in today
    assert_eq!(stats.unfinished_friend_count, 1);
    assert_eq!(stats.unread_messages, 0);
    assert_eq!(stats.recent_checkins.len(), 1);
}
