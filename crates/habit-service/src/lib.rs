//! # habit-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export the request/response surface for the API layer
pub use dto::{
    AddFriendRequest, ChangePasswordRequest, CheckinRequest, CreateTaskRequest, FriendResponse,
    HealthResponse, InboxMessageResponse, LoginRequest, PaginatedResponse, RankedFriendResponse,
    RankedListResponse, ReadinessResponse, RecordResponse, RegisterRequest, RemindResponse,
    StatsResponse, TaskResponse, UnreadCountResponse, UpdateProfileRequest, UserResponse,
};
pub use services::{
    AuthService, CheckinService, FriendshipService, IntimacyService, MessageService,
    RankingService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    StatsService, TaskService, UserService,
};
