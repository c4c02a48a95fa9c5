//! Entity <-> model mappers
//!
//! `From` impls converting database row models into domain entities.

mod friendship;
mod intimacy;
mod message;
mod record;
mod task;
mod user;
