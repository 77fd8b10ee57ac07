//! # Chat API Library
//!
//! A small REST backend exposing chats and their messages:
//! - `POST /chats`, `GET /chats/{id}`, `DELETE /chats/{id}`
//! - `POST /chats/{id}/messages`
//! - `GET /health`
//!
//! Data lives in PostgreSQL; deleting a chat removes its messages through an
//! `ON DELETE CASCADE` foreign key.
//!
//! ## Module Structure
//!
//! ```text
//! chat_api/
//! +-- config/         Configuration management
//! +-- domain/         Entities, value objects, repository traits
//! +-- application/    Services and DTOs
//! +-- infrastructure/ PostgreSQL pool, migrations, repositories
//! +-- presentation/   HTTP routes, handlers, middleware
//! +-- shared/         Errors and validation
//! ```

// Configuration module
pub mod config;

// Domain layer
pub mod domain;

// Application layer
pub mod application;

// Infrastructure layer
pub mod infrastructure;

// Presentation layer
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
