//! Server-side API backend and business logic.
//!
//! This module contains the complete backend: HTTP endpoints, the Spotify
//! integration, business logic and data access. The backend uses Axum as the
//! web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic, the token refresh guard and the playlist mutation coordinator
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer authentication and the login session
//! - **Spotify** (`spotify/`) - Accounts service and Web API client behind the `SpotifyProvider` trait
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, OAuth client, Spotify provider)
//! - **Startup** (`startup`) - Initialization of tracing, database, sessions, and clients
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Utilities** (`util/`) - Join code generation and request deadlines
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** resolves the caller from the bearer token
//! 3. **Controller** validates access, converts DTOs to params, calls service
//! 4. **Service** executes business logic, refreshing Spotify credentials when needed
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Service** returns domain model to controller
//! 7. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod spotify;
pub mod startup;
pub mod state;
pub mod util;
