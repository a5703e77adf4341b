//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the club management
//! API, including endpoints, business logic, data access, and infrastructure. The
//! backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic and transaction boundaries
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, token service)
//! - **Startup** (`startup`) - Database connection, migrations, and startup checks
//! - **Router** (`router`) - Axum route configuration
//! - **Docs** (`docs`) - OpenAPI document served by Swagger UI
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** authenticates the bearer token and checks permissions
//! 3. **Controller** converts DTOs to validated params, calls service
//! 4. **Service** executes business logic, opening a transaction for multi-step writes
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod docs;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
