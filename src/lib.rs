//! # Authgate API
//!
//! A minimal REST API starter built with Rust and Axum. All identity
//! storage and credential verification is delegated to an external hosted
//! auth provider; this service exposes authentication endpoints, a
//! role-based access-control gate and an admin role-assignment endpoint
//! on top of it.
//!
//! ## Overview
//!
//! - **Authentication**: register, login, token refresh and current-user
//!   lookup, each a thin orchestration over the provider
//! - **Role Gate**: bearer-token middleware that resolves the caller's
//!   identity against the provider on every request and enforces a
//!   per-route allowed-role set
//! - **Validation**: declarative request DTO validation with
//!   first-violation short-circuit
//! - **Response Envelope**: every reply is `{success, message, data}`
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── config/           # CORS, provider and rate-limit configuration
//! ├── middleware/       # Role gate
//! ├── modules/          # Feature modules
//! │   ├── auth/        # register / login / refresh-token / me
//! │   ├── protected/   # Role-gated demo routes
//! │   └── users/       # Admin role assignment
//! ├── provider/         # Identity provider trait, GoTrue client, test fake
//! └── utils/            # Shared error type
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: Provider orchestration and error mapping
//! - `model.rs`: DTOs and response projections
//! - `router.rs`: Axum router configuration
//!
//! ## Request Flow
//!
//! rate limiter → validator → (role gate) → handler → provider call →
//! response envelope.
//!
//! No identity or token is ever cached: every protected request
//! re-resolves its bearer token against the provider, trading a remote
//! round trip for the impossibility of stale authorization.
//!
//! ## Environment Variables
//!
//! ```bash
//! GOTRUE_URL=https://project.supabase.co/auth/v1
//! GOTRUE_ANON_KEY=public-anon-key
//! GOTRUE_SERVICE_KEY=service-role-key
//! PORT=8888
//! ```
//!
//! ## API Documentation
//!
//! When the server is running, API documentation is available at:
//!
//! - Swagger UI: `http://localhost:8888/swagger-ui`
//! - Scalar: `http://localhost:8888/scalar`

pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod provider;
pub mod response;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
