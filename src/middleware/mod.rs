//! Middleware for request processing.
//!
//! # Authorization Flow
//!
//! 1. Client sends a request with an `Authorization: Bearer <token>` header
//! 2. [`role::require_roles`] resolves the token to an identity via the
//!    hosted provider
//! 3. The identity's role is checked against the route's allowed set
//! 4. The identity is attached to the request and the handler executes

pub mod role;
