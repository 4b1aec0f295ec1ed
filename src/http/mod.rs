//! HTTP server module for the dashboard backend.
//!
//! This module exposes the pure service layer as an axum-based REST API.
//! The frontend re-requests the two chart endpoints on every input change
//! (site selection or payload range); each request is one synchronous,
//! side-effect-free recomputation over the shared immutable dataset.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Query parsing, defaults and clamping                   │
//! │  - JSON serialization                                     │
//! │  - CORS, compression, tracing                             │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Site catalog, aggregation, filtering                   │
//! │  - Chart spec builders                                    │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Dataset (immutable, loaded once at startup)              │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;

pub mod error;

pub mod handlers;

pub mod router;

pub mod state;

pub use router::create_router;

pub use state::AppState;
