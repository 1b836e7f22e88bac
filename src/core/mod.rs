//! # Core Application Logic
//!
//! The sports catalog and the rules applied to it.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • model (catalog)      │
//!                    │  • service (fetch)      │
//!                    │  • store (view + favs)  │
//!                    │                         │
//!                    └───────────┬─────────────┘
//!                                │ Published<T>
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   Plain    │      │   Tests    │
//!     │  Adapter   │      │  stdout    │      │            │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`model`]: `Sport`, `Event`, `SportId` and the wire format
//! - [`service`]: fetches the catalog from the fixed endpoint
//! - [`store`]: `EventStore`, the canonical catalog and the derived view
//! - [`published`]: the subscribe/publish primitive the store announces through
//! - [`clock`]: injectable "now"
//! - [`config`]: settings file, env and CLI resolution

pub mod clock;
pub mod config;
pub mod model;
pub mod published;
pub mod service;
pub mod store;
