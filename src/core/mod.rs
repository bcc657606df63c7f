//! # Core Application Logic
//!
//! This module contains Explore's browsing logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   Search   │
//!             │  Adapter   │          │  Provider  │
//!             │ (ratatui)  │          │ (algolia)  │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all browsing state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`catalog`]: Categories templates can be filtered by
//! - [`debounce`]: Keystroke coalescing
//! - [`config`]: Config file and override resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod debounce;
pub mod state;
