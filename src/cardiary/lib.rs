//! # Cardiary Architecture
//!
//! Cardiary is a **UI-agnostic diary engine**. A therapy client keeps a
//! private, link-addressable journal of "cards" — entries tagged to the
//! before/after phase of a session — and an administrator can enumerate and
//! delete whole diaries. This crate is the persistence engine behind that; a
//! small CLI client ships alongside it, but a web front end would consume
//! exactly the same API.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - DiaryApi<S>: thin facade over commands                   │
//! │  - Admin operations gated by an explicit AdminToken         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: validation, id allocation retry     │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DiaryStore trait                                │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Id System
//!
//! Diaries carry two identities: a storage-assigned `internal_key` (UUID,
//! never exposed) and a short random `public_id` that is the only identifier
//! end users ever see. The allocator in [`idgen`] guarantees a fresh
//! `public_id` against the store before use, and the store's duplicate
//! rejection on insert is the authoritative backstop.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code takes regular Rust
//! arguments, returns regular Rust types, and never writes to stdout/stderr
//! or calls `std::process::exit`. Card bodies are opaque formatted-text
//! strings; the engine stores and returns them verbatim, never parsing them.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Diary`, `Card`, `PhaseTag`)
//! - [`idgen`]: Public/card identifier generation and allocation
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod idgen;
pub mod model;
pub mod store;
