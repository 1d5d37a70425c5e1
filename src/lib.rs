//! # Reversi Core
//!
//! A two-player Reversi (Othello) rules engine with a tiered computer
//! opponent and a step-wise disc-flip choreographer. The crate is the pure,
//! in-process core a presentation layer builds on: it answers "what are my
//! legal moves", applies placements immutably, detects passes and game end,
//! and hands captures to the caller one flip at a time for staged animation.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, legality rules, turn state machine,
//!   game session facade
//! - [`ai`] — CPU strategy trait and the four difficulty tiers
//! - [`flip`] — Flip direction/rotation math and the flip queue state machine
//! - [`config`] — TOML game-setup loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod flip;
pub mod game;
