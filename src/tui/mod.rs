//! TUI module for the interactive terminal interface.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (App, Screen, Action, Transition)
//! - `form`, `notice`: per-screen form buffers and the notice capability
//! - `update`: pure transitions, `view`: pure rendering
//! - `run`: effects (terminal, event loop)

pub mod form;
pub mod notice;
pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
