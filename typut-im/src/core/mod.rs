//! Core IME functionality
//!
//! This module contains the key classification, the composition state
//! machine and the controller that applies its effects.

pub mod action;
pub mod candidate;
pub mod engine;
pub mod keycode;
pub mod state;
