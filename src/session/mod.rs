//! Interactive drawing session
//!
//! This module contains:
//! - Session state (the shape collection and where it is stored)
//! - Menu options
//! - The console loop that drives the menu

pub mod console;
pub mod menu;
pub mod state;
