//! Core domain types
//!
//! This module contains the domain structures shared between the client
//! library and the command-line console. They represent what the controller
//! exposes on its admin surface, independent of any wire format details.

pub mod device;
pub mod link;
pub mod progress;
