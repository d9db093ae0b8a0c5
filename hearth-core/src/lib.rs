//! Hearth Core
//!
//! Core types and abstractions for the Hearth controller admin tooling.
//!
//! This crate contains:
//! - Domain types: entities of the controller admin surface (progress
//!   reports, account link state, the remote-control database hierarchy)
//! - DTOs: data transfer objects for the controller's admin HTTP API

pub mod domain;
pub mod dto;
