//! Rallypoint - Event Coordination Service
//!
//! This crate implements live timed sessions for scheduled social events:
//! an organizer starts a session with a deadline, participants join and
//! leave mid-session, and the engine emits countdown warnings and
//! reconciles state when the session expires. The chat front end and the
//! concrete database engine are external collaborators reached through
//! ports.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
