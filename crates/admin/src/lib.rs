//! Neuronix Admin library.
//!
//! This crate provides the event publishing panel as a library,
//! allowing it to be tested and reused.
//!
//! # Security
//!
//! This crate writes directly to the production `events` table read by the
//! public site. It authenticates a single shared credential pair and trusts
//! the network boundary for exposure control.
//!
//! Only deploy on VPN-protected infrastructure.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
