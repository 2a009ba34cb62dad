//! Tontine - Rotating Savings Group Tracker
//!
//! This crate tracks a tontine rotation: a fixed roster of members pays into
//! a shared pot each cycle, and one member per cycle collects the pot in an
//! order fixed by a random draw.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
