//! Metro ticketing core.
//!
//! Finds the station nearest to a rider, prices single-line trips on the
//! LRT1, LRT2 and MRT3 lines, and issues tickets into a session ledger.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod fares;
pub mod locate;
pub mod tickets;
pub mod web;
