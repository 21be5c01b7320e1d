//! CLI infrastructure for the pursuit toolkit
//!
//! This module provides the command-line interface for generating
//! policy trees and for simulating and evaluating pursuit-evasion
//! episodes.

pub mod commands;
