//! Client sequencer of the PAdES signing and certificate authentication flows.
//!
//! Drives the local certificate component and relays its results to the
//! session coordinator.

pub mod component;
pub mod coordinator;
pub mod error;
pub mod sequencer;
