//! QR Scan Session - Camera QR scanning with a single-shot decode handoff
//!
//! This crate drives one scanner view activation: it checks camera
//! permission, wires the platform capture pipeline to a QR metadata output,
//! forwards the first decoded string to a delegate and dismisses the host.
//! The camera, the decoder and the presentation layer are platform services
//! behind the traits in [`ports`].

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
