//! Smoke tester for the Vantage segments API.
//!
//! The binary wires three pieces: `args` (flag parsing), `transport` (a ureq
//! executor that stamps every request with a build-derived User-Agent), and
//! `smoke` (the three-call dispatcher). The dispatcher takes the executor as
//! a closure, so tests can drive it with canned responses instead of a live
//! server.

pub mod args;
pub mod smoke;
pub mod transport;

pub use args::Args;
pub use smoke::SmokeError;
pub use transport::{Transport, TransportError};
