//! Crate root for `ikex`.
//!
//! `ikex` is the exchange-task layer of an IKEv2-style key-exchange engine.
//! Each negotiation step of a handshake round is a *task*: a small state
//! machine with a build/process/migrate contract that contributes payloads to
//! an outgoing message and consumes them from an incoming one. This crate
//! ships the task abstraction itself plus its first concrete step, the
//! vendor-identification round.
//!
//! High-level tree:
//! * `domain` – pure types and invariants: vendor identifiers, the immutable
//!   vendor registry, messages as payload lists, session extension state.
//! * `ports` – boundary traits consumed by the task layer (session mutation,
//!   configuration reads).
//! * `application::exchange` – the `ExchangeTask` trait, completion signals,
//!   the vendor-identification task, and per-exchange task bookkeeping.
//! * `adapters` – concrete port implementations for in-process wiring.
//!
//! Wire encoding, cryptography, and retransmission live outside this crate;
//! tasks only ever see already-decoded messages.
pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod test_support;
