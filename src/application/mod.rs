//! Application layer containing the pattern orchestrators.
//!
//! This module defines the contexts that drive the domain variants — the
//! `PaymentContext`, the `CurrencyExchange` subject, and the
//! `RemoteControl` — plus the scripted demo that exercises them in
//! sequence.

pub mod context;
pub mod exchange;
pub mod remote;
pub mod script;
