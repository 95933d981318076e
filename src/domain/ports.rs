use super::rates::RateTable;
use crate::error::Result;
use rust_decimal::Decimal;
use std::io::Write;

/// Interchangeable payment behavior selected at runtime by the
/// `PaymentContext`.
///
/// `pay` only formats and emits a confirmation line containing the amount
/// and the variant's identifying credential; it performs no transfer and
/// no validation of the amount.
pub trait PaymentStrategy {
    /// Short human-readable name used when announcing strategy switches.
    fn label(&self) -> &'static str;
    fn pay(&self, amount: Decimal, out: &mut dyn Write) -> Result<()>;
}

/// Listener registered with the `CurrencyExchange`.
///
/// `update` receives the full current rate-table snapshot, not a diff.
pub trait RateObserver {
    /// Short human-readable name used in attach/detach confirmations.
    fn label(&self) -> &'static str;
    fn update(&self, rates: &RateTable, out: &mut dyn Write) -> Result<()>;
}

/// Reversible action executed by the `RemoteControl`.
pub trait Command {
    fn execute(&mut self, out: &mut dyn Write) -> Result<()>;
    fn undo(&mut self, out: &mut dyn Write) -> Result<()>;
}

pub type PaymentStrategyBox = Box<dyn PaymentStrategy>;
pub type RateObserverBox = Box<dyn RateObserver>;
pub type CommandBox = Box<dyn Command>;
