use crate::domain::ports::PaymentStrategyBox;
use crate::error::Result;
use rust_decimal::Decimal;
use std::io::Write;

/// Holds the currently selected payment strategy and executes it on demand.
///
/// The context has two states: no strategy selected (the initial state) and
/// one strategy selected. The only transition is `set_strategy`, which
/// replaces the current strategy unconditionally. Executing a payment with
/// no strategy selected is a logged no-op, not an error.
#[derive(Default)]
pub struct PaymentContext {
    strategy: Option<PaymentStrategyBox>,
}

impl PaymentContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current strategy and announces the switch.
    pub fn set_strategy(&mut self, strategy: PaymentStrategyBox, out: &mut dyn Write) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "Payment strategy switched to {}.", strategy.label())?;
        self.strategy = Some(strategy);
        Ok(())
    }

    /// Runs the selected strategy between start/end markers.
    ///
    /// With no strategy selected this reports the condition and performs no
    /// payment; the context stays in its no-strategy state.
    pub fn execute_payment(&self, amount: Decimal, out: &mut dyn Write) -> Result<()> {
        let Some(strategy) = &self.strategy else {
            writeln!(out, "No payment strategy selected. Payment is not possible.")?;
            return Ok(());
        };

        writeln!(out, "--- Payment started ---")?;
        strategy.pay(amount, out)?;
        writeln!(out, "--- Payment finished ---")?;
        writeln!(out)?;
        Ok(())
    }

    pub fn has_strategy(&self) -> bool {
        self.strategy.is_some()
    }
}
