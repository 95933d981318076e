use crate::domain::ports::RateObserverBox;
use crate::domain::rates::RateTable;
use crate::error::Result;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io::Write;

/// Handle returned by `CurrencyExchange::attach`, used to detach the
/// observer later. Handles are never reused within one exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverId(u64);

/// The observer-pattern subject: owns the rate table and the ordered list
/// of attached observers.
///
/// Observers are notified synchronously, in attachment order, with the
/// full current rate table. Attaching equal observers twice produces two
/// entries and two updates per change; no deduplication is attempted.
pub struct CurrencyExchange {
    rates: RateTable,
    observers: Vec<(ObserverId, RateObserverBox)>,
    next_id: u64,
}

impl CurrencyExchange {
    pub fn new(rates: RateTable) -> Self {
        Self {
            rates,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Appends the observer to the notification list and returns the
    /// handle that identifies this registration.
    pub fn attach(&mut self, observer: RateObserverBox, out: &mut dyn Write) -> Result<ObserverId> {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        writeln!(out, "Observer {} attached.", observer.label())?;
        self.observers.push((id, observer));
        Ok(id)
    }

    /// Removes the registration with the given handle. Detaching a handle
    /// that is not attached is a no-op with an informational line.
    pub fn detach(&mut self, id: ObserverId, out: &mut dyn Write) -> Result<()> {
        match self.observers.iter().position(|(attached, _)| *attached == id) {
            Some(index) => {
                let (_, observer) = self.observers.remove(index);
                writeln!(out, "Observer {} detached.", observer.label())?;
            }
            None => {
                writeln!(out, "Observer is not attached; nothing to detach.")?;
            }
        }
        Ok(())
    }

    /// Updates a rate and notifies every observer of the new snapshot.
    ///
    /// Setting a known pair to its current value is a no-op: the change is
    /// logged as unchanged and nobody is notified. A previously unknown
    /// pair is created, with 0 reported as the old value.
    pub fn set_rate(&mut self, pair: &str, new_rate: Decimal, out: &mut dyn Write) -> Result<()> {
        if self.rates.get(pair) == Some(new_rate) {
            writeln!(out, "Rate {pair} is unchanged.")?;
            return Ok(());
        }

        let old_rate = self.rates.get(pair).unwrap_or(dec!(0.0));
        writeln!(out)?;
        writeln!(out, "Rate change: {pair} from {old_rate} to {new_rate}")?;
        self.rates.set(pair, new_rate);
        self.notify_observers(out)
    }

    /// Delivers the full current rate table to every attached observer, in
    /// attachment order. An observer failure aborts the pass: the error
    /// propagates and observers later in the order are not notified.
    pub fn notify_observers(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "Notifying all observers of the rate change...")?;
        for (_, observer) in &self.observers {
            observer.update(&self.rates, out)?;
        }
        Ok(())
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
