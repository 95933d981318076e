use super::ports::RateObserver;
use super::rates::{RateTable, USD_TO_EUR, USD_TO_KZT};
use crate::error::Result;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io::Write;

/// Below this rate the trader signals a euro buy.
const EUR_BUY_THRESHOLD: Decimal = dec!(0.92);

/// Watches `USD_TO_EUR` and signals a buy when the rate drops below the
/// threshold.
pub struct Trader {
    name: String,
}

impl Trader {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl RateObserver for Trader {
    fn label(&self) -> &'static str {
        "Trader"
    }

    fn update(&self, rates: &RateTable, out: &mut dyn Write) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "Trader {} received an update:", self.name)?;
        match rates.get(USD_TO_EUR) {
            Some(rate) if rate < EUR_BUY_THRESHOLD => {
                writeln!(out, "  USD_TO_EUR dropped ({rate}). Time to buy euros!")?;
            }
            Some(rate) => {
                writeln!(out, "  USD_TO_EUR at {rate}. Watching.")?;
            }
            None => {
                writeln!(out, "  No USD_TO_EUR rate available.")?;
            }
        }
        Ok(())
    }
}

/// Records the official `USD_TO_KZT` rate for reporting.
pub struct TaxService;

impl RateObserver for TaxService {
    fn label(&self) -> &'static str {
        "TaxService"
    }

    fn update(&self, rates: &RateTable, out: &mut dyn Write) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "Tax service received an update:")?;
        match rates.get(USD_TO_KZT) {
            Some(rate) => {
                writeln!(
                    out,
                    "  Official USD_TO_KZT rate: {rate}. Recorded for reporting."
                )?;
            }
            None => {
                writeln!(out, "  No USD_TO_KZT rate available.")?;
            }
        }
        Ok(())
    }
}

/// Forwards the fresh `USD_TO_EUR` rate to a named user.
pub struct UserNotifier {
    user: String,
}

impl UserNotifier {
    pub fn new(user: impl Into<String>) -> Self {
        Self { user: user.into() }
    }
}

impl RateObserver for UserNotifier {
    fn label(&self) -> &'static str {
        "UserNotifier"
    }

    fn update(&self, rates: &RateTable, out: &mut dyn Write) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "Notification for user {}:", self.user)?;
        match rates.get(USD_TO_EUR) {
            Some(rate) => {
                writeln!(out, "  Fresh currency rates received. USD_TO_EUR: {rate}.")?;
            }
            None => {
                writeln!(out, "  No USD_TO_EUR rate available.")?;
            }
        }
        Ok(())
    }
}
