//! The scripted demonstration: a fixed sequence of operations against each
//! pattern, producing a line-oriented console transcript.

use super::context::PaymentContext;
use super::exchange::CurrencyExchange;
use super::remote::RemoteControl;
use crate::domain::device::{
    Door, DoorOpen, Light, LightOn, Television, TempIncrease, Thermostat, TvOn,
};
use crate::domain::observer::{TaxService, Trader, UserNotifier};
use crate::domain::payment::{CardPayment, WalletPayment};
use crate::domain::rates::{RateTable, USD_TO_EUR, USD_TO_KZT};
use crate::error::Result;
use crate::interfaces::console;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io::{BufRead, Write};

pub struct ScriptOptions {
    /// Amount due in the payment section, in USD.
    pub amount: Decimal,
    /// Pre-selected payment method; when `None` the choice is read from
    /// `input`.
    pub choice: Option<String>,
    /// Initial rate table for the exchange section.
    pub rates: RateTable,
}

/// Runs the whole demonstration: banner, payment section, exchange
/// section, command section.
pub fn run<R: BufRead, W: Write>(options: ScriptOptions, mut input: R, mut out: W) -> Result<()> {
    let ScriptOptions {
        amount,
        choice,
        rates,
    } = options;

    writeln!(out, "=========================================")?;
    writeln!(out, "      DESIGN PATTERNS SHOWCASE")?;
    writeln!(out, "=========================================")?;

    payment_section(amount, choice, &mut input, &mut out)?;
    exchange_section(rates, &mut out)?;
    command_section(&mut out)?;
    Ok(())
}

/// Strategy pattern: two scripted strategy switches, then one selected
/// through the menu.
fn payment_section(
    amount: Decimal,
    choice: Option<String>,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "*** 1. Strategy pattern (payments) ***")?;
    writeln!(out)?;
    writeln!(out, "Amount due: {amount} USD.")?;

    let mut context = PaymentContext::new();

    context.set_strategy(Box::new(CardPayment::new("1234-5678-****-****")), out)?;
    context.execute_payment(amount, out)?;

    context.set_strategy(Box::new(WalletPayment::new("user@example.com")), out)?;
    context.execute_payment(amount, out)?;

    writeln!(out, "Choose a payment method (1 - card, 2 - crypto, 3 - wallet):")?;
    let choice = match choice {
        Some(choice) => choice,
        None => console::read_choice(input)?,
    };
    let strategy = console::select_strategy(&choice, out)?;

    context.set_strategy(strategy, out)?;
    context.execute_payment(amount * dec!(0.5), out)?;
    Ok(())
}

/// Observer pattern: three observers, three rate updates, one detach.
fn exchange_section(rates: RateTable, out: &mut dyn Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "=========================================")?;
    writeln!(out, "*** 2. Observer pattern (currency rates) ***")?;
    writeln!(out)?;

    let mut exchange = CurrencyExchange::new(rates);

    exchange.attach(Box::new(Trader::new("Alex")), out)?;
    exchange.attach(Box::new(TaxService), out)?;
    let notifier = exchange.attach(Box::new(UserNotifier::new("Bob")), out)?;

    exchange.set_rate(USD_TO_EUR, dec!(0.90), out)?;
    exchange.set_rate(USD_TO_KZT, dec!(465.2), out)?;

    writeln!(out)?;
    exchange.detach(notifier, out)?;

    exchange.set_rate(USD_TO_EUR, dec!(0.93), out)?;
    Ok(())
}

/// Command pattern: four device commands executed, then the history undone
/// past its bottom.
fn command_section(out: &mut dyn Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "=========================================")?;
    writeln!(out, "*** 3. Command pattern (smart home) ***")?;
    writeln!(out)?;
    writeln!(out, "Executing device commands with history")?;

    let mut remote = RemoteControl::new();

    remote.press(Box::new(LightOn::new(Light::new("Kitchen"))), out)?;
    remote.press(Box::new(DoorOpen::new(Door::new("Garage"))), out)?;
    remote.press(Box::new(TempIncrease::new(Thermostat::new())), out)?;
    remote.press(Box::new(TvOn::new(Television::new("Living Room"))), out)?;

    writeln!(out)?;
    writeln!(out, "Undoing the command history")?;
    for _ in 0..5 {
        remote.undo(out)?;
    }
    Ok(())
}
