use super::ports::PaymentStrategy;
use crate::error::Result;
use rust_decimal::Decimal;
use std::io::Write;

/// Payment charged against a bank card.
pub struct CardPayment {
    card_number: String,
}

impl CardPayment {
    pub fn new(card_number: impl Into<String>) -> Self {
        Self {
            card_number: card_number.into(),
        }
    }
}

impl PaymentStrategy for CardPayment {
    fn label(&self) -> &'static str {
        "bank card"
    }

    fn pay(&self, amount: Decimal, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "Paid {amount} USD by bank card (number: {}).",
            self.card_number
        )?;
        Ok(())
    }
}

/// Payment charged against an online wallet account.
pub struct WalletPayment {
    email: String,
}

impl WalletPayment {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl PaymentStrategy for WalletPayment {
    fn label(&self) -> &'static str {
        "wallet"
    }

    fn pay(&self, amount: Decimal, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Paid {amount} USD via wallet (email: {}).", self.email)?;
        Ok(())
    }
}

/// Payment sent from a cryptocurrency wallet.
pub struct CryptoPayment {
    wallet_address: String,
}

impl CryptoPayment {
    pub fn new(wallet_address: impl Into<String>) -> Self {
        Self {
            wallet_address: wallet_address.into(),
        }
    }
}

impl PaymentStrategy for CryptoPayment {
    fn label(&self) -> &'static str {
        "cryptocurrency"
    }

    fn pay(&self, amount: Decimal, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "Paid {amount} USD in cryptocurrency (wallet address: {}).",
            self.wallet_address
        )?;
        Ok(())
    }
}
