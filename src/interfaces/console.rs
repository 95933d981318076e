use crate::domain::payment::{CardPayment, CryptoPayment, WalletPayment};
use crate::domain::ports::PaymentStrategyBox;
use crate::error::Result;
use std::io::{BufRead, Write};

/// Reads the menu selection: one line, trailing newline trimmed. End of
/// input yields an empty choice, which falls through to the default
/// strategy like any other unrecognized value.
pub fn read_choice(input: &mut dyn BufRead) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end().to_string())
}

/// Maps the menu choice to a payment strategy. Anything other than
/// `"1"`/`"2"`/`"3"` selects the default card after an informational line;
/// malformed input is never an error.
pub fn select_strategy(choice: &str, out: &mut dyn Write) -> Result<PaymentStrategyBox> {
    Ok(match choice {
        "1" => Box::new(CardPayment::new("9999-****-****-1111")),
        "2" => Box::new(CryptoPayment::new("0xABC123...")),
        "3" => Box::new(WalletPayment::new("another@example.com")),
        _ => {
            writeln!(out, "Invalid choice. Using the default card payment.")?;
            Box::new(CardPayment::new("0000-****-****-0000"))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn selected_label(choice: &str) -> (&'static str, String) {
        let mut out = Vec::new();
        let strategy = select_strategy(choice, &mut out).unwrap();
        (strategy.label(), String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_read_choice_trims_newline() {
        let mut input = Cursor::new(b"2\n".to_vec());
        assert_eq!(read_choice(&mut input).unwrap(), "2");

        let mut input = Cursor::new(b"3\r\n".to_vec());
        assert_eq!(read_choice(&mut input).unwrap(), "3");
    }

    #[test]
    fn test_read_choice_at_end_of_input_is_empty() {
        let mut input = Cursor::new(Vec::new());
        assert_eq!(read_choice(&mut input).unwrap(), "");
    }

    #[test]
    fn test_menu_mapping() {
        assert_eq!(selected_label("1").0, "bank card");
        assert_eq!(selected_label("2").0, "cryptocurrency");
        assert_eq!(selected_label("3").0, "wallet");
    }

    #[test]
    fn test_unrecognized_choice_selects_default_card() {
        for choice in ["", "4", "card", " 1"] {
            let (label, transcript) = selected_label(choice);
            assert_eq!(label, "bank card");
            assert!(transcript.contains("Invalid choice."));
        }
    }

    #[test]
    fn test_recognized_choice_prints_nothing() {
        let (_, transcript) = selected_label("1");
        assert!(transcript.is_empty());
    }
}
