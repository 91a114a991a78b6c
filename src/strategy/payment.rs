use crate::console::MessageSink;
use crate::error::{normalize_tag, PatternError};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

pub trait PaymentStrategy {
    fn method(&self) -> &'static str;

    fn process_payment(&self, amount: f64) -> Receipt {
        Receipt {
            amount,
            method: self.method(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCardPayment;

impl PaymentStrategy for CreditCardPayment {
    fn method(&self) -> &'static str {
        "Credit Card"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PayPalPayment;

impl PaymentStrategy for PayPalPayment {
    fn method(&self) -> &'static str {
        "PayPal"
    }
}

/// Outcome of a processed payment.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub amount: f64,
    pub method: &'static str,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Paid {} using {}.", format_currency(self.amount), self.method)
    }
}

/// Formats a dollar amount as `$1,234.50` (negative: `-$1,234.50`).
///
/// Works on the decimal text rather than an integer cent count, so any
/// finite amount keeps all of its integer digits.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (dollars, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let is_zero = fixed.bytes().all(|b| matches!(b, b'0' | b'.'));
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum PaymentKind {
    CreditCard,
    PayPal,
}

impl PaymentKind {
    pub fn into_strategy(self) -> Box<dyn PaymentStrategy> {
        match self {
            PaymentKind::CreditCard => Box::new(CreditCardPayment),
            PaymentKind::PayPal => Box::new(PayPalPayment),
        }
    }
}

impl fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentKind::CreditCard => write!(f, "credit-card"),
            PaymentKind::PayPal => write!(f, "paypal"),
        }
    }
}

impl FromStr for PaymentKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_tag(s).as_str() {
            "creditcard" | "card" => Ok(PaymentKind::CreditCard),
            "paypal" => Ok(PaymentKind::PayPal),
            _ => Err(PatternError::unknown_strategy("payment", s)),
        }
    }
}

impl TryFrom<String> for PaymentKind {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Context that charges through whichever payment method is bound.
pub struct PaymentProcessor<S: MessageSink> {
    strategy: Box<dyn PaymentStrategy>,
    sink: S,
}

impl<S: MessageSink> PaymentProcessor<S> {
    pub fn new(strategy: Box<dyn PaymentStrategy>, sink: S) -> Self {
        tracing::debug!(method = strategy.method(), "payment strategy bound");
        Self { strategy, sink }
    }

    pub fn set_payment_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        tracing::debug!(
            from = self.strategy.method(),
            to = strategy.method(),
            "payment strategy replaced"
        );
        self.strategy = strategy;
    }

    pub fn method(&self) -> &'static str {
        self.strategy.method()
    }

    pub fn process_payment(&mut self, amount: f64) -> Result<Receipt, PatternError> {
        if !amount.is_finite() {
            return Err(PatternError::InvalidAmount(amount));
        }

        let receipt = self.strategy.process_payment(amount);
        self.sink.emit(&receipt.to_string());
        Ok(receipt)
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;
    use proptest::prelude::*;

    #[test]
    fn test_demo_sequence_output() {
        let mut processor = PaymentProcessor::new(Box::new(CreditCardPayment), Transcript::new());
        processor.process_payment(50.0).unwrap();

        processor.set_payment_strategy(Box::new(PayPalPayment));
        processor.process_payment(30.0).unwrap();

        assert_eq!(
            processor.into_sink().lines(),
            ["Paid $50.00 using Credit Card.", "Paid $30.00 using PayPal."]
        );
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(9.999), "$10.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(-5.25), "-$5.25");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_format_currency_beyond_integer_cents() {
        assert_eq!(format_currency(1e20), "$100,000,000,000,000,000,000.00");
        assert_eq!(format_currency(-1e20), "-$100,000,000,000,000,000,000.00");
        // Last power of ten below where a u64 cent count would saturate.
        assert_eq!(format_currency(1e17), "$100,000,000,000,000,000.00");
    }

    #[test]
    fn test_huge_amount_receipt_is_exact() {
        let mut processor = PaymentProcessor::new(Box::new(CreditCardPayment), Transcript::new());
        let receipt = processor.process_payment(1e20).unwrap();
        assert_eq!(
            receipt.to_string(),
            "Paid $100,000,000,000,000,000,000.00 using Credit Card."
        );
    }

    #[test]
    fn test_non_finite_amount_rejected() {
        let mut processor = PaymentProcessor::new(Box::new(PayPalPayment), Transcript::new());

        let err = processor.process_payment(f64::INFINITY).unwrap_err();
        assert!(matches!(err, PatternError::InvalidAmount(_)));
        assert!(processor.process_payment(f64::NAN).is_err());

        assert!(processor.into_sink().is_empty());
    }

    #[test]
    fn test_payment_kind_parsing() {
        assert_eq!("credit-card".parse::<PaymentKind>().unwrap(), PaymentKind::CreditCard);
        assert_eq!("Card".parse::<PaymentKind>().unwrap(), PaymentKind::CreditCard);
        assert_eq!("PayPal".parse::<PaymentKind>().unwrap(), PaymentKind::PayPal);

        let err = "cash".parse::<PaymentKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown payment strategy: 'cash'");
    }

    proptest! {
        #[test]
        fn test_receipt_uses_latest_method(
            picks in prop::collection::vec(prop::bool::ANY, 1..16),
            amount in 0.0f64..10_000.0,
        ) {
            let mut processor =
                PaymentProcessor::new(Box::new(CreditCardPayment), Transcript::new());
            for use_paypal in picks {
                let kind = if use_paypal { PaymentKind::PayPal } else { PaymentKind::CreditCard };
                processor.set_payment_strategy(kind.into_strategy());

                let receipt = processor.process_payment(amount).unwrap();
                prop_assert_eq!(receipt.method, kind.into_strategy().method());
            }
        }
    }
}
