use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::InstrumentError;

/// Exercise style of an option position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseStyle {
    American,
    European,
}

impl fmt::Display for ExerciseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExerciseStyle::American => "American",
            ExerciseStyle::European => "European",
        };
        write!(f, "{}", s)
    }
}

/// Call/put discriminant. Serialized lowercase to match the risk service wire
/// format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        };
        write!(f, "{}", s)
    }
}

/// A single derivative position in the portfolio.
///
/// Instruments are immutable once added to a portfolio; they are only ever
/// appended and removed wholesale, never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub asset_id: String,
    pub style: ExerciseStyle,
    /// `type` on the wire.
    #[serde(rename = "type")]
    pub option_type: OptionType,
    pub strike: Decimal,
    /// Time to expiry in years.
    pub expiry: Decimal,
    /// Signed: positive = long, negative = short.
    pub quantity: Decimal,
}

impl Instrument {
    pub fn new(
        asset_id: &str,
        style: ExerciseStyle,
        option_type: OptionType,
        strike: Decimal,
        expiry: Decimal,
        quantity: Decimal,
    ) -> Self {
        Self {
            asset_id: asset_id.to_string(),
            style,
            option_type,
            strike,
            expiry,
            quantity,
        }
    }

    /// Check the structural constraints every portfolio position must satisfy.
    pub fn validate(&self) -> Result<(), InstrumentError> {
        if self.asset_id.trim().is_empty() {
            return Err(InstrumentError::EmptyAssetId);
        }
        if self.strike <= Decimal::ZERO {
            return Err(InstrumentError::InvalidStrike {
                strike: self.strike,
            });
        }
        if self.expiry <= Decimal::ZERO {
            return Err(InstrumentError::InvalidExpiry {
                expiry: self.expiry,
            });
        }
        if self.quantity == Decimal::ZERO {
            return Err(InstrumentError::ZeroQuantity);
        }
        Ok(())
    }

    pub fn is_long(&self) -> bool {
        self.quantity > Decimal::ZERO
    }

    pub fn is_short(&self) -> bool {
        self.quantity < Decimal::ZERO
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} K={} T={} x{}",
            self.asset_id, self.style, self.option_type, self.strike, self.expiry, self.quantity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> Instrument {
        Instrument::new(
            "AAPL",
            ExerciseStyle::European,
            OptionType::Call,
            dec!(150),
            dec!(1.0),
            dec!(10),
        )
    }

    #[test]
    fn valid_instrument_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn empty_asset_id_rejected() {
        let mut inst = sample();
        inst.asset_id = "  ".to_string();
        assert!(matches!(
            inst.validate(),
            Err(InstrumentError::EmptyAssetId)
        ));
    }

    #[test]
    fn non_positive_strike_rejected() {
        let mut inst = sample();
        inst.strike = dec!(0);
        assert!(matches!(
            inst.validate(),
            Err(InstrumentError::InvalidStrike { .. })
        ));
    }

    #[test]
    fn non_positive_expiry_rejected() {
        let mut inst = sample();
        inst.expiry = dec!(-0.5);
        assert!(matches!(
            inst.validate(),
            Err(InstrumentError::InvalidExpiry { .. })
        ));
    }

    #[test]
    fn zero_quantity_rejected() {
        let mut inst = sample();
        inst.quantity = dec!(0);
        assert!(matches!(inst.validate(), Err(InstrumentError::ZeroQuantity)));
    }

    #[test]
    fn short_position_is_valid() {
        let mut inst = sample();
        inst.quantity = dec!(-5);
        assert!(inst.validate().is_ok());
        assert!(inst.is_short());
        assert!(!inst.is_long());
    }

    #[test]
    fn wire_format_uses_lowercase_type_tag() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "call");
        assert_eq!(json["style"], "european");
        assert_eq!(json["asset_id"], "AAPL");
        assert_eq!(json["strike"], 150.0);
    }

    #[test]
    fn wire_format_roundtrip() {
        let json = r#"{
            "asset_id": "MSFT",
            "style": "american",
            "type": "put",
            "strike": 300.0,
            "expiry": 0.5,
            "quantity": -2
        }"#;
        let inst: Instrument = serde_json::from_str(json).unwrap();
        assert_eq!(inst.option_type, OptionType::Put);
        assert_eq!(inst.style, ExerciseStyle::American);
        assert_eq!(inst.quantity, dec!(-2));
    }
}
