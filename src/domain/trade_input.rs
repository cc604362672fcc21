//! Trade-input gate.
//!
//! Turns three raw strings into a validated [`TradeRequest`]. Every field is
//! checked independently and all problems are collected before returning.

use super::trade::Side;
use std::fmt;

/// Which input field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeField {
    Shares,
    Price,
    Side,
}

impl fmt::Display for TradeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeField::Shares => write!(f, "shares"),
            TradeField::Price => write!(f, "price"),
            TradeField::Side => write!(f, "buy/sell"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TradeInputError {
    #[error("{field}: not valid input '{raw}'")]
    NotValidInput { field: TradeField, raw: String },

    #[error("{field}: negative value")]
    Negative { field: TradeField },
}

impl TradeInputError {
    pub fn field(&self) -> TradeField {
        match self {
            TradeInputError::NotValidInput { field, .. } | TradeInputError::Negative { field } => {
                *field
            }
        }
    }
}

/// A trade request whose fields passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeRequest {
    pub shares: i64,
    pub price: i64,
    pub side: Side,
}

pub fn validate_trade_input(
    shares: &str,
    price: &str,
    side: &str,
) -> Result<TradeRequest, Vec<TradeInputError>> {
    let mut errors = Vec::new();

    let shares = parse_quantity(TradeField::Shares, shares, &mut errors);
    let price = parse_quantity(TradeField::Price, price, &mut errors);
    let side = parse_side(side, &mut errors);

    match (shares, price, side) {
        (Some(shares), Some(price), Some(side)) if errors.is_empty() => Ok(TradeRequest {
            shares,
            price,
            side,
        }),
        _ => Err(errors),
    }
}

/// Parse failure and negative value are exclusive: a non-numeric string is
/// never also reported as negative.
fn parse_quantity(field: TradeField, raw: &str, errors: &mut Vec<TradeInputError>) -> Option<i64> {
    match raw.parse::<i64>() {
        Ok(value) if value < 0 => {
            errors.push(TradeInputError::Negative { field });
            None
        }
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(TradeInputError::NotValidInput {
                field,
                raw: raw.to_string(),
            });
            None
        }
    }
}

fn parse_side(raw: &str, errors: &mut Vec<TradeInputError>) -> Option<Side> {
    if raw.eq_ignore_ascii_case("B") {
        Some(Side::Buy)
    } else if raw.eq_ignore_ascii_case("S") {
        Some(Side::Sell)
    } else {
        errors.push(TradeInputError::NotValidInput {
            field: TradeField::Side,
            raw: raw.to_string(),
        });
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_buy() {
        let req = validate_trade_input("10", "100", "B").unwrap();
        assert_eq!(
            req,
            TradeRequest {
                shares: 10,
                price: 100,
                side: Side::Buy
            }
        );
    }

    #[test]
    fn side_is_case_insensitive() {
        assert_eq!(validate_trade_input("10", "100", "b").unwrap().side, Side::Buy);
        assert_eq!(validate_trade_input("10", "100", "s").unwrap().side, Side::Sell);
        assert_eq!(validate_trade_input("10", "100", "S").unwrap().side, Side::Sell);
    }

    #[test]
    fn negative_shares() {
        let errors = validate_trade_input("-5", "100", "B").unwrap_err();
        assert_eq!(
            errors,
            vec![TradeInputError::Negative {
                field: TradeField::Shares
            }]
        );
    }

    #[test]
    fn non_numeric_shares_is_not_also_negative() {
        let errors = validate_trade_input("abc", "100", "B").unwrap_err();
        assert_eq!(
            errors,
            vec![TradeInputError::NotValidInput {
                field: TradeField::Shares,
                raw: "abc".into()
            }]
        );
    }

    #[test]
    fn negative_price() {
        let errors = validate_trade_input("10", "-1", "S").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field(), TradeField::Price);
        assert!(matches!(errors[0], TradeInputError::Negative { .. }));
    }

    #[test]
    fn invalid_side() {
        let errors = validate_trade_input("10", "100", "X").unwrap_err();
        assert_eq!(
            errors,
            vec![TradeInputError::NotValidInput {
                field: TradeField::Side,
                raw: "X".into()
            }]
        );
    }

    #[test]
    fn errors_accumulate_in_field_order() {
        let errors = validate_trade_input("x", "-3", "buy").unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].field(), TradeField::Shares);
        assert_eq!(errors[1].field(), TradeField::Price);
        assert_eq!(errors[2].field(), TradeField::Side);
    }

    #[test]
    fn empty_strings_are_not_valid_input() {
        let errors = validate_trade_input("", "", "").unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(
            errors
                .iter()
                .all(|e| matches!(e, TradeInputError::NotValidInput { .. }))
        );
    }

    #[test]
    fn surrounding_whitespace_is_rejected() {
        let errors = validate_trade_input(" 10", "100", "B").unwrap_err();
        assert_eq!(errors[0].field(), TradeField::Shares);
    }

    #[test]
    fn zero_and_negative_zero_accepted() {
        let req = validate_trade_input("0", "-0", "B").unwrap();
        assert_eq!(req.shares, 0);
        assert_eq!(req.price, 0);
    }

    #[test]
    fn overflow_is_not_valid_input() {
        let errors = validate_trade_input("99999999999999999999", "100", "B").unwrap_err();
        assert!(matches!(
            errors[0],
            TradeInputError::NotValidInput {
                field: TradeField::Shares,
                ..
            }
        ));
    }

    #[test]
    fn error_display() {
        let err = TradeInputError::NotValidInput {
            field: TradeField::Side,
            raw: "Q".into(),
        };
        assert_eq!(err.to_string(), "buy/sell: not valid input 'Q'");
        let err = TradeInputError::Negative {
            field: TradeField::Price,
        };
        assert_eq!(err.to_string(), "price: negative value");
    }
}
