use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "text")]
pub enum ExchangeKind {
    #[serde(rename = "BORROW")]
    Borrow,
    #[serde(rename = "GIVE")]
    Give,
    #[serde(rename = "TRADE")]
    Trade,
}

impl std::fmt::Display for ExchangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExchangeKind::Borrow => write!(f, "BORROW"),
            ExchangeKind::Give => write!(f, "GIVE"),
            ExchangeKind::Trade => write!(f, "TRADE"),
        }
    }
}

impl std::str::FromStr for ExchangeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BORROW" => Ok(ExchangeKind::Borrow),
            "GIVE" => Ok(ExchangeKind::Give),
            "TRADE" => Ok(ExchangeKind::Trade),
            other => Err(format!("Invalid exchange kind: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Item {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub exchange_kind: String,
    /// Only meaningful when exchange_kind is TRADE.
    pub trade_for: Option<String>,
    pub photos: Vec<String>,
    pub lat: f64,
    pub lng: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_exchange_kind_display() {
        assert_eq!(ExchangeKind::Borrow.to_string(), "BORROW");
        assert_eq!(ExchangeKind::Give.to_string(), "GIVE");
        assert_eq!(ExchangeKind::Trade.to_string(), "TRADE");
    }

    #[test]
    fn test_exchange_kind_from_str() {
        assert_eq!(ExchangeKind::from_str("BORROW").unwrap(), ExchangeKind::Borrow);
        assert_eq!(ExchangeKind::from_str("GIVE").unwrap(), ExchangeKind::Give);
        assert_eq!(ExchangeKind::from_str("TRADE").unwrap(), ExchangeKind::Trade);
        assert!(ExchangeKind::from_str("LEND").is_err());
        assert!(ExchangeKind::from_str("borrow").is_err());
    }
}
