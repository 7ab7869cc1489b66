// src/types/trade.rs

use serde::{Deserialize, Serialize};

/// An agent's directional stance. Exactly one of the three at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Neutral,
    Long,
    Short,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeKind {
    Long,
    Short,
    Close,
}

/// An immutable trade event. `pnl` is carried only on close events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub agent_id: String,
    #[serde(rename = "type")]
    pub kind: TradeKind,
    pub price: f64,
    pub size: f64,
    #[serde(rename = "timestamp")]
    pub timestamp_ms: i64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pnl: Option<f64>,
}

// -----------------------------------------------------------------------------
//  Unit Tests
// -----------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_trade_serializes_with_pnl() {
        let trade = Trade {
            agent_id: "claude".into(),
            kind: TradeKind::Close,
            price: 51_000.0,
            size: 0.01,
            timestamp_ms: 1_700_000_000_000,
            pnl: Some(12.5),
        };
        let json = serde_json::to_value(&trade).unwrap();
        assert_eq!(json["type"], "close");
        assert_eq!(json["agentId"], "claude");
        assert_eq!(json["pnl"], 12.5);
    }

    #[test]
    fn open_trade_omits_pnl_field() {
        let trade = Trade {
            agent_id: "deepseek".into(),
            kind: TradeKind::Long,
            price: 50_000.0,
            size: 0.02,
            timestamp_ms: 0,
            pnl: None,
        };
        let json = serde_json::to_value(&trade).unwrap();
        assert!(json.get("pnl").is_none(), "pnl must be absent on opens");
        assert_eq!(json["type"], "long");
    }
}
