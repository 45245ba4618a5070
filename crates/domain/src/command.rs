//! Command: the closed set of trading actions a user can submit.
//!
//! Each command maps to one endpoint on the trading web server
//! (`<base-url>/<COMMAND>/`) and to a fixed input-field layout
//! (see [`crate::layout`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A trading action identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    Add,
    Quote,
    Buy,
    CommitBuy,
    CancelBuy,
    Sell,
    CommitSell,
    CancelSell,
    SetBuyAmount,
    CancelSetBuy,
    SetBuyTrigger,
    SetSellAmount,
    SetSellTrigger,
    CancelSetSell,
    Dumplog,
    DisplaySummary,
}

impl Command {
    /// Every command, in selector order.
    pub const ALL: [Command; 16] = [
        Self::Add,
        Self::Quote,
        Self::Buy,
        Self::CommitBuy,
        Self::CancelBuy,
        Self::Sell,
        Self::CommitSell,
        Self::CancelSell,
        Self::SetBuyAmount,
        Self::CancelSetBuy,
        Self::SetBuyTrigger,
        Self::SetSellAmount,
        Self::SetSellTrigger,
        Self::CancelSetSell,
        Self::Dumplog,
        Self::DisplaySummary,
    ];

    /// Wire identifier, also used as the endpoint path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Quote => "QUOTE",
            Self::Buy => "BUY",
            Self::CommitBuy => "COMMIT_BUY",
            Self::CancelBuy => "CANCEL_BUY",
            Self::Sell => "SELL",
            Self::CommitSell => "COMMIT_SELL",
            Self::CancelSell => "CANCEL_SELL",
            Self::SetBuyAmount => "SET_BUY_AMOUNT",
            Self::CancelSetBuy => "CANCEL_SET_BUY",
            Self::SetBuyTrigger => "SET_BUY_TRIGGER",
            Self::SetSellAmount => "SET_SELL_AMOUNT",
            Self::SetSellTrigger => "SET_SELL_TRIGGER",
            Self::CancelSetSell => "CANCEL_SET_SELL",
            Self::Dumplog => "DUMPLOG",
            Self::DisplaySummary => "DISPLAY_SUMMARY",
        }
    }

    /// Human-readable name: `SET_BUY_TRIGGER` becomes `Set Buy Trigger`.
    #[must_use]
    pub fn title(self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => {
                        let mut out = first.to_ascii_uppercase().to_string();
                        out.push_str(&chars.as_str().to_ascii_lowercase());
                        out
                    }
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownCommand(s.to_string()))
    }
}
