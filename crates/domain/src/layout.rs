//! Field layouts: which inputs the actions page shows for each command.
//!
//! The mapping is a static table: a command always yields the same ordered
//! list of fields, each with a display label and the payload key its value is
//! submitted under.

use serde::{Deserialize, Serialize};

use crate::command::Command;

/// Maximum number of inputs any layout shows.
pub const MAX_FIELDS: usize = 2;

/// The payload key a visible field's value is sent under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRole {
    Amount,
    Stock,
    Filename,
}

impl FieldRole {
    /// Form field name on the wire.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Amount => "amount",
            Self::Stock => "stock",
            Self::Filename => "filename",
        }
    }
}

/// One visible input: its label and its payload role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub role: FieldRole,
}

const AMOUNT: FieldSpec = FieldSpec {
    label: "Amount:",
    role: FieldRole::Amount,
};

const STOCK: FieldSpec = FieldSpec {
    label: "Stock:",
    role: FieldRole::Stock,
};

const FILENAME: FieldSpec = FieldSpec {
    label: "Filename:",
    role: FieldRole::Filename,
};

const NONE: &[FieldSpec] = &[];
const AMOUNT_ONLY: &[FieldSpec] = &[AMOUNT];
const STOCK_ONLY: &[FieldSpec] = &[STOCK];
const AMOUNT_AND_STOCK: &[FieldSpec] = &[AMOUNT, STOCK];
const AMOUNT_AND_FILENAME: &[FieldSpec] = &[AMOUNT, FILENAME];

/// Ordered set of visible inputs for a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    fields: &'static [FieldSpec],
}

impl Layout {
    /// Number of visible inputs (0, 1 or 2).
    #[must_use]
    pub const fn visible_count(&self) -> usize {
        self.fields.len()
    }

    /// Visible fields in display order.
    #[must_use]
    pub const fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Field shown in input slot `index`, if that slot is visible.
    #[must_use]
    pub fn field(&self, index: usize) -> Option<FieldSpec> {
        self.fields.get(index).copied()
    }

    /// Labels of the visible fields in display order.
    #[must_use]
    pub fn labels(&self) -> Vec<&'static str> {
        self.fields.iter().map(|field| field.label).collect()
    }
}

impl Command {
    /// The input layout the actions page shows for this command.
    #[must_use]
    pub const fn layout(self) -> Layout {
        let fields = match self {
            Self::Add => AMOUNT_ONLY,
            Self::Quote | Self::CancelSetBuy | Self::CancelSetSell => STOCK_ONLY,
            Self::Buy
            | Self::Sell
            | Self::SetBuyAmount
            | Self::SetBuyTrigger
            | Self::SetSellAmount
            | Self::SetSellTrigger => AMOUNT_AND_STOCK,
            Self::CommitBuy
            | Self::CancelBuy
            | Self::CommitSell
            | Self::CancelSell
            | Self::DisplaySummary => NONE,
            Self::Dumplog => AMOUNT_AND_FILENAME,
        };
        Layout { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_every_command_to_documented_layout() {
        let table: [(Command, &[&str]); 16] = [
            (Command::Add, &["Amount:"]),
            (Command::Quote, &["Stock:"]),
            (Command::Buy, &["Amount:", "Stock:"]),
            (Command::CommitBuy, &[]),
            (Command::CancelBuy, &[]),
            (Command::Sell, &["Amount:", "Stock:"]),
            (Command::CommitSell, &[]),
            (Command::CancelSell, &[]),
            (Command::SetBuyAmount, &["Amount:", "Stock:"]),
            (Command::CancelSetBuy, &["Stock:"]),
            (Command::SetBuyTrigger, &["Amount:", "Stock:"]),
            (Command::SetSellAmount, &["Amount:", "Stock:"]),
            (Command::SetSellTrigger, &["Amount:", "Stock:"]),
            (Command::CancelSetSell, &["Stock:"]),
            (Command::Dumplog, &["Amount:", "Filename:"]),
            (Command::DisplaySummary, &[]),
        ];

        for (command, labels) in table {
            let layout = command.layout();
            assert_eq!(layout.visible_count(), labels.len(), "{command}");
            assert_eq!(layout.labels(), labels, "{command}");
        }
    }

    #[test]
    fn should_return_same_layout_on_every_lookup() {
        for command in Command::ALL {
            assert_eq!(command.layout(), command.layout());
        }
    }

    #[test]
    fn should_never_exceed_two_fields() {
        for command in Command::ALL {
            assert!(command.layout().visible_count() <= MAX_FIELDS);
        }
    }

    #[test]
    fn should_follow_amount_label_rule_for_trading_commands() {
        for command in Command::ALL.into_iter().filter(|c| *c != Command::Dumplog) {
            for field in command.layout().fields() {
                let expected = if field.label == "Amount:" {
                    FieldRole::Amount
                } else {
                    FieldRole::Stock
                };
                assert_eq!(field.role, expected, "{command}");
            }
        }
    }

    #[test]
    fn should_submit_second_dumplog_field_as_filename() {
        let layout = Command::Dumplog.layout();
        assert_eq!(layout.visible_count(), 2);
        assert_eq!(layout.field(0).map(|f| f.role), Some(FieldRole::Amount));
        assert_eq!(layout.field(1).map(|f| f.role), Some(FieldRole::Filename));
    }

    #[test]
    fn should_never_submit_stock_for_dumplog() {
        assert!(
            Command::Dumplog
                .layout()
                .fields()
                .iter()
                .all(|field| field.role != FieldRole::Stock)
        );
    }

    #[test]
    fn should_return_none_for_hidden_slot() {
        assert_eq!(Command::Quote.layout().field(1), None);
        assert_eq!(Command::CommitBuy.layout().field(0), None);
    }

    #[test]
    fn should_use_wire_names_for_role_keys() {
        assert_eq!(FieldRole::Amount.key(), "amount");
        assert_eq!(FieldRole::Stock.key(), "stock");
        assert_eq!(FieldRole::Filename.key(), "filename");
    }
}
