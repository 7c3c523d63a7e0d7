use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::command::{LedgerAction, LedgerCommand};

/// Unsigned amount used for deposits, withdrawals and balances.
pub type Balance = u128;

/// Opaque account identity, e.g. an address derived from a public key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountEventKind {
    Deposited,
    Withdrawn,
}

#[derive(Debug)]
pub struct AccountEvent {
    amount: Balance,
    kind: AccountEventKind,
}

impl AccountEvent {
    pub fn amount(&self) -> Balance {
        self.amount
    }

    pub fn kind(&self) -> AccountEventKind {
        self.kind
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        requested: Balance,
        available: Balance,
    },
    #[error("Deposit of {amount} would overflow balance {balance}")]
    BalanceOverflow { amount: Balance, balance: Balance },
}

impl AccountError {
    /// Numeric code reported to callers.
    pub fn code(&self) -> u32 {
        match self {
            AccountError::InsufficientBalance { .. } => 101,
            AccountError::BalanceOverflow { .. } => 102,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Account {
    balance: Balance,
}

impl Account {
    pub fn balance(&self) -> Balance {
        self.balance
    }

    /// Events are produced by [`Account::handle_command`], so they are trusted here.
    pub fn apply(&mut self, event: &AccountEvent) {
        match event.kind {
            AccountEventKind::Deposited => {
                self.balance += event.amount;
            }
            AccountEventKind::Withdrawn => {
                self.balance -= event.amount;
            }
        }
    }

    pub fn handle_command(&self, command: &LedgerCommand) -> Result<AccountEvent, AccountError> {
        match command.action {
            LedgerAction::Deposit => {
                if self.balance.checked_add(command.amount).is_none() {
                    return Err(AccountError::BalanceOverflow {
                        amount: command.amount,
                        balance: self.balance,
                    });
                }
                Ok(AccountEvent {
                    amount: command.amount,
                    kind: AccountEventKind::Deposited,
                })
            }
            LedgerAction::Withdraw => {
                if self.balance >= command.amount {
                    Ok(AccountEvent {
                        amount: command.amount,
                        kind: AccountEventKind::Withdrawn,
                    })
                } else {
                    Err(AccountError::InsufficientBalance {
                        requested: command.amount,
                        available: self.balance,
                    })
                }
            }
        }
    }
}
