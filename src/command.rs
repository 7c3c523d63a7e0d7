use serde::Deserialize;
use thiserror::Error;

use crate::account::{AccountId, Balance};

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    #[serde(alias = "withdrawal")]
    Withdraw,
    Balance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerAction {
    Deposit,
    Withdraw,
}

/// Mutating call. The caller is always the account being credited or debited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerCommand {
    pub caller: AccountId,
    pub action: LedgerAction,
    pub amount: Balance,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerCommandError {
    #[error("Amount is required for {action:?}")]
    AmountRequired { action: LedgerAction },
    #[error("Balance query for `{target}` must not carry an amount")]
    UnexpectedAmount { target: AccountId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerRequest {
    Command(LedgerCommand),
    Query { target: AccountId },
}

impl LedgerRequest {
    pub fn parse_request(
        account: AccountId,
        kind: TransactionKind,
        amount: Option<Balance>,
    ) -> Result<Self, LedgerCommandError> {
        match kind {
            TransactionKind::Deposit => Ok(Self::Command(Self::parse_command(
                account,
                amount,
                LedgerAction::Deposit,
            )?)),
            TransactionKind::Withdraw => Ok(Self::Command(Self::parse_command(
                account,
                amount,
                LedgerAction::Withdraw,
            )?)),
            TransactionKind::Balance => match amount {
                Some(_) => Err(LedgerCommandError::UnexpectedAmount { target: account }),
                None => Ok(Self::Query { target: account }),
            },
        }
    }

    fn parse_command(
        caller: AccountId,
        amount: Option<Balance>,
        action: LedgerAction,
    ) -> Result<LedgerCommand, LedgerCommandError> {
        let Some(amount) = amount else {
            return Err(LedgerCommandError::AmountRequired { action });
        };
        Ok(LedgerCommand {
            caller,
            action,
            amount,
        })
    }
}
