use std::fmt;

use thiserror::Error;

use crate::{
    account::{AccountError, AccountId, Balance},
    command::{LedgerAction, LedgerCommand, LedgerCommandError, LedgerRequest, TransactionKind},
};

pub mod in_memory_ledger;
pub mod shared_ledger;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    CommandErr(#[from] LedgerCommandError),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

impl LedgerError {
    /// Ledger rejections carry a numeric code, malformed requests don't.
    pub fn code(&self) -> Option<u32> {
        match self {
            LedgerError::CommandErr(_) => None,
            LedgerError::AccountErr(err) => Some(err.code()),
        }
    }
}

/// Constant success tag of a mutating call. Carries no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receipt {
    Deposited,
    Withdrawn,
}

impl Receipt {
    pub fn as_str(&self) -> &'static str {
        match self {
            Receipt::Deposited => "Deposited",
            Receipt::Withdrawn => "Withdrawn",
        }
    }
}

impl From<LedgerAction> for Receipt {
    fn from(action: LedgerAction) -> Self {
        match action {
            LedgerAction::Deposit => Receipt::Deposited,
            LedgerAction::Withdraw => Receipt::Withdrawn,
        }
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerOutcome {
    Receipt(Receipt),
    Balance(Balance),
}

/// Account -> balance mapping with deposit, withdraw and open balance queries.
///
/// Implementations must validate and apply a command atomically: a withdrawal
/// either fully applies or leaves the balance untouched.
pub trait Ledger {
    fn execute(&mut self, command: &LedgerCommand) -> Result<Receipt, AccountError>;

    /// Balance of any account, `0` for accounts never touched.
    fn balance(&self, target: &AccountId) -> Balance;

    fn deposit(&mut self, caller: &AccountId, amount: Balance) -> Result<Receipt, AccountError> {
        self.execute(&LedgerCommand {
            caller: caller.clone(),
            action: LedgerAction::Deposit,
            amount,
        })
    }

    fn withdraw(&mut self, caller: &AccountId, amount: Balance) -> Result<Receipt, AccountError> {
        self.execute(&LedgerCommand {
            caller: caller.clone(),
            action: LedgerAction::Withdraw,
            amount,
        })
    }

    /// Entry point for raw harness rows.
    fn process_request(
        &mut self,
        account: AccountId,
        kind: TransactionKind,
        amount: Option<Balance>,
    ) -> Result<LedgerOutcome, LedgerError> {
        match LedgerRequest::parse_request(account, kind, amount)? {
            LedgerRequest::Command(command) => Ok(LedgerOutcome::Receipt(self.execute(&command)?)),
            LedgerRequest::Query { target } => Ok(LedgerOutcome::Balance(self.balance(&target))),
        }
    }
}
