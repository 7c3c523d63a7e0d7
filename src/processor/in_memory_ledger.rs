use std::collections::HashMap;

use tracing::debug;

use crate::{
    account::{Account, AccountError, AccountId, Balance},
    command::LedgerCommand,
};

use super::{Ledger, Receipt};

#[derive(Debug, Default, Clone)]
pub struct InMemoryLedger {
    accounts: HashMap<AccountId, Account>,
}

impl InMemoryLedger {
    /// Materialized entries only. An explicit zero entry is possible after a full withdrawal.
    pub fn accounts(&self) -> impl Iterator<Item = (&AccountId, Balance)> {
        self.accounts.iter().map(|(id, acc)| (id, acc.balance()))
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Ledger for InMemoryLedger {
    fn execute(&mut self, command: &LedgerCommand) -> Result<Receipt, AccountError> {
        // validate before materializing, so a rejected call leaves no entry behind
        let evt = match self.accounts.get(&command.caller) {
            Some(acc) => acc.handle_command(command),
            None => Account::default().handle_command(command),
        }
        .inspect_err(|err| {
            debug!(account = %command.caller, code = err.code(), "{err}");
        })?;

        let acc = self.accounts.entry(command.caller.clone()).or_default();
        acc.apply(&evt);
        debug!(
            account = %command.caller,
            kind = ?evt.kind(),
            amount = %evt.amount(),
            balance = %acc.balance(),
            "applied"
        );
        Ok(command.action.into())
    }

    fn balance(&self, target: &AccountId) -> Balance {
        self.accounts.get(target).map_or(0, Account::balance)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        command::{LedgerCommandError, TransactionKind},
        processor::{LedgerError, LedgerOutcome},
    };

    use super::*;

    #[test]
    fn process_some_requests() {
        let mut ledger = InMemoryLedger::default();
        let user1 = AccountId::from("user1");
        let user2 = AccountId::from("user2");

        assert_eq!(ledger.deposit(&user1, 1000).unwrap(), Receipt::Deposited);
        assert_eq!(ledger.deposit(&user2, 10).unwrap(), Receipt::Deposited);
        assert_eq!(ledger.len(), 2);

        let outcome = ledger
            .process_request(user1.clone(), TransactionKind::Withdraw, Some(300))
            .unwrap();
        assert_eq!(outcome, LedgerOutcome::Receipt(Receipt::Withdrawn));

        let outcome = ledger
            .process_request(user1.clone(), TransactionKind::Balance, None)
            .unwrap();
        assert_eq!(outcome, LedgerOutcome::Balance(700));
        assert_eq!(ledger.balance(&user2), 10);

        let err = ledger
            .process_request(user2.clone(), TransactionKind::Deposit, None)
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::CommandErr(LedgerCommandError::AmountRequired { .. })
        ));
        assert_eq!(ledger.balance(&user2), 10);
    }

    #[test]
    fn rejected_withdrawal_leaves_state_untouched() {
        let mut ledger = InMemoryLedger::default();
        let user1 = AccountId::from("user1");
        let user2 = AccountId::from("user2");

        // nothing materialized for an account that was never credited
        let err = ledger.withdraw(&user2, 100).unwrap_err();
        assert_eq!(err.code(), 101);
        assert!(ledger.is_empty());

        ledger.deposit(&user1, 1000).unwrap();
        let err = ledger.withdraw(&user1, 1500).unwrap_err();
        assert_eq!(err.code(), 101);
        assert_eq!(ledger.balance(&user1), 1000);
    }

    #[test]
    fn withdrawal_to_zero_keeps_entry() {
        let mut ledger = InMemoryLedger::default();
        let user1 = AccountId::from("user1");

        ledger.deposit(&user1, 1000).unwrap();
        ledger.withdraw(&user1, 1000).unwrap();
        assert_eq!(ledger.balance(&user1), 0);
        assert_eq!(ledger.accounts().collect::<Vec<_>>(), vec![(&user1, 0)]);
    }

    #[test]
    fn zero_deposit_materializes_entry() {
        let mut ledger = InMemoryLedger::default();
        let user1 = AccountId::from("user1");

        assert_eq!(ledger.deposit(&user1, 0).unwrap(), Receipt::Deposited);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.balance(&user1), 0);
    }

    #[test]
    fn overflowing_deposit_is_rejected() {
        let mut ledger = InMemoryLedger::default();
        let user1 = AccountId::from("user1");

        ledger.deposit(&user1, Balance::MAX).unwrap();
        let err = ledger.deposit(&user1, 1).unwrap_err();
        assert_eq!(err.code(), 102);
        assert_eq!(ledger.balance(&user1), Balance::MAX);
    }
}
