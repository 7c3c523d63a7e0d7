use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    account::{AccountError, AccountId, Balance},
    command::LedgerCommand,
};

use super::{Ledger, Receipt, in_memory_ledger::InMemoryLedger};

/// Cloneable handle to a single ledger, for concurrent callers.
///
/// All mutations go through one write lock, so a withdrawal's balance check and
/// debit can't interleave with another mutation. Readers see whole updates only.
#[derive(Debug, Default, Clone)]
pub struct SharedLedger {
    inner: Arc<RwLock<InMemoryLedger>>,
}

impl SharedLedger {
    pub fn new(ledger: InMemoryLedger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    /// Consistent copy of the whole mapping.
    pub fn snapshot(&self) -> InMemoryLedger {
        self.read().clone()
    }

    // commands never leave the ledger half-applied, so a poisoned lock is still usable
    fn read(&self) -> RwLockReadGuard<'_, InMemoryLedger> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, InMemoryLedger> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Ledger for SharedLedger {
    fn execute(&mut self, command: &LedgerCommand) -> Result<Receipt, AccountError> {
        self.write().execute(command)
    }

    fn balance(&self, target: &AccountId) -> Balance {
        self.read().balance(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_share_state() {
        let mut first = SharedLedger::default();
        let mut second = first.clone();
        let user1 = AccountId::from("user1");

        first.deposit(&user1, 1000).unwrap();
        assert_eq!(second.balance(&user1), 1000);

        second.withdraw(&user1, 400).unwrap();
        assert_eq!(first.balance(&user1), 600);

        let err = first.withdraw(&user1, 601).unwrap_err();
        assert_eq!(err.code(), 101);
        assert_eq!(second.snapshot().balance(&user1), 600);
    }
}
