//! Drives an [`InMemoryLedger`] from a CSV stream of calls and prints the resulting balances.

use std::io::{Read, Write};

use crate::processor::{
    Ledger, LedgerError, LedgerOutcome, in_memory_ledger::InMemoryLedger,
};
use anyhow::{Context, Result};
use csv_parser::CsvTransactionParser;
use csv_printer::{AccountBalance, print_balances};
use tracing::info;
pub mod csv_parser;
pub mod csv_printer;

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, LedgerError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvTransactionParser::new(self.input);

        let mut ledger = InMemoryLedger::default();

        for (line, row) in parser {
            let row = row.with_context(|| format!("Failed to parse line {line}"))?;
            match ledger.process_request(row.account.clone(), row.kind, row.amount) {
                Ok(LedgerOutcome::Balance(balance)) => {
                    info!(line, account = %row.account, %balance, "balance query");
                }
                Ok(LedgerOutcome::Receipt(_)) => {}
                Err(err) => (self.error_printer)(line, err),
            }
        }

        let mut balances: Vec<_> = ledger
            .accounts()
            .map(|(account, balance)| AccountBalance { account, balance })
            .collect();
        balances.sort_by(|a, b| a.account.cmp(b.account));
        print_balances(self.output, balances.into_iter())
    }
}
