use std::io::Read;

use crate::{
    account::{AccountId, Balance},
    command::TransactionKind,
};
use csv::{DeserializeRecordsIntoIter, Trim};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub account: AccountId,
    pub amount: Option<Balance>,
}

/// Parses a list of ledger calls in CSV format, yielding each row with its line number.
pub struct CsvTransactionParser<R> {
    iter: DeserializeRecordsIntoIter<R, Transaction>,
}

impl<R> CsvTransactionParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R> Iterator for CsvTransactionParser<R>
where
    R: Read,
{
    type Item = (u64, csv::Result<Transaction>);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row))
    }
}
