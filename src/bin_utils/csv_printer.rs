use std::io::Write;

use crate::account::{AccountId, Balance};
use csv::Writer;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AccountBalance<'a> {
    pub account: &'a AccountId,
    pub balance: Balance,
}

pub fn print_balances<'a, W>(
    output: &mut W,
    balances: impl Iterator<Item = AccountBalance<'a>>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for balance in balances {
        if let Err(err) = writer.serialize(balance) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    // Ensure all data is flushed to the output
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_header_and_rows() {
        let user1 = AccountId::from("user1");
        let mut output = Vec::new();
        print_balances(
            &mut output,
            [AccountBalance {
                account: &user1,
                balance: 700,
            }]
            .into_iter(),
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "account,balance\nuser1,700\n"
        );
    }
}
