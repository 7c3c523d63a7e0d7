/// Account identity, balance and the deposit/withdraw transition rules.
/// State is modified using events, which are created by handling commands
pub mod account;

/// Ledger commands, plus parsing of raw calls into commands or balance queries.
pub mod command;

/// The [`processor::Ledger`] interface with a single-owner and a shared, lock-backed backend.
pub mod processor;

/// CSV harness used by the binary and the integration tests.
pub mod bin_utils;
