//! Word catalog: entries, ids, and the validated bank.

pub mod bank;
pub mod entry;

pub use bank::{BankError, WordBank, BANK_SIZE, GROUP_COUNT, GROUP_SIZE};
pub use entry::{GroupId, WordEntry, WordId};
