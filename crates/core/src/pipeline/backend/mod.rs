//! Back-end pipeline stages: Dispatch -> Issue -> Execute -> Writeback -> Retire.

pub mod dispatch;
pub mod execute;
pub mod issue;
pub mod retire;
pub mod writeback;
