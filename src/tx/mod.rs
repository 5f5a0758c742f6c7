//! Transaction plumbing: the RPC client, contract interfaces, and the
//! senders/readers built on top of them

pub mod abi;
pub mod client;
pub mod reader;
pub mod sender;
