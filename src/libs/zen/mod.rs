//! ZenChain Testnet access.  [`rpc::ChainRpc`] is the capability the
//! entry points are written against; [`client::ZenClient`] implements it
//! over plain JSON‑RPC with `reqwest`, using Alloy for key handling and
//! transaction signing.  [`spells`] holds the small helpers shared by both
//! flows (quantity decoding, chain checks, network info).
pub mod client;
pub mod rpc;
pub mod spells;
