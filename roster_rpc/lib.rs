pub mod middleware;
pub mod pb;
mod server;
mod transport;

pub use server::{RpcConfig, RpcServer};
pub use transport::RosterRpc;
