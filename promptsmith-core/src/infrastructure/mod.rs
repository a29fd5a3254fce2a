pub mod rpc;
pub mod upstream;
