// Adapters layer: concrete `RpcInvoker` implementations.

pub mod dry_run;
