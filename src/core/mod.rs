pub mod affiliate_program;
pub mod call;
pub mod client;
pub mod interface;
pub mod registry;

pub use crate::domain::model::{MethodCall, MethodKind, ParamType, ParamValue, RemoteMethodSignature};
pub use crate::domain::ports::RpcInvoker;
pub use crate::utils::error::Result;
