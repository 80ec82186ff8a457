use crate::core::interface::InterfaceDeclaration;
use crate::domain::model::{MethodCall, ParamValue, RemoteMethodSignature};
use crate::utils::error::{RpcError, Result};
use std::collections::HashMap;

fn build_call(
    decl: &InterfaceDeclaration,
    sig: &RemoteMethodSignature,
    params: Vec<ParamValue>,
) -> MethodCall {
    MethodCall {
        service: decl.name.to_string(),
        method: sig.name.to_string(),
        params,
    }
}

/// 只有 XML-RPC 方法能組成呼叫，本地方法不經由 RpcInvoker 派送
fn ensure_remote(sig: &RemoteMethodSignature) -> Result<()> {
    if !sig.is_remote() {
        return Err(RpcError::LocalMethod {
            method: sig.name.to_string(),
        });
    }
    Ok(())
}

/// 以位置參數綁定呼叫
pub fn bind_positional(
    decl: &InterfaceDeclaration,
    method: &str,
    args: Vec<ParamValue>,
) -> Result<MethodCall> {
    let sig = decl.lookup(method)?;
    ensure_remote(sig)?;
    sig.check_args(&args)?;

    tracing::debug!("🔗 Bound {} with {} argument(s)", decl.qualified_name(method), args.len());
    Ok(build_call(decl, sig, args))
}

/// 以具名參數綁定呼叫，依宣告順序排列成位置參數
pub fn bind_named(
    decl: &InterfaceDeclaration,
    method: &str,
    args: &HashMap<String, ParamValue>,
) -> Result<MethodCall> {
    let sig = decl.lookup(method)?;
    ensure_remote(sig)?;

    if let Some(extra) = args
        .keys()
        .find(|key| !sig.parameters.iter().any(|p| p.name == key.as_str()))
    {
        return Err(RpcError::InvalidArgument {
            method: sig.name.to_string(),
            parameter: extra.clone(),
            reason: format!(
                "unknown parameter, expected one of: {}",
                sig.parameter_names().join(", ")
            ),
        });
    }

    let mut ordered = Vec::with_capacity(sig.arity());
    for param in sig.parameters {
        let value = args.get(param.name).ok_or_else(|| RpcError::MissingArgument {
            method: sig.name.to_string(),
            parameter: param.name.to_string(),
        })?;
        ordered.push(value.clone());
    }
    sig.check_args(&ordered)?;

    tracing::debug!("🔗 Bound {} from named arguments", decl.qualified_name(method));
    Ok(build_call(decl, sig, ordered))
}

/// 解析命令列的原始字串參數，依各參數宣告的型別轉換
pub fn parse_args(sig: &RemoteMethodSignature, raw: &[String]) -> Result<Vec<ParamValue>> {
    if raw.len() != sig.arity() {
        return Err(RpcError::ArityMismatch {
            method: sig.name.to_string(),
            expected: sig.arity(),
            actual: raw.len(),
        });
    }

    sig.parameters
        .iter()
        .zip(raw)
        .map(|(param, value)| {
            param.ty.parse(value).map_err(|reason| RpcError::InvalidArgument {
                method: sig.name.to_string(),
                parameter: param.name.to_string(),
                reason,
            })
        })
        .collect()
}
