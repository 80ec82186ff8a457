use crate::core::affiliate_program::SERVICE_NAME;
use crate::core::call::{bind_named, bind_positional, parse_args};
use crate::core::interface::InterfaceDeclaration;
use crate::core::registry::ServiceRegistry;
use crate::domain::model::{MethodCall, ParamValue, RemoteMethodSignature};
use crate::utils::error::{RpcError, Result};
use serde_json::Value;
use std::collections::HashMap;

/// 解析命令列給的方法名稱；未帶服務名稱時預設為 Affiliate Program 服務
pub fn resolve_method(
    registry: &ServiceRegistry,
    name: &str,
) -> Result<(&'static InterfaceDeclaration, &'static RemoteMethodSignature)> {
    if name.contains('.') {
        return registry.resolve(name);
    }
    let decl = registry.get(SERVICE_NAME)?;
    Ok((decl, decl.lookup(name)?))
}

/// 組出 `plan` 的呼叫。沒有位置參數時改用設定檔 `[defaults]` 中屬於此方法的參數
pub fn plan_call(
    decl: &InterfaceDeclaration,
    sig: &RemoteMethodSignature,
    args: &[String],
    defaults: Option<&HashMap<String, ParamValue>>,
) -> Result<MethodCall> {
    if !args.is_empty() || sig.arity() == 0 {
        return bind_positional(decl, sig.name, parse_args(sig, args)?);
    }

    let defaults = defaults.ok_or_else(|| RpcError::ArityMismatch {
        method: sig.name.to_string(),
        expected: sig.arity(),
        actual: 0,
    })?;

    tracing::debug!("No positional arguments, using [defaults] from config");
    let named: HashMap<String, ParamValue> = defaults
        .iter()
        .filter(|(name, _)| sig.parameters.iter().any(|p| p.name == name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();
    bind_named(decl, sig.name, &named)
}

fn describe_line(decl: &InterfaceDeclaration, sig: &RemoteMethodSignature) -> String {
    format!("{}.{}\n    {}", decl.name, sig, sig.description)
}

pub fn render_list(registry: &ServiceRegistry, json: bool) -> Result<String> {
    let services: Vec<_> = registry.services().collect();
    if json {
        return Ok(serde_json::to_string_pretty(&services)?);
    }

    let lines: Vec<String> = services
        .iter()
        .flat_map(|decl| decl.methods().iter().map(move |sig| describe_line(decl, sig)))
        .collect();
    Ok(lines.join("\n"))
}

pub fn render_describe(
    decl: &InterfaceDeclaration,
    sig: &RemoteMethodSignature,
    json: bool,
) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(sig)?)
    } else {
        Ok(describe_line(decl, sig))
    }
}

pub fn render_plan(plan: &Value, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(plan)?)
    } else {
        Ok(format!(
            "{} {}",
            plan["methodName"].as_str().unwrap_or_default(),
            plan["params"]
        ))
    }
}
