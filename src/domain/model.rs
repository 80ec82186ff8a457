use crate::utils::error::{RpcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 方法的派送方式：經由 XML-RPC 遠端呼叫，或在本地執行
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    XmlRpc,
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    Int,
    String,
}

impl ParamType {
    /// 將命令列字串轉為對應型別的參數值
    pub fn parse(&self, raw: &str) -> std::result::Result<ParamValue, String> {
        match self {
            ParamType::Int => raw
                .trim()
                .parse::<i64>()
                .map(ParamValue::Int)
                .map_err(|e| format!("expected an integer, got '{}' ({})", raw, e)),
            ParamType::String => Ok(ParamValue::String(raw.to_string())),
        }
    }

    pub fn accepts(&self, value: &ParamValue) -> bool {
        matches!(
            (self, value),
            (ParamType::Int, ParamValue::Int(_)) | (ParamType::String, ParamValue::String(_))
        )
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Int => f.write_str("int"),
            ParamType::String => f.write_str("string"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    String(String),
}

impl ParamValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Int(_) => "int",
            ParamValue::String(_) => "string",
        }
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: ParamType,
}

impl Parameter {
    pub const fn new(name: &'static str, ty: ParamType) -> Self {
        Self { name, ty }
    }
}

/// 遠端方法簽章。參數順序即 XML-RPC 的位置順序，不可調整
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RemoteMethodSignature {
    pub name: &'static str,
    pub parameters: &'static [Parameter],
    pub kind: MethodKind,
    pub description: &'static str,
}

impl RemoteMethodSignature {
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    pub fn parameter_names(&self) -> Vec<&'static str> {
        self.parameters.iter().map(|p| p.name).collect()
    }

    pub fn is_remote(&self) -> bool {
        self.kind == MethodKind::XmlRpc
    }

    /// 檢查參數個數與型別，通過後才能組成 MethodCall
    pub fn check_args(&self, args: &[ParamValue]) -> Result<()> {
        if args.len() != self.arity() {
            return Err(RpcError::ArityMismatch {
                method: self.name.to_string(),
                expected: self.arity(),
                actual: args.len(),
            });
        }

        for (param, value) in self.parameters.iter().zip(args) {
            if !param.ty.accepts(value) {
                return Err(RpcError::InvalidArgument {
                    method: self.name.to_string(),
                    parameter: param.name.to_string(),
                    reason: format!("expected {}, got {}", param.ty, value.type_name()),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for RemoteMethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", param.name, param.ty)?;
        }
        f.write_str(")")
    }
}

/// 綁定完成、可交給 RPC 客戶端送出的呼叫
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodCall {
    pub service: String,
    pub method: String,
    pub params: Vec<ParamValue>,
}

impl MethodCall {
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.service, self.method)
    }
}
