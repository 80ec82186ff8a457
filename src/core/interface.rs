use crate::domain::model::RemoteMethodSignature;
use crate::utils::error::{RpcError, Result};
use serde::Serialize;

/// 一組具名、唯讀的遠端方法簽章
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InterfaceDeclaration {
    pub name: &'static str,
    pub methods: &'static [RemoteMethodSignature],
}

impl InterfaceDeclaration {
    pub const fn new(name: &'static str, methods: &'static [RemoteMethodSignature]) -> Self {
        Self { name, methods }
    }

    /// 依名稱查詢方法，大小寫必須完全相符
    pub fn lookup(&self, method: &str) -> Result<&'static RemoteMethodSignature> {
        self.methods
            .iter()
            .find(|sig| sig.name == method)
            .ok_or_else(|| RpcError::UnknownMethod {
                service: self.name.to_string(),
                method: method.to_string(),
            })
    }

    pub fn contains(&self, method: &str) -> bool {
        self.methods.iter().any(|sig| sig.name == method)
    }

    pub fn methods(&self) -> &'static [RemoteMethodSignature] {
        self.methods
    }

    pub fn method_names(&self) -> Vec<&'static str> {
        self.methods.iter().map(|sig| sig.name).collect()
    }

    pub fn qualified_name(&self, method: &str) -> String {
        format!("{}.{}", self.name, method)
    }
}
