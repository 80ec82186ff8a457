use crate::core::affiliate_program::AFFILIATE_PROGRAM_SERVICE;
use crate::core::interface::InterfaceDeclaration;
use crate::domain::model::RemoteMethodSignature;
use crate::utils::error::{RpcError, Result};
use crate::utils::validation::validate_identifier;
use std::collections::{BTreeMap, HashSet};

/// 持有所有介面宣告，依服務名稱查詢
#[derive(Debug, Default)]
pub struct ServiceRegistry {
    services: BTreeMap<&'static str, &'static InterfaceDeclaration>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.services.insert(AFFILIATE_PROGRAM_SERVICE.name, &AFFILIATE_PROGRAM_SERVICE);
        registry
    }

    pub fn register(&mut self, decl: &'static InterfaceDeclaration) -> Result<()> {
        validate_identifier("service", decl.name)?;

        // 方法名在宣告內唯一，參數名在簽章內唯一
        let mut method_names = HashSet::new();
        for sig in decl.methods() {
            validate_identifier("method", sig.name)?;
            if !method_names.insert(sig.name) {
                return Err(RpcError::DuplicateName {
                    scope: decl.name.to_string(),
                    name: sig.name.to_string(),
                });
            }

            let mut param_names = HashSet::new();
            for param in sig.parameters {
                if !param_names.insert(param.name) {
                    return Err(RpcError::DuplicateName {
                        scope: decl.qualified_name(sig.name),
                        name: param.name.to_string(),
                    });
                }
            }
        }

        if self.services.contains_key(decl.name) {
            return Err(RpcError::DuplicateService {
                service: decl.name.to_string(),
            });
        }

        tracing::debug!("📋 Registered {} ({} methods)", decl.name, decl.methods().len());
        self.services.insert(decl.name, decl);
        Ok(())
    }

    pub fn get(&self, service: &str) -> Result<&'static InterfaceDeclaration> {
        self.services
            .get(service)
            .copied()
            .ok_or_else(|| RpcError::UnknownService {
                service: service.to_string(),
            })
    }

    pub fn services(&self) -> impl Iterator<Item = &'static InterfaceDeclaration> + '_ {
        self.services.values().copied()
    }

    /// 解析 `Service.method` 形式的完整名稱
    pub fn resolve(
        &self,
        qualified: &str,
    ) -> Result<(&'static InterfaceDeclaration, &'static RemoteMethodSignature)> {
        let (service, method) = qualified.split_once('.').ok_or_else(|| RpcError::UnknownMethod {
            service: String::new(),
            method: qualified.to_string(),
        })?;

        let decl = self.get(service)?;
        let sig = decl.lookup(method)?;
        Ok((decl, sig))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{MethodKind, ParamType, Parameter};

    #[test]
    fn test_resolve_qualified_name() {
        let registry = ServiceRegistry::with_defaults();
        let (decl, sig) = registry
            .resolve("AffiliateProgramService.getProgramsForAffiliate")
            .unwrap();

        assert_eq!(decl.name, "AffiliateProgramService");
        assert_eq!(sig.parameter_names(), vec!["affiliateId"]);
    }

    #[test]
    fn test_resolve_errors() {
        let registry = ServiceRegistry::with_defaults();
        assert!(matches!(
            registry.resolve("ContactService.load"),
            Err(RpcError::UnknownService { .. })
        ));
        assert!(matches!(
            registry.resolve("AffiliateProgramService.deleteAffiliate"),
            Err(RpcError::UnknownMethod { .. })
        ));
        assert!(matches!(
            registry.resolve("getAffiliatePrograms"),
            Err(RpcError::UnknownMethod { .. })
        ));
    }

    static DUPLICATE_METHODS: InterfaceDeclaration = InterfaceDeclaration::new(
        "DupService",
        &[
            RemoteMethodSignature {
                name: "m",
                parameters: &[],
                kind: MethodKind::XmlRpc,
                description: "",
            },
            RemoteMethodSignature {
                name: "m",
                parameters: &[],
                kind: MethodKind::XmlRpc,
                description: "",
            },
        ],
    );

    static DUPLICATE_PARAMS: InterfaceDeclaration = InterfaceDeclaration::new(
        "DupParamService",
        &[RemoteMethodSignature {
            name: "m",
            parameters: &[
                Parameter::new("a", ParamType::Int),
                Parameter::new("a", ParamType::String),
            ],
            kind: MethodKind::XmlRpc,
            description: "",
        }],
    );

    #[test]
    fn test_register_rejects_duplicate_method_names() {
        let mut registry = ServiceRegistry::new();
        match registry.register(&DUPLICATE_METHODS) {
            Err(RpcError::DuplicateName { scope, name }) => {
                assert_eq!(scope, "DupService");
                assert_eq!(name, "m");
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(registry.get("DupService").is_err());
    }

    #[test]
    fn test_register_rejects_duplicate_parameter_names() {
        let mut registry = ServiceRegistry::new();
        match registry.register(&DUPLICATE_PARAMS) {
            Err(RpcError::DuplicateName { scope, name }) => {
                assert_eq!(scope, "DupParamService.m");
                assert_eq!(name, "a");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = ServiceRegistry::new();
        registry.register(&AFFILIATE_PROGRAM_SERVICE).unwrap();
        assert!(matches!(
            registry.register(&AFFILIATE_PROGRAM_SERVICE),
            Err(RpcError::DuplicateService { .. })
        ));
        assert_eq!(registry.services().count(), 1);
    }
}
