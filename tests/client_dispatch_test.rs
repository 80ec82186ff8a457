use affiliate_rpc::core::call::bind_positional;
use affiliate_rpc::domain::model::{MethodCall, ParamValue};
use affiliate_rpc::domain::ports::RpcInvoker;
use affiliate_rpc::{
    AffiliateProgramClient, AffiliateProgramMethod, DryRunInvoker, RpcError, ServiceRegistry,
};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::Mutex;

/// 模擬遠端 XML-RPC 端點：記錄收到的呼叫並回傳固定資料
#[derive(Clone, Default)]
struct MockInvoker {
    calls: Arc<Mutex<Vec<MethodCall>>>,
}

#[async_trait]
impl RpcInvoker for MockInvoker {
    async fn invoke(&self, call: MethodCall) -> affiliate_rpc::Result<Value> {
        let response = match call.method.as_str() {
            "getAffiliatePrograms" => json!([{"Id": 1, "Name": "Partners"}]),
            "getAffiliatesByProgram" => json!([{"AffiliateId": 10, "FirstName": "Ada"}]),
            _ => json!([]),
        };
        self.calls.lock().await.push(call);
        Ok(response)
    }
}

#[tokio::test]
async fn test_all_typed_methods_dispatch_through_invoker() -> Result<()> {
    let invoker = MockInvoker::default();
    let client = AffiliateProgramClient::new(invoker.clone());

    let programs = client.get_affiliate_programs("api-key").await?;
    assert_eq!(programs[0]["Name"], "Partners");

    let affiliates = client.get_affiliates_by_program(1).await?;
    assert_eq!(affiliates[0]["AffiliateId"], 10);

    client.get_programs_for_affiliate(10).await?;
    client.get_resources_for_affiliate_program(1).await?;

    let calls = invoker.calls.lock().await;
    let names: Vec<String> = calls.iter().map(|c| c.qualified_name()).collect();
    assert_eq!(
        names,
        vec![
            "AffiliateProgramService.getAffiliatePrograms",
            "AffiliateProgramService.getAffiliatesByProgram",
            "AffiliateProgramService.getProgramsForAffiliate",
            "AffiliateProgramService.getResourcesForAffiliateProgram",
        ]
    );
    assert_eq!(calls[2].params, vec![ParamValue::Int(10)]);
    Ok(())
}

#[tokio::test]
async fn test_generic_call_validates_arguments() -> Result<()> {
    let invoker = MockInvoker::default();
    let client = AffiliateProgramClient::new(invoker.clone());

    let result = client
        .call(
            AffiliateProgramMethod::GetAffiliatePrograms,
            vec![ParamValue::Int(42)],
        )
        .await;
    assert!(matches!(result, Err(RpcError::InvalidArgument { .. })));
    assert!(client.invoker().calls.lock().await.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_registry_resolution_feeds_dry_run() -> Result<()> {
    let registry = ServiceRegistry::with_defaults();
    let (decl, sig) = registry.resolve("AffiliateProgramService.getResourcesForAffiliateProgram")?;

    let call = bind_positional(decl, sig.name, vec![ParamValue::Int(77)])?;
    let plan = DryRunInvoker.invoke(call).await?;

    assert_eq!(
        plan,
        json!({
            "methodName": "AffiliateProgramService.getResourcesForAffiliateProgram",
            "params": [77],
        })
    );
    Ok(())
}

#[test]
fn test_unknown_method_via_registry() {
    let registry = ServiceRegistry::with_defaults();
    let result = registry.resolve("AffiliateProgramService.deleteAffiliate");
    assert!(matches!(result, Err(RpcError::UnknownMethod { .. })));
}
