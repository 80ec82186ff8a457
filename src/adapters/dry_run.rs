use crate::domain::model::MethodCall;
use crate::domain::ports::RpcInvoker;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::{json, Value};

/// 不送出任何請求，只回傳呼叫計畫
#[derive(Debug, Clone, Default)]
pub struct DryRunInvoker;

#[async_trait]
impl RpcInvoker for DryRunInvoker {
    async fn invoke(&self, call: MethodCall) -> Result<Value> {
        tracing::info!("🧪 Dry run: {} ({} params)", call.qualified_name(), call.params.len());
        Ok(json!({
            "methodName": call.qualified_name(),
            "params": serde_json::to_value(&call.params)?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ParamValue;

    #[tokio::test]
    async fn test_dry_run_echoes_call() {
        let call = MethodCall {
            service: "AffiliateProgramService".to_string(),
            method: "getAffiliatesByProgram".to_string(),
            params: vec![ParamValue::Int(4)],
        };

        let plan = DryRunInvoker.invoke(call).await.unwrap();
        assert_eq!(plan["methodName"], "AffiliateProgramService.getAffiliatesByProgram");
        assert_eq!(plan["params"], json!([4]));
    }
}
