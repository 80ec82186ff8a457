use crate::core::affiliate_program::{AffiliateProgramMethod, AFFILIATE_PROGRAM_SERVICE};
use crate::core::call::bind_positional;
use crate::domain::model::ParamValue;
use crate::domain::ports::RpcInvoker;
use crate::utils::error::Result;
use serde_json::Value;

/// Affiliate Program 服務的型別化呼叫介面，實際送出交給 `RpcInvoker`
pub struct AffiliateProgramClient<I: RpcInvoker> {
    invoker: I,
}

impl<I: RpcInvoker> AffiliateProgramClient<I> {
    pub fn new(invoker: I) -> Self {
        Self { invoker }
    }

    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    pub async fn call(&self, method: AffiliateProgramMethod, args: Vec<ParamValue>) -> Result<Value> {
        let call = bind_positional(&AFFILIATE_PROGRAM_SERVICE, method.name(), args)?;
        tracing::debug!("📡 Invoking {}", call.qualified_name());
        self.invoker.invoke(call).await
    }

    pub async fn get_affiliates_by_program(&self, program_id: i64) -> Result<Value> {
        self.call(
            AffiliateProgramMethod::GetAffiliatesByProgram,
            vec![ParamValue::Int(program_id)],
        )
        .await
    }

    pub async fn get_programs_for_affiliate(&self, affiliate_id: i64) -> Result<Value> {
        self.call(
            AffiliateProgramMethod::GetProgramsForAffiliate,
            vec![ParamValue::Int(affiliate_id)],
        )
        .await
    }

    pub async fn get_affiliate_programs(&self, api_key: &str) -> Result<Value> {
        self.call(
            AffiliateProgramMethod::GetAffiliatePrograms,
            vec![ParamValue::from(api_key)],
        )
        .await
    }

    pub async fn get_resources_for_affiliate_program(&self, program_id: i64) -> Result<Value> {
        self.call(
            AffiliateProgramMethod::GetResourcesForAffiliateProgram,
            vec![ParamValue::Int(program_id)],
        )
        .await
    }
}
