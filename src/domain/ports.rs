use crate::domain::model::MethodCall;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 通用 XML-RPC 客戶端的接口。傳輸、序列化與認證都由實作方負責，
/// 回傳值保持原樣，不做物件映射
#[async_trait]
pub trait RpcInvoker: Send + Sync {
    async fn invoke(&self, call: MethodCall) -> Result<serde_json::Value>;
}
