use crate::domain::model::{EnrichmentResult, Record};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// 原始城市資料 JSON
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn reference_overrides(&self) -> &[String];
    fn workers(&self) -> usize;
    /// 寫入 metadata.source 的來源標籤
    fn source_label(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn max_records(&self) -> Option<usize> {
        None
    }
    fn artifact_filename(&self) -> &str {
        "cities.json"
    }
    /// 設定時把所有輸出再打包成 ZIP
    fn bundle_filename(&self) -> Option<&str> {
        None
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Record>>;
    async fn transform(&self, data: Vec<Record>) -> Result<EnrichmentResult>;
    async fn load(&self, result: EnrichmentResult) -> Result<String>;
}
