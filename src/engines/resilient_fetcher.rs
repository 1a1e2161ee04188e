// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::engines::traits::{FetchEngine, FetchResponse};
use crate::utils::retry_policy::RetryPolicy;

/// 带重试的抓取器
///
/// 尽力而为：重试用尽后返回 `None`，从不向调用方抛出错误。
/// 每次调用都从头计算重试次数，没有跨请求的熔断
pub struct ResilientFetcher {
    engine: Arc<dyn FetchEngine>,
}

impl ResilientFetcher {
    pub fn new(engine: Arc<dyn FetchEngine>) -> Self {
        Self { engine }
    }

    /// 抓取URL，失败时按策略等待后重试
    ///
    /// # 参数
    ///
    /// * `url` - 目标URL
    /// * `policy` - 等待时间与最大尝试次数
    ///
    /// # 返回值
    ///
    /// 成功的响应；所有尝试都失败时返回 `None`
    pub async fn fetch(&self, url: &str, policy: &RetryPolicy) -> Option<FetchResponse> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.engine.fetch(url).await {
                Ok(response) => {
                    debug!(
                        "Fetched {} (HTTP {}, {} ms, attempt {})",
                        response.url, response.status_code, response.response_time_ms, attempt
                    );
                    return Some(response);
                }
                Err(e) => {
                    debug!(
                        "Fetch attempt {}/{} for {} failed: {}",
                        attempt,
                        policy.attempts(),
                        url,
                        e
                    );
                    if !policy.should_retry(attempt) {
                        warn!("Giving up on {} after {} attempts", url, attempt);
                        return None;
                    }
                    tokio::time::sleep(policy.calculate_backoff()).await;
                }
            }
        }
    }

    /// 抓取并解码为文本
    pub async fn fetch_text(&self, url: &str, policy: &RetryPolicy) -> Option<String> {
        self.fetch(url, policy).await.map(|response| response.text())
    }

    /// 抓取原始字节
    pub async fn fetch_bytes(&self, url: &str, policy: &RetryPolicy) -> Option<Vec<u8>> {
        self.fetch(url, policy).await.map(|response| response.body)
    }

    /// 底层引擎名称
    pub fn engine_name(&self) -> &'static str {
        self.engine.name()
    }
}
