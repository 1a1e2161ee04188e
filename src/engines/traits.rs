// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use async_trait::async_trait;
use thiserror::Error;

use crate::utils::text_encoding::decode_body;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败（连接、超时、读取响应体）
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 非2xx响应
    #[error("HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// 抓取响应
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// 最终URL
    pub url: String,
    /// HTTP状态码
    pub status_code: u16,
    /// 内容类型
    pub content_type: Option<String>,
    /// 响应体
    pub body: Vec<u8>,
    /// 响应时间（毫秒）
    pub response_time_ms: u64,
}

impl FetchResponse {
    /// 按声明或检测到的编码解码响应体
    pub fn text(&self) -> String {
        decode_body(&self.body, self.content_type.as_deref())
    }
}

/// 抓取引擎特质
///
/// 只负责一次GET；重试由 `ResilientFetcher` 处理
#[async_trait]
pub trait FetchEngine: Send + Sync {
    /// 执行一次GET，非2xx视为错误
    async fn fetch(&self, url: &str) -> Result<FetchResponse, EngineError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
