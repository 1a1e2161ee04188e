// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::engines::traits::{EngineError, FetchEngine, FetchResponse};

/// 固定路由的内存引擎，未登记的URL返回404
#[derive(Default)]
pub struct StubEngine {
    routes: HashMap<String, Vec<u8>>,
    calls: Mutex<Vec<String>>,
}

impl StubEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.routes.insert(url.to_string(), body.into());
        self
    }

    /// 所有请求过的URL（按顺序）
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }
}

#[async_trait]
impl FetchEngine for StubEngine {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, EngineError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(url.to_string());
        }
        match self.routes.get(url) {
            Some(body) => Ok(FetchResponse {
                url: url.to_string(),
                status_code: 200,
                content_type: Some("text/html; charset=utf-8".to_string()),
                body: body.clone(),
                response_time_ms: 0,
            }),
            None => Err(EngineError::HttpStatus {
                status: 404,
                url: url.to_string(),
            }),
        }
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}
