// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

/// 重试策略配置
///
/// 每次失败后等待 `base_delay ± jitter`（下限为0），最多尝试 `max_retries` 次
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// 最大尝试次数
    pub max_retries: u32,
    /// 基础等待时间
    pub base_delay: Duration,
    /// 抖动幅度
    pub jitter: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::page()
    }
}

impl RetryPolicy {
    /// 页面抓取策略（okjiten、tangorin）
    pub fn page() -> Self {
        Self {
            max_retries: 10,
            base_delay: Duration::from_millis(80),
            jitter: Duration::from_millis(20),
        }
    }

    /// dong-chinese字典页策略（更短的等待）
    pub fn dictionary() -> Self {
        Self {
            base_delay: Duration::from_millis(50),
            ..Self::page()
        }
    }

    /// 图片下载策略
    pub fn image() -> Self {
        Self {
            base_delay: Duration::from_millis(100),
            ..Self::page()
        }
    }

    /// 不等待的策略，仅用于测试
    pub fn immediate(max_retries: u32) -> Self {
        Self {
            max_retries,
            base_delay: Duration::ZERO,
            jitter: Duration::ZERO,
        }
    }

    /// 实际尝试次数，至少为1
    pub fn attempts(&self) -> u32 {
        self.max_retries.max(1)
    }

    /// 计算下次重试前的等待时间
    ///
    /// 在 `[base_delay - jitter, base_delay + jitter]` 内均匀取值，负数截断为0
    pub fn calculate_backoff(&self) -> Duration {
        let base = self.base_delay.as_secs_f64();
        let jitter = self.jitter.as_secs_f64();

        let low = (base - jitter).max(0.0);
        let high = (base + jitter).max(0.0);

        let secs = if high > low {
            rand::random_range(low..=high)
        } else {
            low
        };

        Duration::from_secs_f64(secs)
    }

    /// 第 `attempt` 次（从1开始）失败后是否还应重试
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.attempts()
    }
}
