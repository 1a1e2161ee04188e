// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 集成测试模块
///
/// 真实HTTP引擎与重试抓取器、JSON缓存文件的跨实例行为
pub mod json_cache_test;
pub mod resilient_fetch_test;
