// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含面向笔记批处理的用例
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含词源记录、笔记模型、缓存接口和词源编排服务
pub mod domain;

/// 引擎模块
///
/// 实现HTTP抓取引擎以及带抖动退避的重试抓取器
pub mod engines;

/// 基础设施模块
///
/// 提供外部集成：词源站点解析器、JSON缓存文件、媒体目录
pub mod infrastructure;

/// 工具模块
///
/// 提供汉字提取、重试策略、文本处理等通用功能
pub mod utils;
