// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：词源记录与笔记
/// - 仓库接口（repositories）：缓存与媒体目录的抽象
/// - 服务（services）：词源编排
/// - 词源来源（sources）：站点解析器的统一接口
///
/// 领域层不依赖具体的站点或存储实现
pub mod models;
pub mod repositories;
pub mod services;
pub mod sources;
