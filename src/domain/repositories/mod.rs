// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 定义持久化抽象：词源缓存与媒体目录
pub mod etymology_cache_repository;
pub mod media_repository;
