// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 词源服务（etymology_service）：缓存、词源来源与图片下载的编排
pub mod etymology_service;
