// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 包含领域接口的具体实现：
/// - 缓存（cache）：JSON文件缓存与内存缓存
/// - 词源来源（sources）：dong-chinese、okjiten与tangorin的页面解析
/// - 存储（storage）：媒体目录中的图片文件
pub mod cache;
pub mod sources;
pub mod storage;
