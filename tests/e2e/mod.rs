// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 端到端测试模块
///
/// 从笔记字段到缓存文件与媒体目录的完整流程
pub mod dong_chinese_pipeline_test;
pub mod helpers;
pub mod okjiten_pipeline_test;
