// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 单元测试模块
///
/// 通过公开接口验证汉字提取与字段组装
pub mod kanji_test;
