// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// - 批量生成词源字段（generate_etymology_fields）
pub mod generate_etymology_fields;
