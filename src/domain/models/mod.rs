// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 词源记录（etymology）：单个汉字的释义、词源说明和图片信息
/// - 笔记（note）：宿主程序中的抽认卡笔记及批处理结果
pub mod etymology;
pub mod note;
