// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 词源站点解析器
//!
//! 每个站点一个页面模型，解析步骤返回 `Option`，缺失即留空

pub mod dong_chinese;
pub mod factory;
pub mod okjiten;
pub mod tangorin;
