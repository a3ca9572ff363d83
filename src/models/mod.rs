// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: geometry, hyperlinks and the hyperlink set.

pub mod geometry;
pub mod hyperlink;
pub mod link_set;
pub mod shared;
