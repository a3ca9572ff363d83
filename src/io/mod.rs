// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Encoding of hyperlink documents and their files.

pub mod codec;
pub mod legacy;
pub mod serialization;
