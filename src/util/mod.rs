// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometry algorithms: canvas mapping, hit testing and interpolation.

pub mod canvas;
pub mod hit_test;
pub mod interpolation;
