// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations: state storage, set fetching and inventory export.

pub mod fetcher;
pub mod serialization;
pub mod storage;
