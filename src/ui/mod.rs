// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the PartMaster application.

pub mod collection;
pub mod search_bar;
pub mod set_detail;
