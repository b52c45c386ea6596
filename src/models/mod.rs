// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Inventory data model.

pub mod inventory;
pub mod lego_set;
pub mod part;
