// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Plan shape, naming and cross-reference properties over generated
//! cluster models.

mod plan_properties;
