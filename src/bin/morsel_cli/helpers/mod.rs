// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Labs
// ABOUTME: Re-exports helper modules for morsel-cli
// ABOUTME: Provides access to report display formatting utilities

pub mod display;
