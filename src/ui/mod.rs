// SPDX-License-Identifier: MPL-2.0
//! UI components and visual building blocks.

pub mod dashboard;
pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod theming;
