// HCLP - HashiCorp Configuration Language parser for Rust
//
// Copyright (c) 2025 the HCLP contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! HCL text serialization.
//!
//! Renders a parsed [`hclp_core::Document`] back to HCL source text. The
//! output is syntactically valid and projects to the same map as the
//! original input; comments and exact original spacing are not preserved.

mod config;
mod writer;

pub use config::{IndentStyle, WriteConfig};
pub use writer::{to_hcl, to_hcl_with_config};
