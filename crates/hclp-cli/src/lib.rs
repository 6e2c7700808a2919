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

//! HCLP CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **validate**: check an HCL file for lexical and syntax errors
//! - **to-json**: project an HCL file onto JSON (compact or pretty)
//! - **fmt**: reformat an HCL file to the writer's canonical layout

pub mod cli;
pub mod commands;
