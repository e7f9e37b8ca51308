// Copyright 2025 Bookshelf Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Bookshelf CLI
//!
//! Command-line client for the bookshelf catalog service.
//!
//! One process invocation performs one catalog operation: the first
//! positional argument selects a command from the static [`commands`]
//! table, the remaining arguments go to that command's handler verbatim,
//! and the handler opens one connection, performs one remote call, and
//! renders the result to stdout as indented JSON.
//!
//! ## Commands
//!
//! - `bookshelf get <id>`: retrieve one book
//! - `bookshelf list`: list the catalog
//! - `bookshelf insert <id> <title> <author>`: insert a book
//! - `bookshelf delete <id>`: delete a book
//! - `bookshelf watch`: stream inserted books until the server closes
//!
//! Every failure (bad arguments, refused connection, remote error, a
//! broken watch stream) is terminal: it bubbles to `main`, gets printed,
//! and the process exits non-zero.

pub mod commands;
pub mod output;
