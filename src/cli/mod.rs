// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the quarto command-line interface.
//!
//! Three subcommands: `serve` runs the HTTP search service, `search` answers a
//! single query in the terminal, and `inspect` lists the works found in a
//! corpus file. All three load and index the corpus the same way.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub const DEFAULT_CORPUS: &str = "completeworks.txt";

#[derive(Parser)]
#[command(
    name = "quarto",
    about = "Substring and phrase search over the complete works",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve `GET /search?q=...` and the static front end
    Serve {
        /// Corpus file to load at startup
        #[arg(short, long, default_value = DEFAULT_CORPUS)]
        corpus: PathBuf,

        /// Directory of static assets served for every other path
        #[arg(long, default_value = "static")]
        static_dir: PathBuf,

        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value = "3001")]
        port: u16,
    },

    /// Run one query and print the matching fragments
    Search {
        /// Query: words, or "quoted phrases"
        query: String,

        /// Corpus file to load
        #[arg(short, long, default_value = DEFAULT_CORPUS)]
        corpus: PathBuf,

        /// Print results as JSON, exactly as the HTTP endpoint returns them
        #[arg(long)]
        json: bool,
    },

    /// List the works found in a corpus file
    Inspect {
        /// Corpus file to load
        #[arg(short, long, default_value = DEFAULT_CORPUS)]
        corpus: PathBuf,
    },
}
