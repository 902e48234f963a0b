// src/args.rs
use clap::Parser;

use crate::VERSION;

/// 対話的に範囲内の重複しない整数を集める
///
/// All input arrives interactively on stdin; the command takes no options
/// beyond `--help` and `--version`.
#[derive(Parser, Debug, Default)]
#[command(
    name = "unique_collector",
    version = VERSION,
    about = "範囲内の重複しない整数を対話的に収集するツール",
    long_about = "Reads a capacity, then that many unique integers between 1 and 100, \
                  re-prompting on invalid input, and prints the accepted values."
)]
pub struct Args {}
