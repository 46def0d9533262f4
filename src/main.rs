// src/main.rs

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dataset::{generate, Delimiter};
use models::HILL;

mod config;
mod dataset;
mod math;
mod models;

/// ジャンプ設定から軌道データファイルを生成する
#[derive(Parser, Debug)]
#[command(name = "skijump", version, about, long_about = None)]
struct Cli {
    /// ジャンプ設定ファイル（JSON、拡張子 .yaml/.yml なら YAML）
    input: PathBuf,

    /// サンプル点の出力先ファイル
    output: PathBuf,

    /// 点数
    #[arg(short = 'n', default_value_t = 10)]
    n: usize,

    /// 出力の列区切り
    #[arg(short = 'd', long, value_enum, default_value_t = Delimiter::Space)]
    delimiter: Delimiter,

    /// ログを詳しくする（-v で info、-vv で debug）。RUST_LOG が優先
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // 1列目が x、2列目が y
    match generate(&cli.input, &cli.output, &HILL, cli.n, cli.delimiter) {
        Ok(summary) => {
            tracing::debug!(landing = summary.landing, rows = summary.rows, "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
