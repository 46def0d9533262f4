// src/dataset/writer.rs

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;

/// 出力テーブルの列区切り
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Delimiter {
    Space,
    Comma,
}

impl Delimiter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Space => " ",
            Delimiter::Comma => ",",
        }
    }
}

/// 値を `d.dddddddddddddddddde+XX` 形式に整形する
///
/// C の `%.18e` と同じ書式: 小数18桁、指数は符号付きで2桁以上
pub fn format_value(value: f64) -> String {
    let formatted = format!("{:.18e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => {
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exponent.abs())
            }
            Err(_) => formatted,
        },
        None => formatted,
    }
}

/// 出力1行分: x, y の順
pub fn create_row(x: f64, y: f64, delimiter: Delimiter) -> String {
    format!("{}{}{}\n", format_value(x), delimiter.as_str(), format_value(y))
}

/// サンプル順に全行を並べる
pub fn render_table(xs: &[f64], ys: &[f64], delimiter: Delimiter) -> String {
    xs.iter()
        .zip(ys.iter())
        .map(|(&x, &y)| create_row(x, y, delimiter))
        .collect()
}

/// 整形済みテーブルを `path` に書き込む（既存ファイルは上書き）
pub fn write_output(path: &Path, table: &str) -> Result<(), std::io::Error> {
    let output_file = File::create(path)?;
    let mut writer = BufWriter::new(output_file);
    writer.write_all(table.as_bytes())?;
    writer.flush()?;
    Ok(())
}
