// src/dataset/generate.rs

use std::path::Path;

use tracing::info;

use crate::dataset::error::GenerateError;
use crate::dataset::load_parameters::load_jump_parameters;
use crate::dataset::writer::{render_table, write_output, Delimiter};
use crate::models::Hill;

/// データセット生成の結果
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateSummary {
    pub landing: f64,
    pub rows: usize,
}

/// データセットを1つ生成する: 設定 -> 軌道 -> サンプル -> 出力ファイル
///
/// # 引数
/// - `input`: ジャンプ設定（JSON または YAML）
/// - `output`: 出力先のテキストファイル
/// - `hill`: 着地面
/// - `n`: 点数
/// - `delimiter`: 出力の列区切り
///
/// # 戻り値
/// - 着地点と書き込んだ行数
///
/// 出力ファイルは全ての計算が終わってから作成する。失敗時はファイルを残さない。
pub fn generate(
    input: &Path,
    output: &Path,
    hill: &Hill,
    n: usize,
    delimiter: Delimiter,
) -> Result<GenerateSummary, GenerateError> {
    let params = load_jump_parameters(input)?;
    info!(v0 = params.v0, alpha = params.alpha, "loaded jump configuration");

    let jump = params.into_ski_jump()?;
    let landing = jump.landing(hill)?;
    let (xs, ys) = jump.sample_until(landing, n)?;
    info!(landing, points = xs.len(), "sampled trajectory");

    let table = render_table(&xs, &ys, delimiter);
    write_output(output, &table).map_err(|source| GenerateError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    info!(path = %output.display(), rows = xs.len(), "wrote dataset");

    Ok(GenerateSummary {
        landing,
        rows: xs.len(),
    })
}
