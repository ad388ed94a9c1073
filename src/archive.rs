//! 导出归档解压
//!
//! 把一个 zip 归档解压到目标目录，并按归档中的顺序返回文件条目名称。
//! 目录条目只被创建，不出现在返回的列表中。

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use tracing::info;
use zip::ZipArchive;

use crate::translation::error::{PrepError, PrepResult};

/// 解压归档，返回文件条目名称（相对于 `extract_dir`）
pub fn extract_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    extract_dir: Q,
) -> PrepResult<Vec<String>> {
    let archive_path = archive_path.as_ref();
    let extract_dir = extract_dir.as_ref();

    let file =
        File::open(archive_path).map_err(|e| PrepError::source_io(archive_path.display(), e))?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;

    let mut file_names = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let entry = archive.by_index(i)?;
        if entry.is_file() {
            file_names.push(entry.name().to_string());
        }
    }

    fs::create_dir_all(extract_dir)?;
    archive.extract(extract_dir)?;

    info!(
        "已解压 {} 个条目，文件名数量 = {}",
        archive.len(),
        file_names.len()
    );

    Ok(file_names)
}
