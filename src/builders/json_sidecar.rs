//! 去重文本的 JSON 输出

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::translation::error::{PrepError, PrepResult};

/// 将去重文本写为 JSON 数组
pub fn write_unique_texts<P: AsRef<Path>>(path: P, texts: &[String]) -> PrepResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| PrepError::sink_io(path.display(), e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, texts)?;
    writer
        .flush()
        .map_err(|e| PrepError::sink_io(path.display(), e))?;

    Ok(())
}
