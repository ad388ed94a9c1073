//! gzip 压缩的 CSV 输出
//!
//! 表头在创建时写入且只写一次，之后每一行都以换行符为前缀追加，
//! `finish` 结束压缩流并交回底层写入器。

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;

/// 默认压缩级别
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// 行终止符
pub const LINE_TERMINATOR: &str = "\n";

/// 追加式压缩 CSV 构建器
pub struct GzipCsvBuilder<W: Write> {
    encoder: GzEncoder<W>,
    lines_written: usize,
}

impl<W: Write> GzipCsvBuilder<W> {
    /// 创建构建器并写入共享表头
    pub fn new(writer: W, header: &str, level: u32) -> io::Result<Self> {
        let mut encoder = GzEncoder::new(writer, Compression::new(level));
        encoder.write_all(header.as_bytes())?;

        Ok(Self {
            encoder,
            lines_written: 0,
        })
    }

    /// 原样追加一行（前置换行符）
    pub fn append_line(&mut self, line: &str) -> io::Result<()> {
        self.encoder.write_all(LINE_TERMINATOR.as_bytes())?;
        self.encoder.write_all(line.as_bytes())?;
        self.lines_written += 1;
        Ok(())
    }

    /// 已追加的数据行数（不含表头）
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// 结束压缩流
    pub fn finish(self) -> io::Result<W> {
        let mut writer = self.encoder.finish()?;
        writer.flush()?;
        Ok(writer)
    }
}

/// 在磁盘上创建输出文件
pub fn create_file_sink<P: AsRef<Path>>(path: P) -> io::Result<BufWriter<File>> {
    File::create(path).map(BufWriter::new)
}
