// 集成测试公共模块
//
// 提供临时工作目录、源数据生成和输出读取工具

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use translation_prep::core::{csv_artifact_path, json_artifact_path, PrepOptions};
use translation_prep::routing::NamespaceRule;

/// 测试用共享表头
pub const HEADER: &str = "type,id,field,language,version,updatedAt,defaultContent";

/// 带源目录和输出目录的临时工作区
pub struct TestWorkspace {
    pub dir: TempDir,
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("创建临时目录失败");
        let source_dir = dir.path().join("source");
        let output_dir = dir.path().join("out");
        fs::create_dir_all(&source_dir).expect("创建源目录失败");

        Self {
            dir,
            source_dir,
            output_dir,
        }
    }

    /// 写入一个源文件（首行为表头）
    pub fn write_source(&self, name: &str, lines: &[&str]) -> PathBuf {
        let mut content = String::from(HEADER);
        for line in lines {
            content.push('\n');
            content.push_str(line);
        }
        content.push('\n');
        self.write_raw(name, content.as_bytes())
    }

    /// 原样写入字节
    pub fn write_raw(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.source_dir.join(name);
        let mut file = File::create(&path).expect("创建源文件失败");
        file.write_all(bytes).expect("写入源文件失败");
        path
    }

    /// 默认目录的运行选项
    pub fn options(&self) -> PrepOptions {
        PrepOptions {
            source_dir: self.source_dir.clone(),
            output_dir: self.output_dir.clone(),
            ..PrepOptions::default()
        }
    }

    /// 使用自定义命名空间的运行选项
    pub fn options_with(&self, namespaces: Vec<NamespaceRule>) -> PrepOptions {
        PrepOptions {
            namespaces,
            ..self.options()
        }
    }

    /// 解压后的命名空间 CSV 内容
    pub fn read_csv(&self, namespace: &str) -> String {
        OutputHelper::read_gz(&csv_artifact_path(&self.output_dir, namespace))
    }

    /// 命名空间的去重文本
    pub fn read_unique(&self, namespace: &str) -> Vec<String> {
        OutputHelper::read_json(&json_artifact_path(&self.output_dir, namespace))
    }
}

/// 输出读取工具
pub struct OutputHelper;

impl OutputHelper {
    pub fn read_gz(path: &Path) -> String {
        let file = File::open(path).expect("打开压缩输出失败");
        let mut decoder = GzDecoder::new(file);
        let mut out = String::new();
        decoder.read_to_string(&mut out).expect("解压失败");
        out
    }

    pub fn read_json(path: &Path) -> Vec<String> {
        let content = fs::read_to_string(path).expect("读取JSON失败");
        serde_json::from_str(&content).expect("JSON格式错误")
    }
}

/// 源数据行生成
pub struct TestDataGenerator;

impl TestDataGenerator {
    pub fn line(record_type: &str, id: &str, field: &str, content: &str) -> String {
        format!("{},{},{},de-DE,1,2024-01-01,{}", record_type, id, field, content)
    }

    /// 期望的 CSV 输出：表头加上按顺序追加的行
    pub fn expected_csv(lines: &[&str]) -> String {
        let mut out = String::from(HEADER);
        for line in lines {
            out.push('\n');
            out.push_str(line);
        }
        out
    }
}

/// 测试归档构建
pub struct ArchiveHelper;

impl ArchiveHelper {
    /// 按给定顺序写入 zip 条目，名称以 `/` 结尾的是目录
    pub fn build_zip(path: &Path, entries: &[(&str, &str)]) {
        let file = File::create(path).expect("创建归档失败");
        let mut writer = ZipWriter::new(file);
        let options = SimpleFileOptions::default();

        for (name, content) in entries {
            if name.ends_with('/') {
                writer.add_directory(*name, options).expect("写入目录条目失败");
            } else {
                writer.start_file(*name, options).expect("写入文件条目失败");
                writer.write_all(content.as_bytes()).expect("写入条目内容失败");
            }
        }

        writer.finish().expect("完成归档失败");
    }
}
