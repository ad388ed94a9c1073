use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use encoding_rs::{Encoding, UTF_8};
use tracing::{debug, info, warn};

use crate::builders::{create_file_sink, write_unique_texts};
use crate::parsers::record::trim_line_ending;
use crate::routing::namespace::{check_catalog, NamespaceRule};
use crate::routing::router::{NamespaceRouter, RouteOutcome};
use crate::translation::config::{constants, expand_path, PrepConfig};
use crate::translation::error::{PrepError, PrepResult};

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";

/// Options controlling a single preparation run
///
/// Built from [`PrepConfig`] with paths already tilde-expanded.
#[derive(Clone, Debug)]
pub struct PrepOptions {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub namespaces: Vec<NamespaceRule>,
    pub source_encoding: String,
    pub compression_level: u32,
    pub skip_header_in_every_file: bool,
}

impl From<&PrepConfig> for PrepOptions {
    fn from(config: &PrepConfig) -> Self {
        PrepOptions {
            source_dir: expand_path(&config.pipeline.source_dir),
            output_dir: expand_path(&config.pipeline.output_dir),
            namespaces: config.namespaces.clone(),
            source_encoding: config.pipeline.source_encoding.clone(),
            compression_level: config.pipeline.compression_level,
            skip_header_in_every_file: config.pipeline.skip_header_in_every_file,
        }
    }
}

impl Default for PrepOptions {
    fn default() -> Self {
        PrepOptions::from(&PrepConfig::default())
    }
}

/// Result of a preparation run
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The list of source files was empty, nothing was written
    NothingToDo,
    Completed(RunReport),
}

impl RunOutcome {
    /// Paths of every produced artifact (empty when there was nothing to do)
    pub fn artifacts(&self) -> &[PathBuf] {
        match self {
            RunOutcome::NothingToDo => &[],
            RunOutcome::Completed(report) => &report.artifacts,
        }
    }
}

/// Per-namespace part of a [`RunReport`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespaceSummary {
    pub name: String,
    pub matched_lines: usize,
    pub unique_texts: usize,
    pub csv_path: PathBuf,
    pub json_path: PathBuf,
}

/// Summary of a completed run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub source_entries: usize,
    pub lines_read: usize,
    pub lines_skipped: usize,
    pub lines_routed: usize,
    pub namespaces: Vec<NamespaceSummary>,
    pub artifacts: Vec<PathBuf>,
    pub started_at: String,
    pub finished_at: String,
}

impl RunReport {
    pub fn namespace(&self, name: &str) -> Option<&NamespaceSummary> {
        self.namespaces.iter().find(|summary| summary.name == name)
    }
}

/// Path of the compressed CSV produced for a namespace
pub fn csv_artifact_path(output_dir: &Path, namespace: &str) -> PathBuf {
    output_dir.join(format!("{}.{}", namespace, constants::CSV_EXTENSION))
}

/// Path of the deduplicated text sidecar produced for a namespace
pub fn json_artifact_path(output_dir: &Path, namespace: &str) -> PathBuf {
    output_dir.join(format!(
        "{}{}.{}",
        namespace,
        constants::UNIQUE_SUFFIX,
        constants::JSON_EXTENSION
    ))
}

/// Line-by-line reader over one source file
struct SourceLines {
    path: String,
    reader: BufReader<File>,
    encoding: &'static Encoding,
    buf: Vec<u8>,
    at_start: bool,
}

impl SourceLines {
    fn open(path: &Path, encoding: &'static Encoding) -> PrepResult<Self> {
        let file = File::open(path).map_err(|e| PrepError::source_io(path.display(), e))?;

        Ok(SourceLines {
            path: path.display().to_string(),
            reader: BufReader::new(file),
            encoding,
            buf: Vec::new(),
            at_start: true,
        })
    }

    /// Returns the next line without its terminator, or `None` at end of file
    fn next_line(&mut self) -> PrepResult<Option<String>> {
        self.buf.clear();

        let read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(|e| PrepError::source_io(&self.path, e))?;

        if read == 0 {
            return Ok(None);
        }

        // BOM 只可能出现在文件开头
        let (decoded, had_errors) = if self.at_start {
            self.at_start = false;
            self.encoding.decode_with_bom_removal(&self.buf)
        } else {
            self.encoding.decode_without_bom_handling(&self.buf)
        };
        if had_errors {
            debug!("{} 中存在无法解码的字节", self.path);
        }

        Ok(Some(trim_line_ending(&decoded).to_string()))
    }
}

fn resolve_encoding(label: &str) -> &'static Encoding {
    Encoding::for_label(label.as_bytes()).unwrap_or_else(|| {
        warn!("未知的源文件编码 {}，按 UTF-8 处理", label);
        UTF_8
    })
}

/// Splits the given source files into per-namespace datasets
///
/// Every source file is read exactly once, in the given order. The first line
/// of the first file becomes the shared header of every namespace output.
/// For each namespace a gzip-compressed CSV and a JSON array of deduplicated
/// texts are written to `options.output_dir`.
///
/// # Arguments
///
/// * `options` - Paths, encoding, compression and the namespace catalog
/// * `source_file_names` - File names relative to `options.source_dir`
///
/// # Returns
///
/// [`RunOutcome::NothingToDo`] for an empty list, otherwise a report listing
/// the produced artifacts. I/O failures on sources or outputs abort the run.
pub fn prepare_csvs<S: AsRef<str>>(
    options: &PrepOptions,
    source_file_names: &[S],
) -> PrepResult<RunOutcome> {
    if source_file_names.is_empty() {
        info!("没有需要处理的源文件");
        return Ok(RunOutcome::NothingToDo);
    }

    check_catalog(&options.namespaces).map_err(PrepError::InvalidInput)?;

    let started_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let encoding = resolve_encoding(&options.source_encoding);

    info!(
        "开始处理 {} 个源文件，命名空间 {} 个",
        source_file_names.len(),
        options.namespaces.len()
    );

    fs::create_dir_all(&options.output_dir)
        .map_err(|e| PrepError::sink_io(options.output_dir.display(), e))?;

    let source_paths: Vec<PathBuf> = source_file_names
        .iter()
        .map(|name| options.source_dir.join(name.as_ref()))
        .collect();

    // 第一个文件的首行即共享表头
    let mut first_source = SourceLines::open(&source_paths[0], encoding)?;
    let header = first_source.next_line()?.unwrap_or_default();
    debug!("共享表头: {}", header);

    let mut router = NamespaceRouter::new(
        &options.namespaces,
        &header,
        options.compression_level,
        |rule| create_file_sink(csv_artifact_path(&options.output_dir, &rule.name)),
    )?;
    debug!("已创建输出: {}", router.namespace_names().join(", "));

    let mut lines_read = 0;
    let mut lines_skipped = 0;
    let mut lines_routed = 0;
    let mut pending_first = Some(first_source);

    for (index, path) in source_paths.iter().enumerate() {
        let mut source = match pending_first.take() {
            Some(source) => source,
            None => {
                let mut source = SourceLines::open(path, encoding)?;
                if options.skip_header_in_every_file {
                    source.next_line()?;
                }
                source
            }
        };

        info!("处理源文件 {}/{}: {}", index + 1, source_paths.len(), path.display());
        let mut file_lines = 0;

        while let Some(line) = source.next_line()? {
            file_lines += 1;

            match router.route(&line)? {
                RouteOutcome::Skipped => lines_skipped += 1,
                RouteOutcome::Routed(0) => {}
                RouteOutcome::Routed(_) => lines_routed += 1,
            }
        }

        lines_read += file_lines;
        debug!("源文件 {} 完成: {} 行", path.display(), file_lines);
    }

    let filter_stats = router.filter_stats().clone();
    let finished = router.finish()?;

    let mut namespaces = Vec::with_capacity(finished.len());
    let mut artifacts = Vec::with_capacity(finished.len() * 2);

    for namespace in finished {
        let csv_path = csv_artifact_path(&options.output_dir, &namespace.name);
        let json_path = json_artifact_path(&options.output_dir, &namespace.name);

        write_unique_texts(&json_path, &namespace.unique_texts)?;

        debug!(
            "命名空间 {}: {} 行, {} 条唯一文本",
            namespace.name,
            namespace.matched_lines,
            namespace.unique_texts.len()
        );

        artifacts.push(csv_path.clone());
        artifacts.push(json_path.clone());
        namespaces.push(NamespaceSummary {
            name: namespace.name,
            matched_lines: namespace.matched_lines,
            unique_texts: namespace.unique_texts.len(),
            csv_path,
            json_path,
        });
    }

    info!(
        "处理完成: 读取 {} 行, 跳过 {} 行, 路由 {} 行, 过滤文本 {} 条",
        lines_read, lines_skipped, lines_routed, filter_stats.filtered_out
    );

    Ok(RunOutcome::Completed(RunReport {
        source_entries: source_file_names.len(),
        lines_read,
        lines_skipped,
        lines_routed,
        namespaces,
        artifacts,
        started_at,
        finished_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    }))
}

/// Prints an error message to stderr
pub fn print_error_message(msg: &str) {
    eprintln!("{ANSI_COLOR_RED}{msg}{ANSI_COLOR_RESET}");
}

/// Prints an info message to stdout
pub fn print_info_message(msg: &str) {
    println!("{msg}");
}
