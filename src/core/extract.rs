//! Document text extraction (the one I/O-bound step of the pipeline).
//!
//! The engine only needs a flat string per document with line structure
//! preserved. Text dumps are read as-is; anything else goes through an
//! external converter configured by `extract_command`.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Placeholder replaced by the document path in `extract_command`.
pub const FILE_PLACEHOLDER: &str = "{file}";

const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub trait TextExtractor: Sync {
    fn extract_text(&self, path: &Path) -> AppResult<String>;
}

/// Reads an already-extracted UTF-8 text file.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, path: &Path) -> AppResult<String> {
        let bytes = std::fs::read(path)
            .map_err(|e| AppError::extraction(path.display().to_string(), e.to_string()))?;

        String::from_utf8(bytes).map_err(|_| {
            AppError::extraction(path.display().to_string(), "file is not valid UTF-8 text")
        })
    }
}

/// Runs an external converter (e.g. `pdftotext -layout {file} -`) and
/// captures its stdout. The process is killed once `timeout` elapses.
pub struct CommandExtractor {
    pub command: String,
    pub timeout: Duration,
}

impl CommandExtractor {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            command: cfg.extract_command.clone(),
            timeout: Duration::from_secs(cfg.extract_timeout_secs),
        }
    }

    fn argv(&self, path: &Path) -> Vec<String> {
        let file = path.to_string_lossy();
        let mut argv: Vec<String> = self
            .command
            .split_whitespace()
            .map(|part| part.replace(FILE_PLACEHOLDER, &file))
            .collect();

        if !self.command.contains(FILE_PLACEHOLDER) {
            argv.push(file.to_string());
        }
        argv
    }
}

impl TextExtractor for CommandExtractor {
    fn extract_text(&self, path: &Path) -> AppResult<String> {
        let file = path.display().to_string();

        if !path.exists() {
            return Err(AppError::extraction(file, "file not found"));
        }

        let argv = self.argv(path);
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| AppError::Config("extract_command is empty".into()))?;

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| AppError::extraction(&file, format!("cannot run '{program}': {e}")))?;

        // Drain the pipes on their own threads so a large document cannot
        // block the child while we poll for the deadline.
        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| AppError::extraction(&file, "stdout not captured"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| AppError::extraction(&file, "stderr not captured"))?;

        let out_reader = thread::spawn(move || {
            let mut buf = Vec::new();
            stdout.read_to_end(&mut buf).map(|_| buf)
        });
        let err_reader = thread::spawn(move || {
            let mut buf = String::new();
            let _ = stderr.read_to_string(&mut buf);
            buf
        });

        let started = Instant::now();
        let status = loop {
            let polled = child
                .try_wait()
                .map_err(|e| AppError::extraction(&file, e.to_string()))?;
            if let Some(status) = polled {
                break status;
            }
            if started.elapsed() >= self.timeout {
                let _ = child.kill();
                let _ = child.wait();
                return Err(AppError::extraction(
                    file,
                    format!("timed out after {}s", self.timeout.as_secs()),
                ));
            }
            thread::sleep(POLL_INTERVAL);
        };

        let out = out_reader
            .join()
            .map_err(|_| AppError::extraction(&file, "stdout reader panicked"))?
            .map_err(|e| AppError::extraction(&file, e.to_string()))?;
        let err_text = err_reader.join().unwrap_or_default();

        if !status.success() {
            let detail = err_text.trim();
            let reason = if detail.is_empty() {
                format!("'{program}' exited with {status}")
            } else {
                format!("'{program}' exited with {status}: {detail}")
            };
            return Err(AppError::extraction(file, reason));
        }

        String::from_utf8(out)
            .map_err(|_| AppError::extraction(file, "converter output is not valid UTF-8"))
    }
}

/// `.txt` → plain reader, everything else → configured command.
pub struct AutoExtractor {
    pub plain: PlainTextExtractor,
    pub command: CommandExtractor,
}

impl AutoExtractor {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            plain: PlainTextExtractor,
            command: CommandExtractor::from_config(cfg),
        }
    }
}

impl TextExtractor for AutoExtractor {
    fn extract_text(&self, path: &Path) -> AppResult<String> {
        let is_text = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("txt"))
            .unwrap_or(false);

        if is_text {
            self.plain.extract_text(path)
        } else {
            self.command.extract_text(path)
        }
    }
}
