use crate::error::ConvertError;
use crate::models::SourcePage;
use crate::page::generate_page_html;
use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid directory: {0}")]
    InvalidDirectory(PathBuf),
    #[error("Path is not under the content directory: {0}")]
    InvalidPath(PathBuf),
    #[error("Failed to convert {path}: {source}")]
    Convert {
        path: PathBuf,
        source: ConvertError,
    },
}

/// The four locations a site build reads from and writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub public_dir: PathBuf,
    pub template: PathBuf,
}

/// Outcome of a build: what was written and which documents failed
#[derive(Debug, Default)]
pub struct BuildReport {
    pub assets: Vec<PathBuf>,
    pub pages: Vec<PathBuf>,
    pub failures: Vec<IoError>,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Read a file relative to `root` and return its content
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a file relative to `root`, creating parent directories
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    write_path(&relative_path.to_path(root), content)
}

/// Scan for markdown files under `root`, sorted
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_dir(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == SourcePage::SOURCE_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::InvalidDirectory(path.to_path_buf()));
    }

    Ok(())
}

/// Remove every file and sub-directory inside `dir`, keeping `dir` itself
pub fn clear_directory(dir: &Path) -> Result<(), IoError> {
    validate_dir(dir)?;

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
        log::debug!("Deleted {}", path.display());
    }

    Ok(())
}

/// Copy the tree under `src` into `dst`, returning the copied files
pub fn copy_directory(src: &Path, dst: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_dir(src)?;

    let mut copied = Vec::new();
    copy_directory_recursive(src, dst, &mut copied)?;
    copied.sort();
    Ok(copied)
}

fn copy_directory_recursive(
    src: &Path,
    dst: &Path,
    copied: &mut Vec<PathBuf>,
) -> Result<(), IoError> {
    fs::create_dir_all(dst)?;

    for entry in fs::read_dir(src)? {
        let from = entry?.path();
        let Some(name) = from.file_name() else {
            continue;
        };
        let to = dst.join(name);

        if from.is_dir() {
            copy_directory_recursive(&from, &to, copied)?;
        } else {
            fs::copy(&from, &to)?;
            log::debug!("Copied {} -> {}", from.display(), to.display());
            copied.push(to);
        }
    }

    Ok(())
}

/// Render one markdown file through `template_path` into `dest`
pub fn generate_page(from: &Path, template_path: &Path, dest: &Path) -> Result<(), IoError> {
    let template = read_path(template_path)?;
    render_to(from, &template, dest)
}

fn render_to(from: &Path, template: &str, dest: &Path) -> Result<(), IoError> {
    log::info!("Generating page {} -> {}", from.display(), dest.display());

    let markdown = read_path(from)?;
    let html = generate_page_html(&markdown, template).map_err(|source| IoError::Convert {
        path: from.to_path_buf(),
        source,
    })?;
    write_path(dest, &html)
}

/// Render every markdown file under `content_dir` into `public_dir`,
/// mirroring the directory layout.
///
/// A missing template or content directory fails the whole call. A document
/// that fails to convert or write is logged and recorded in the report while
/// the remaining documents are still generated.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    public_dir: &Path,
) -> Result<BuildReport, IoError> {
    let template = read_path(template_path)?;
    let mut report = BuildReport::default();

    for source in scan_markdown_files(content_dir)? {
        let Some(page) = SourcePage::from_path(content_dir, &source) else {
            log::error!("Skipping {}: not under the content directory", source.display());
            report.failures.push(IoError::InvalidPath(source));
            continue;
        };
        let dest = page.output_path().to_path(public_dir);

        match render_to(&source, &template, &dest) {
            Ok(()) => report.pages.push(dest),
            Err(e) => {
                log::error!("{e}");
                report.failures.push(e);
            }
        }
    }

    Ok(report)
}

/// Clear the public directory, copy static assets, then generate all pages
pub fn build_site(paths: &SitePaths) -> Result<BuildReport, IoError> {
    if paths.public_dir.exists() {
        log::info!("Clearing {}", paths.public_dir.display());
        clear_directory(&paths.public_dir)?;
    } else {
        fs::create_dir_all(&paths.public_dir)?;
    }

    let assets = if paths.static_dir.is_dir() {
        log::info!(
            "Copying static files {} -> {}",
            paths.static_dir.display(),
            paths.public_dir.display()
        );
        copy_directory(&paths.static_dir, &paths.public_dir)?
    } else {
        log::warn!(
            "Static directory {} not found, no assets copied",
            paths.static_dir.display()
        );
        Vec::new()
    };

    let mut report =
        generate_pages_recursive(&paths.content_dir, &paths.template, &paths.public_dir)?;
    report.assets = assets;

    log::info!(
        "Built {} pages and copied {} assets ({} failed)",
        report.pages.len(),
        report.assets.len(),
        report.failures.len()
    );
    Ok(report)
}

fn read_path(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

fn write_path(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}
