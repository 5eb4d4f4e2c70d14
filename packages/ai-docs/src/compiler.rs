//! Compile rule documents for every target, to disk or as a preview.
//!
//! Both entry points share [`plan`]: documents are loaded once, and every
//! target in [`Target::ALL`] is generated from them. [`compile`] checks for
//! legacy output shapes before writing anything; [`preview`] never touches
//! the filesystem, so it skips that check.
//!
//! Writes are not transactional across targets: if a write fails, files
//! already written for earlier targets stay in place.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Context, Result};

use crate::{GeneratedFile, IGNORE_FILE, RULES_DIR, Registry, Target, legacy, rules};

/// Everything a run produces for one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetOutput {
    pub target: Target,

    /// Rule files, in document order.
    pub files: Vec<GeneratedFile>,

    /// The ignore file, if there is an ignore source and the target supports one.
    pub ignore: Option<GeneratedFile>,
}

/// Compute the output of every target without writing anything.
///
/// Rule documents are read from `<input_root>/rules`, and ignore patterns from
/// `<input_root>/ignore` if that file exists.
#[tracing::instrument(skip(registry))]
pub fn plan(
    registry: &Registry,
    input_root: &Path,
    output_root: &Path,
) -> Result<Vec<TargetOutput>> {
    let documents = rules::load(&input_root.join(RULES_DIR)).context("load rule documents")?;
    let ignore = read_ignore(&input_root.join(IGNORE_FILE))?;

    Target::ALL
        .into_iter()
        .map(|target| -> Result<TargetOutput> {
            let generator = registry.get(target)?;
            let files = generator.generate(&documents, output_root);
            let ignore = ignore
                .as_deref()
                .and_then(|ignore| generator.generate_ignore(ignore, output_root));
            tracing::debug!(
                %target,
                files = files.len(),
                has_ignore = ignore.is_some(),
                "planned target"
            );
            Ok(TargetOutput {
                target,
                files,
                ignore,
            })
        })
        .collect()
}

/// Compile every target and write the results under `output_root`.
///
/// Fails with [`Error::LegacyConflict`](crate::Error::LegacyConflict) before
/// writing anything if an older output shape is in the way. Returns the paths
/// written, in the order they were written.
#[tracing::instrument(skip(registry))]
pub fn compile(registry: &Registry, input_root: &Path, output_root: &Path) -> Result<Vec<PathBuf>> {
    let outputs = plan(registry, input_root, output_root)?;

    let mut legacy_files = vec![];
    for target in Target::ALL {
        legacy_files.extend(registry.get(target)?.legacy_files(output_root));
    }
    legacy::check(&legacy_files).context("check for legacy output files")?;

    let rule_files = outputs.iter().flat_map(|output| &output.files);
    let ignore_files = outputs.iter().filter_map(|output| output.ignore.as_ref());

    let mut written = vec![];
    for file in rule_files.chain(ignore_files) {
        write(file)?;
        written.push(file.path.clone());
    }

    Ok(written)
}

/// Render what [`compile`] would write into `out`, without touching the filesystem.
#[tracing::instrument(skip(registry, out))]
pub fn preview(
    registry: &Registry,
    input_root: &Path,
    output_root: &Path,
    out: &mut impl Write,
) -> Result<()> {
    let outputs = plan(registry, input_root, output_root)?;
    for output in &outputs {
        for file in output.files.iter().chain(&output.ignore) {
            tracing::info!(%output.target, path = ?file.path, "previewed");
        }
    }
    render(&outputs, out).context("write preview")
}

/// Render planned outputs: rule files for every target, then ignore files.
pub fn render(outputs: &[TargetOutput], out: &mut impl Write) -> std::io::Result<()> {
    for output in outputs {
        let name = output.target.to_string().to_uppercase();
        writeln!(out, "\n=== {name} PREVIEW ===")?;
        for file in &output.files {
            render_file(file, out)?;
        }
        writeln!(out, "\n=== END PREVIEW ===\n")?;
    }

    for output in outputs {
        let Some(file) = &output.ignore else {
            continue;
        };
        let name = output.target.to_string().to_uppercase();
        writeln!(out, "\n=== {name} IGNORE PREVIEW ===")?;
        render_file(file, out)?;
        writeln!(out, "\n=== END PREVIEW ===\n")?;
    }

    Ok(())
}

fn render_file(file: &GeneratedFile, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "\n--- {} ---", file.path.display())?;
    writeln!(out, "{}", file.content)
}

/// Write `file`, creating its parent directories as needed.
fn write(file: &GeneratedFile) -> Result<()> {
    if let Some(parent) = file.path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create directory: {parent:?}"))?;
    }
    fs::write(&file.path, &file.content)
        .with_context(|| format!("write generated file: {:?}", file.path))?;
    tracing::info!(path = ?file.path, "generated");
    Ok(())
}

/// Read the shared ignore patterns, if there are any.
fn read_ignore(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(?path, "no ignore source");
            Ok(None)
        }
        Err(e) => Err(e).context(format!("read ignore file: {path:?}")),
    }
}
