pub mod error;
pub mod extension;

use std::collections::{BTreeMap, HashSet};

use log::{debug, info, trace, warn};

use crate::{config::StripperConfig, fs_ops::FileSystemOps};

use self::{
    error::{
        Error::{self, *},
        RenameError,
    },
    extension::strip_extension,
};

#[derive(Debug, Default)]
pub struct StripReport {
    /// `(old, new)` name pairs.
    pub renamed: Vec<(String, String)>,
    /// Entries without an extension.
    pub unchanged: Vec<String>,
    pub failed: Vec<(String, RenameError)>,
}

impl StripReport {
    fn fail(&mut self, name: &str, err: RenameError) {
        warn!("failed to rename {}: {}", name, err);
        self.failed.push((name.into(), err));
    }
}

/// Renames every direct child of `config.dir` to its name without the
/// extension.
///
/// Only a failure to list the directory is returned as an error. Each entry
/// is handled on its own: a failed rename is logged, recorded in the report
/// and the remaining entries are still processed. Entries whose target name
/// is already taken, or is shared with another entry, are not renamed.
pub async fn strip_extensions(
    fs: &dyn FileSystemOps,
    config: &StripperConfig,
) -> Result<StripReport, Error> {
    let dir = config.dir.as_path();
    let entries = fs
        .read_dir(dir)
        .await
        .map_err(|e| CannotReadDir(dir.into(), e))?;
    debug!("found {} entries in {}", entries.len(), dir.display());

    let mut report = StripReport::default();
    let mut names = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry.into_string() {
            Ok(name) => names.push(name),
            Err(raw) => {
                let lossy = raw.to_string_lossy().into_owned();
                report.fail(&lossy, RenameError::InvalidName(raw));
            }
        }
    }

    let existing: HashSet<&str> = names.iter().map(String::as_str).collect();
    let mut planned: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for name in &names {
        match strip_extension(name) {
            Some(target) => planned.entry(target).or_default().push(name),
            None => {
                trace!("{} has no extension", name);
                report.unchanged.push(name.clone());
            }
        }
    }

    for (target, sources) in planned {
        if let [source] = sources[..] {
            if existing.contains(target) {
                report.fail(source, RenameError::TargetExists(target.into()));
                continue;
            }

            let from = dir.join(source);
            let to = dir.join(target);
            match fs.rename(&from, &to).await {
                Ok(()) => {
                    info!("renamed {} to {}", source, target);
                    report.renamed.push((source.into(), target.into()));
                }
                Err(e) => report.fail(source, RenameError::Io(from, to, e)),
            }
        } else {
            let claimants: Vec<String> = sources.iter().map(|s| s.to_string()).collect();
            for source in &sources {
                report.fail(
                    source,
                    RenameError::DuplicateTarget {
                        target: target.into(),
                        sources: claimants.clone(),
                    },
                );
            }
        }
    }

    info!(
        "renamed {} entries in {}, {} unchanged, {} failed",
        report.renamed.len(),
        dir.display(),
        report.unchanged.len(),
        report.failed.len()
    );

    Ok(report)
}
