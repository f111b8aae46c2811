use crate::ast::StructDef;
use crate::emitter;
use crate::error::FieldSpecError;
use crate::parser::Parser;
use crate::serialization::to_view;
use crate::target::Target;
use log::{debug, warn};
use serde::{Serialize, Serializer};
use std::fs;
use std::path::{Path, PathBuf};

/// The result of successfully compiling one field specification. Holds the
/// parsed definition together with the target profile it was compiled for,
/// and renders it on demand.
#[derive(Debug)]
pub struct Generation {
    pub definition: StructDef,
    target: Target,
}

impl Serialize for Generation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        to_view(&self.definition, &self.target).serialize(serializer)
    }
}

impl Generation {
    /// Renders the definition as a struct block in the target language.
    #[must_use]
    pub fn to_source(&self) -> String {
        emitter::emit_struct(&self.definition, &self.target)
    }

    /// Serializes the compiled field table as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self)
    }

    /// Serializes the compiled field table as YAML.
    ///
    /// # Errors
    /// Returns a `serde_yaml::Error` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self)
    }
}

/// Compiles one field specification source with the Go target profile.
///
/// This is the primary entry point. Each non-blank line of `source` must
/// read `name required|optional type`; `file_name` labels diagnostics and
/// `type_name` becomes the declared name of the emitted struct.
///
/// # Errors
///
/// Returns a `FieldSpecError` on the first grammar violation; no output is
/// produced for a source with any bad line.
pub fn generate(source: &str, file_name: &str, type_name: &str) -> Result<Generation, FieldSpecError> {
    generate_with_target(source, file_name, type_name, Target::default())
}

/// Compiles one field specification source for a caller-supplied target
/// profile.
///
/// # Errors
///
/// Returns a `FieldSpecError` on the first grammar violation.
pub fn generate_with_target(
    source: &str,
    file_name: &str,
    type_name: &str,
    target: Target,
) -> Result<Generation, FieldSpecError> {
    let parser = Parser::new_with_name(source, file_name.to_string()).with_target(target.clone());
    let fields = parser.parse_fields()?;
    debug!("compiled {} field(s) for {type_name}", fields.len());
    Ok(Generation {
        definition: StructDef {
            name: type_name.to_string(),
            fields,
        },
        target,
    })
}

/// Reads and compiles a spec file. The struct takes its name from the file
/// stem, so `resources/UserRepresentation` emits `type UserRepresentation`.
///
/// # Errors
///
/// Returns a `FieldSpecError` if the file cannot be read or on the first
/// grammar violation in it.
pub fn generate_path(path: &Path) -> Result<Generation, FieldSpecError> {
    let display = path.display().to_string();
    let source = fs::read_to_string(path).map_err(|source| FieldSpecError::Io {
        path: display.clone(),
        source,
    })?;
    let type_name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| display.clone());
    generate(&source, &display, &type_name)
}

/// Compiles every spec file in a directory into one Go source file with a
/// `package` clause and a doc comment per definition. Files are processed
/// in file-name order so output is deterministic; directory entries that
/// are not regular files, and dotfiles, are skipped with a warning.
///
/// # Errors
///
/// Returns a `FieldSpecError` if the directory cannot be listed, a file
/// cannot be read, or any file contains a grammar violation. One bad line
/// anywhere aborts the whole batch.
pub fn generate_package(dir: &Path, package: &str) -> Result<String, FieldSpecError> {
    let entries = fs::read_dir(dir).map_err(|source| FieldSpecError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| FieldSpecError::Io {
            path: dir.display().to_string(),
            source,
        })?;
        paths.push(entry.path());
    }
    paths.sort();

    let mut definitions = Vec::new();
    for path in paths {
        let hidden = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().starts_with('.'));
        if !path.is_file() || hidden {
            warn!("skipping {}: not a spec file", path.display());
            continue;
        }
        definitions.push(generate_path(&path)?.definition);
    }

    Ok(emitter::emit_file(package, &definitions, &Target::default()))
}
