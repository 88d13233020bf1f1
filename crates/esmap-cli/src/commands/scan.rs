use esmap_core::{ImportMap, Resolver, ResolverConfig};
use miette::{IntoDiagnostic, Result, WrapErr};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// How the import map is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Json,
    PrettyJson,
    Html,
}

#[derive(Debug)]
pub struct ScanAction {
    pub files: Vec<PathBuf>,
    pub config: Option<PathBuf>,
    pub host: Option<String>,
    pub react_version: Option<String>,
    pub output: Output,
}

/// Run the scan command.
///
/// Files are scanned in argument order into one map; later files win on
/// conflicting specifiers. With no files, stdin is scanned.
pub fn run(action: &ScanAction) -> Result<()> {
    let resolver = Resolver::new(resolver_config(action)?);
    let map = build_map(&resolver, &action.files, read_stdin)?;

    let rendered = match action.output {
        Output::Json => map.to_json(),
        Output::PrettyJson => map.to_json_pretty(),
        Output::Html => map.to_script_tag(),
    }
    .into_diagnostic()?;

    println!("{rendered}");
    Ok(())
}

fn resolver_config(action: &ScanAction) -> Result<ResolverConfig> {
    let mut config = match &action.config {
        Some(path) => ResolverConfig::load(path).into_diagnostic()?,
        None => ResolverConfig::default(),
    };

    if let Some(host) = &action.host {
        config = config.with_resolution_host(host);
    }
    if let Some(version) = &action.react_version {
        config = config.with_react_version(version);
    }

    debug!(
        host = %config.resolution_host,
        react = %config.react_version,
        "resolver config"
    );
    Ok(config)
}

/// Stdin is read at most once; a repeated `-` rescans the same text.
fn build_map(
    resolver: &Resolver,
    files: &[PathBuf],
    mut read_stdin: impl FnMut() -> Result<String>,
) -> Result<ImportMap> {
    if files.is_empty() {
        return Ok(resolver.scan(&read_stdin()?));
    }

    let mut stdin_source: Option<String> = None;
    let mut map = resolver.seed().clone();
    for file in files {
        let scanned = if is_stdin(file) {
            let source = match stdin_source.take() {
                Some(source) => source,
                None => read_stdin()?,
            };
            let scanned = resolver.scan(&source);
            stdin_source = Some(source);
            scanned
        } else {
            resolver.scan_file(file).into_diagnostic()?
        };
        debug!(file = %file.display(), entries = scanned.len(), "scanned");
        map.merge(scanned);
    }

    Ok(map)
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_stdin() -> Result<String> {
    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .into_diagnostic()
        .wrap_err("Failed to read source from stdin")?;
    Ok(source)
}
