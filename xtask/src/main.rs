use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const EXPECTED_COLUMNS: usize = 5;

fn main() {
    match run() {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<(), String> {
    let repo = repo_root()?;
    let matrix_path = match env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => repo.join("docs/compliance_matrix.csv"),
    };
    if !matrix_path.exists() {
        return Err(format!(
            "compliance matrix missing at {}",
            matrix_path.display()
        ));
    }

    let content = fs::read_to_string(&matrix_path)
        .map_err(|e| format!("reading {} failed: {e}", matrix_path.display()))?;

    let mut missing_tests: Vec<String> = Vec::new();
    let mut missing_files: Vec<(String, PathBuf)> = Vec::new();
    let mut missing_fns: Vec<String> = Vec::new();
    let mut rows = 0usize;

    for (idx, line) in content.lines().enumerate() {
        if idx == 0 {
            continue; // header
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        rows += 1;

        let columns: Vec<&str> = line.split(',').collect();
        if columns.len() != EXPECTED_COLUMNS {
            return Err(format!(
                "line {}: expected {} columns, found {}",
                idx + 1,
                EXPECTED_COLUMNS,
                columns.len()
            ));
        }

        let requirement = columns[0].trim();
        if requirement.is_empty() {
            return Err(format!("line {}: requirement_id empty", idx + 1));
        }
        let row = format!("{} (line {})", requirement, idx + 1);

        let test_refs = columns[4].trim();
        if test_refs.is_empty() {
            missing_tests.push(row);
            continue;
        }

        for reference in test_refs.split(';').map(str::trim) {
            if reference.is_empty() {
                continue;
            }
            let (path_part, test_name) = match reference.split_once("::") {
                Some((path, name)) => (path.trim(), Some(name.trim())),
                None => (reference, None),
            };
            let path = repo.join(path_part);
            let source = match fs::read_to_string(&path) {
                Ok(source) => source,
                Err(_) => {
                    missing_files.push((format!("{row} ref {reference}"), path));
                    continue;
                }
            };
            if let Some(name) = test_name {
                if !defines_fn(&source, name) {
                    missing_fns.push(format!("{row} ref {reference}"));
                }
            }
        }
    }

    if missing_tests.is_empty() && missing_files.is_empty() && missing_fns.is_empty() {
        println!("Compliance matrix OK ({rows} requirements)");
        return Ok(());
    }

    let mut message = String::from("Compliance matrix validation failed:\n");
    if !missing_tests.is_empty() {
        message.push_str("Rows with empty test_refs column:\n");
        for row in &missing_tests {
            message.push_str(&format!("  - {row}\n"));
        }
    }
    if !missing_files.is_empty() {
        message.push_str("Referenced files not found:\n");
        for (row, file) in &missing_files {
            message.push_str(&format!("  - {} -> {}\n", row, file.display()));
        }
    }
    if !missing_fns.is_empty() {
        message.push_str("Referenced test functions not found:\n");
        for row in &missing_fns {
            message.push_str(&format!("  - {row}\n"));
        }
    }

    Err(message)
}

/// Whether `source` contains `fn <name>` followed by `(`.
///
/// A reference may be qualified (`tests::name`); only the last segment is matched.
fn defines_fn(source: &str, name: &str) -> bool {
    let name = name.rsplit("::").next().unwrap_or(name);
    let needle = format!("fn {name}");
    source.match_indices(&needle).any(|(pos, _)| {
        source[pos + needle.len()..]
            .trim_start()
            .starts_with('(')
    })
}

fn repo_root() -> Result<PathBuf, String> {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(manifest_dir)
        .parent()
        .map(|p| p.to_path_buf())
        .ok_or_else(|| "xtask manifest directory has no parent".to_string())
}
