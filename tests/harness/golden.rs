use flash_pug::MemoryFileSystem;
use glob::glob;
use std::fs;
use std::path::Path;

/// A `tests/data/<name>.pug` template with its expected `<name>.html`.
#[derive(Debug)]
pub struct GoldenCase {
    pub name: String,
    pub input: String,
    pub expected: String,
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .expect("Fixture path should name a file")
        .to_string_lossy()
        .into_owned()
}

/// Loads every file under `tests/data` into `fs` at `/<file name>` and
/// returns the templates that have an expected output next to them.
pub fn golden_cases(fs: &MemoryFileSystem) -> Vec<GoldenCase> {
    let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data");
    let pattern = format!("{}/*", data_dir.display());
    let mut cases = Vec::new();

    for path in glob(&pattern).expect("Fixture pattern should be valid") {
        let path = path.expect("Fixture path should be readable");
        let content = fs::read(&path).expect("Fixture should be readable");

        fs.insert(format!("/{}", file_name(&path)), content);
    }

    for path in glob(&format!("{}/*.pug", data_dir.display())).expect("Fixture pattern should be valid") {
        let path = path.expect("Fixture path should be readable");
        let expected_path = path.with_extension("html");

        if !expected_path.exists() {
            continue;
        }

        cases.push(GoldenCase {
            name: file_name(&path),
            input: format!("/{}", file_name(&path)),
            expected: fs::read_to_string(&expected_path).expect("Expected output should be readable"),
        });
    }

    cases
}
