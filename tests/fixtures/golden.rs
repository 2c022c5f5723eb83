use crate::harness::golden_cases;
use flash_pug::{compile, MemoryFileSystem, Readings};
use itertools::Itertools;

#[test]
fn golden_outputs() {
    let fs = MemoryFileSystem::new();
    let readings = Readings::default();
    let cases = golden_cases(&fs);

    assert!(!cases.is_empty(), "No fixtures found under tests/data");

    let failures = cases
        .iter()
        .filter_map(|case| {
            let output = format!("{}.html", case.input);

            match compile(&fs, &readings, &case.input, None) {
                Ok(()) => {
                    let actual = fs.get_string(&output).unwrap_or_default();

                    (actual != case.expected).then(|| {
                        format!(
                            "{}:\n  expected: {:?}\n  actual:   {:?}",
                            case.name, case.expected, actual
                        )
                    })
                }
                Err(e) => Some(format!("{}: {e}", case.name)),
            }
        })
        .join("\n");

    assert!(failures.is_empty(), "Golden mismatches:\n{failures}");
}
