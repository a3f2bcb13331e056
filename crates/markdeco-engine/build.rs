//! Generates one `#[test]` per markdown fixture in `tests/fixtures/`.
//!
//! Every `<name>.md` must have a `<name>.json` sibling holding the expected
//! parse result; a missing sibling fails the build rather than a test.

use std::fmt::Write as _;
use std::path::Path;

const FIXTURE_DIR: &str = "tests/fixtures";

fn main() {
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("fixture_tests.rs");

    let mut stems: Vec<String> = std::fs::read_dir(FIXTURE_DIR)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|e| e == "md"))
        .map(|p| p.file_stem().unwrap().to_string_lossy().into_owned())
        .collect();
    stems.sort();

    let mut code = String::from("mod fixtures {\n    use super::fixture_test;\n");
    for stem in &stems {
        let expected = Path::new(FIXTURE_DIR).join(format!("{stem}.json"));
        assert!(expected.exists(), "fixture {stem}.md has no {stem}.json");

        let test_name: String = stem
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        writeln!(
            code,
            "\n    #[test]\n    fn {test_name}() {{\n        fixture_test({stem:?});\n    }}"
        )
        .unwrap();
    }
    code.push_str("}\n");
    std::fs::write(&dest, code).unwrap();

    println!("cargo::rerun-if-changed={FIXTURE_DIR}");
}
