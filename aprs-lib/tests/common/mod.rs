use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    let mut path =
        PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));
    path.push("tests/fixtures");
    path.push(name);
    path
}

pub fn fixture_packets(name: &str) -> Vec<String> {
    std::fs::read_to_string(fixture_path(name))
        .expect("fixture to be readable")
        .lines()
        .map(str::to_string)
        .collect()
}
