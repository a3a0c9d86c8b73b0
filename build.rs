use std::fs;

// Re-exports the package metadata so the logger and the binaries can print
// `<name>_<version>` without hard-coding it.
const EXPORTED_KEYS: [(&str, &str); 3] = [
    ("version", "CARGO_PKG_VERSION"),
    ("description", "CARGO_PKG_DESCRIPTION"),
    ("name", "CARGO_PKG_NAME"),
];

fn main() {
    println!("cargo:rerun-if-changed=Cargo.toml");
    let cargo_toml = fs::read_to_string("Cargo.toml").expect("Failed to read Cargo.toml");
    let cargo: toml::Value = cargo_toml.parse().expect("Failed to parse Cargo.toml");

    let package = match cargo.get("package") {
        Some(package) => package,
        None => return,
    };
    for (key, env_name) in EXPORTED_KEYS {
        if let Some(value) = package.get(key).and_then(|v| v.as_str()) {
            println!("cargo:rustc-env={}={}", env_name, value);
        }
    }
}
