use std::env;
use std::fs;
use std::path::Path;

/// Variables read by `AppConfig::from_env` through `option_env!`
const CONFIG_KEYS: [&str; 5] = [
    "BACKEND_URL",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "MAX_UPLOAD_SIZE_MB",
    "TEMPLATE_SHEET_URL",
];

fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim().trim_matches('"').trim_matches('\'')))
}

fn main() {
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");

    let env_file = Path::new(".env");
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=No .env found, the portal will talk to http://127.0.0.1:5000/api/ (see .env.example)");
        return;
    };

    for (key, value) in contents.lines().filter_map(parse_line) {
        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=Ignoring unknown .env key {}", key);
            continue;
        }
        // A variable set in the shell overrides the file
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
