#![cfg(unix)]

use std::{fs, os::unix::fs::PermissionsExt, path::Path};
use tablegen_codegen::{Format, Rustfmt};

fn script(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path.display().to_string()
}

// One test: each script is executed right after it is written.
#[test]
fn external_formatter() {
    let dir = tempfile::tempdir().unwrap();

    let echo = script(dir.path(), "echo-fmt", "cat");
    let noisy = script(
        dir.path(),
        "noisy-fmt",
        "cat > /dev/null\nhead -c 262144 /dev/zero | tr '\\000' x >&2\nexit 1",
    );

    let src = "pub struct Users;\n";
    assert_eq!(Rustfmt::new().program(echo).format(src).unwrap(), src);

    // More stderr than a pipe buffer holds, while stdout stays empty.
    let err = Rustfmt::new().program(noisy).format(src).unwrap_err();
    assert!(err.is_format());
    assert!(err.to_string().len() > 262144);
}
