use std::{
    fmt::Debug,
    io::Write,
    process::{Command, Stdio},
    sync::Arc,
};
use tablegen_core::{err, Error, Result};

/// The formatting pass applied to rendered source.
///
/// Implementations must reject text that does not parse as a Rust file.
pub trait Format: Debug {
    fn format(&self, src: &str) -> Result<String>;
}

impl<F: Format + ?Sized> Format for Arc<F> {
    fn format(&self, src: &str) -> Result<String> {
        (**self).format(src)
    }
}

/// Parses the source with `syn` and prints it back with `prettyplease`.
///
/// Runs in-process. Plain `//` comments do not survive the round trip; doc
/// comments do.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unparse;

impl Format for Unparse {
    fn format(&self, src: &str) -> Result<String> {
        let file = parse(src)?;
        Ok(prettyplease::unparse(&file))
    }
}

/// Pipes the source through an external `rustfmt`.
///
/// The source is checked with `syn` first so invalid text fails the same
/// way as with [`Unparse`].
#[derive(Debug, Clone)]
pub struct Rustfmt {
    program: String,
    edition: String,
}

impl Rustfmt {
    pub fn new() -> Self {
        Self {
            program: "rustfmt".to_string(),
            edition: "2021".to_string(),
        }
    }

    /// Use the `rustfmt` binary at `program`.
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn edition(mut self, edition: impl Into<String>) -> Self {
        self.edition = edition.into();
        self
    }
}

impl Default for Rustfmt {
    fn default() -> Self {
        Self::new()
    }
}

impl Format for Rustfmt {
    fn format(&self, src: &str) -> Result<String> {
        parse(src)?;

        let context = || err!("failed to run `{}`", self.program);

        let mut child = Command::new(&self.program)
            .args(["--emit", "stdout", "--edition", &self.edition])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::from(e).context(context()))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| err!("rustfmt stdin unavailable"))?;
        let input = src.to_string();

        // Feed stdin from another thread while stdout and stderr are drained.
        let writer = std::thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child
            .wait_with_output()
            .map_err(|e| Error::from(e).context(context()))?;

        let written = writer
            .join()
            .map_err(|_| err!("thread feeding `{}` panicked", self.program))?;

        let stderr = String::from_utf8_lossy(&output.stderr);

        match output.status.code() {
            Some(0) => {
                written.map_err(|e| Error::from(e).context(context()))?;
                String::from_utf8(output.stdout).map_err(|e| {
                    err!("`{}` printed invalid UTF-8: {e}", self.program).context(context())
                })
            }
            Some(1) | Some(2) => Err(Error::format(stderr.trim().to_string())),
            _ => Err(err!(
                "`{}` exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )),
        }
    }
}

fn parse(src: &str) -> Result<syn::File> {
    syn::parse_file(src).map_err(|e| Error::format(e.to_string()))
}
