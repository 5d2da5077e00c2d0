//! Transpile demo-language declarations to Python-style source.
//!
//! Usage:
//!   decl2py [OPTIONS] [FILE ...]
//!   decl2py < file.decl
//!
//! Each input is transpiled independently; output goes to stdout unless `--output`
//! names a directory, in which case `FILE` is written there as `<stem>.py`.
//!
//! Options:
//!   --tokens, -t        Dump the token sequence of each input to stderr
//!   --tree, -T          Dump the syntax tree of each input to stderr
//!   --output, -o DIR    Write `<stem>.py` files into DIR
//!
//! Exit code 1 if any input failed.

use anyhow::{bail, Context};
use ruleforge::demo::{self, Token};
use ruleforge::frontend::Error;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Default)]
struct Options {
    tokens: bool,
    tree: bool,
    output: Option<PathBuf>,
    files: Vec<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Options> {
    let mut opts = Options::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--tokens" | "-t" => opts.tokens = true,
            "--tree" | "-T" => opts.tree = true,
            "--output" | "-o" => {
                let dir = args.next().context("--output needs a directory")?;
                opts.output = Some(PathBuf::from(dir));
            }
            s if s.starts_with('-') => bail!("unknown option {}", s),
            _ => opts.files.push(PathBuf::from(&arg)),
        }
    }
    Ok(opts)
}

/// Run the stages one by one so intermediate results can be dumped and parse
/// errors can point at the offending token.
fn transpile(name: &str, src: &[u8], opts: &Options) -> Result<Vec<u8>, String> {
    let fe = demo::frontend();

    let tokens = fe.tokenize(src).map_err(|e| e.to_string())?;
    if opts.tokens {
        for t in &tokens {
            eprintln!("{}:{}:{}: {}", name, t.line, t.column, t);
        }
    }

    let tree = fe.parse(&tokens).map_err(|e| describe_parse_error(&e, &tokens))?;
    if opts.tree {
        eprintln!("{}: {:#?}", name, tree);
    }

    fe.transpile(&tree).map_err(|e| e.to_string())
}

fn describe_parse_error(e: &Error, tokens: &[Token]) -> String {
    match e {
        Error::Parse { token_index, .. } => match tokens.get(*token_index) {
            Some(t) => format!("{}\n  at line {} column {}: {}", e, t.line, t.column, t),
            None => format!("{}\n  at end of input", e),
        },
        _ => e.to_string(),
    }
}

/// `<stem>.py` in `dir`. Only the last extension of the input is replaced, so
/// `a.v1.decl` and `a.v2.decl` stay distinct.
fn output_path(dir: &Path, input: &Path) -> PathBuf {
    let mut name = input.file_stem().map(|s| s.to_os_string()).unwrap_or_else(|| "out".into());
    name.push(".py");
    dir.join(name)
}

fn main() -> anyhow::Result<()> {
    let opts = parse_args(std::env::args().skip(1))?;

    if let Some(dir) = &opts.output {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let mut failed = 0usize;

    if opts.files.is_empty() {
        let mut src = Vec::new();
        io::stdin().read_to_end(&mut src)?;
        match transpile("<stdin>", &src, &opts) {
            Ok(out) => io::stdout().write_all(&out)?,
            Err(e) => {
                eprintln!("<stdin>: {}", e);
                failed += 1;
            }
        }
    } else {
        for path in &opts.files {
            let display_path = path.display().to_string();
            let src = match std::fs::read(path) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("{}: {}", display_path, e);
                    failed += 1;
                    continue;
                }
            };
            let out = match transpile(&display_path, &src, &opts) {
                Ok(out) => out,
                Err(e) => {
                    eprintln!("{}: {}", display_path, e);
                    failed += 1;
                    continue;
                }
            };
            match &opts.output {
                Some(dir) => {
                    let target = output_path(dir, path);
                    std::fs::write(&target, &out)
                        .with_context(|| format!("writing {}", target.display()))?;
                    eprintln!("{}: wrote {}", display_path, target.display());
                }
                None => io::stdout().write_all(&out)?,
            }
        }
    }

    if failed > 0 {
        eprintln!("decl2py: {} input(s) failed", failed);
        std::process::exit(1);
    }
    Ok(())
}
