use clap::Parser;
use log::warn;

use crate::error::UsageError;

pub const USAGE: &str = "usage:
 jar-class-finder
    ---jar_paths path1,path2,path3,...(comma-delimited)
    ---class_name class_name
    ---method_name method_name";

const FLAG_PREFIX: &str = "---";
const FLAGS: [&str; 3] = ["jar_paths", "class_name", "method_name"];
const PASSTHROUGH: [&str; 4] = ["-h", "--help", "-V", "--version"];

#[derive(Debug, Clone, Parser)]
#[command(name = "jar-class-finder", version)]
#[command(about = "Find which jar files contain a class whose name contains a fragment")]
pub struct Cli {
    /// Comma-delimited jar files or directories to scan recursively.
    #[arg(long = "jar_paths", value_name = "PATHS", allow_hyphen_values = true)]
    pub jar_paths: Option<String>,

    /// Fragment matched against fully-qualified class names (case-sensitive).
    #[arg(long = "class_name", value_name = "NAME", allow_hyphen_values = true)]
    pub class_name: Option<String>,

    /// Accepted for forward compatibility; matching ignores it.
    #[arg(long = "method_name", value_name = "NAME", allow_hyphen_values = true)]
    pub method_name: Option<String>,
}

/// The argv handed to clap plus every token that was dropped on the way.
#[derive(Debug, Default, PartialEq, Eq)]
struct FlagTokens {
    args: Vec<String>,
    ignored: Vec<String>,
}

pub fn parse_args(args: Vec<String>) -> Result<Cli, UsageError> {
    let tokens = normalize_flag_tokens(args);
    for token in &tokens.ignored {
        warn!("ignoring argument {token:?}");
    }
    Ok(Cli::try_parse_from(tokens.args)?)
}

/// Keeps only `---flag value` pairs (flag names matched case-insensitively),
/// rewritten to clap's `--flag value`.
///
/// The first occurrence of a flag wins; later occurrences and their values are
/// dropped. Any other token, including `--flag` and `--flag=value` spellings,
/// is dropped too. The token right after a recognized flag is always its
/// value, so a value that looks like a flag is never reinterpreted.
fn normalize_flag_tokens(args: Vec<String>) -> FlagTokens {
    let mut tokens = FlagTokens::default();
    let mut seen: Vec<String> = Vec::with_capacity(FLAGS.len());
    let mut iter = args.into_iter();

    if let Some(program) = iter.next() {
        tokens.args.push(program);
    }

    while let Some(token) = iter.next() {
        let flag = token
            .strip_prefix(FLAG_PREFIX)
            .map(str::to_ascii_lowercase)
            .filter(|name| FLAGS.contains(&name.as_str()));

        match flag {
            Some(name) if seen.contains(&name) => {
                tokens.ignored.push(token);
                tokens.ignored.extend(iter.next());
            }
            Some(name) => {
                tokens.args.push(format!("--{name}"));
                tokens.args.extend(iter.next());
                seen.push(name);
            }
            None if PASSTHROUGH.contains(&token.as_str()) => tokens.args.push(token),
            None => tokens.ignored.push(token),
        }
    }

    tokens
}
