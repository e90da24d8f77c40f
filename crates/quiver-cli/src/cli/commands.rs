//! Command builders for the CLI.

use clap::{ArgGroup, Command};

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("quiver")
        .about("Answer part-of-speech tagged questions with SPARQL queries")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(ask_command())
        .subcommand(match_command())
        .subcommand(trace_command())
        .subcommand(check_command())
        .subcommand(templates_command())
}

fn with_token_args(cmd: Command) -> Command {
    cmd.arg(tokens_text_arg())
        .arg(tokens_path_arg())
        .arg(json_arg())
}

/// Pattern source for `match` and `trace`: inline text, a file or a template name.
fn with_pattern_args(cmd: Command) -> Command {
    cmd.arg(pattern_text_arg())
        .arg(pattern_file_arg())
        .arg(template_arg())
        .group(
            ArgGroup::new("pattern_source")
                .args(["pattern_text", "pattern_path", "template"])
                .required(true),
        )
}

/// Interpret a question with the registry.
pub fn ask_command() -> Command {
    let cmd = Command::new("ask")
        .about("Translate a tagged question into a query")
        .override_usage(
            "\
  quiver ask <TOKENS>
  quiver ask -i <FILE> [--json]
  quiver ask <TOKENS> --format dot",
        )
        .after_help(
            r#"EXAMPLES:
  quiver ask 'who/who/WP manages/manage/VBZ Arsenal/arsenal/NNP'
  quiver ask -i question.json --json
  quiver ask -i question.txt --format dot | dot -Tpng > graph.png"#,
        )
        .arg(format_arg())
        .arg(vocabulary_arg())
        .arg(render_config_arg())
        .arg(color_arg());
    with_token_args(cmd)
}

/// Match a pattern against tokens and print captures.
pub fn match_command() -> Command {
    let cmd = Command::new("match")
        .about("Match a pattern against tagged tokens and print the captures as JSON")
        .override_usage(
            "\
  quiver match -p <PATTERN> <TOKENS>
  quiver match -f <FILE> <TOKENS>
  quiver match -t <TEMPLATE> <TOKENS>",
        )
        .after_help(
            r#"EXAMPLES:
  quiver match -p 'who manage Team' 'who/who/WP manages/manage/VBZ Arsenal/arsenal/NNP'
  quiver match -p '<DT>? (<NNP>+ @name)' --prefix -i question.txt
  quiver match -f team.qv 'Real/real/NNP Madrid/madrid/NNP'
  quiver match -t roster 'Arsenal/arsenal/NNP players/player/NNS'"#,
        )
        .arg(prefix_arg())
        .arg(vocabulary_arg())
        .arg(color_arg());
    with_token_args(with_pattern_args(cmd))
}

/// Trace matcher execution for debugging.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace matcher execution step by step")
        .override_usage(
            "\
  quiver trace -p <PATTERN> <TOKENS> [-v|-vv]
  quiver trace -t <TEMPLATE> <TOKENS> [--fuel <N>]",
        )
        .after_help(
            r#"EXAMPLES:
  quiver trace -p 'who (be | manage)' 'who/who/WP manages/manage/VBZ'
  quiver trace -t manager -i question.txt -vv"#,
        )
        .arg(prefix_arg())
        .arg(verbose_arg())
        .arg(fuel_arg())
        .arg(vocabulary_arg())
        .arg(color_arg());
    with_token_args(with_pattern_args(cmd))
}

/// Validate a pattern.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Parse and validate a pattern")
        .override_usage(
            "\
  quiver check <FILE>
  quiver check -p <PATTERN>",
        )
        .after_help(
            r#"EXAMPLES:
  quiver check -p 'who be <DT> manager of Team'
  quiver check pattern.qv"#,
        )
        .arg(pattern_path_arg())
        .arg(pattern_text_arg())
        .arg(vocabulary_arg())
        .arg(color_arg())
        .group(
            ArgGroup::new("pattern_source")
                .args(["pattern_text", "pattern_path"])
                .required(true),
        )
}

/// List registered templates.
pub fn templates_command() -> Command {
    Command::new("templates")
        .about("List templates in dispatch order")
        .arg(vocabulary_arg())
        .arg(color_arg())
}
