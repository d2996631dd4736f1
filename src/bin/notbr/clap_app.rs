use std::path::PathBuf;

use clap::{
    arg,
    builder::{styling::AnsiColor, PossibleValuesParser, Styles},
    crate_description, crate_name, crate_version, value_parser, ColorChoice, Command,
};
use notbr::{markup::OutputType, options::parse_percentage};

fn env_no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|x| !x.is_empty())
}

fn bold_parser(value: &str) -> Result<f64, String> {
    parse_percentage(value).map_err(|e| e.to_string())
}

// Builds the application command line interface defining the commands, subcommands
// and arguments
pub fn build_app(interactive_output: bool) -> Command {
    let color_when = if interactive_output && !env_no_color() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default())
        .usage(AnsiColor::Green.on_default())
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default());

    Command::new(crate_name!())
    .styles(styles)
    .version(crate_version!())
    .about(crate_description!())
    .color(color_when)
    .args_conflicts_with_subcommands(true)
    .arg(
        arg!([text] ... "Text to transform.")
        .long_help(
            "Text to transform. Multiple values are joined with a single space. \
                    When omitted, the text is read from --input or the standard input.",
        )
        .conflicts_with("input"),
    )
    .arg(
        arg!(-i --input <FILE> "File which should be used as input.")
        .long_help("Reads the text to transform from the given file instead of the standard input.")
        .value_parser(value_parser!(PathBuf)),
    )
    .arg(
        arg!(-o --output <FILE> "File which should be used as output.")
        .long_help(
            "Writes the result to the given file instead of the standard output. \
                    Relative paths are resolved against the configured output directory, if any. \
                    Existing files are never overwritten unless --force is given.",
        )
        .value_parser(value_parser!(PathBuf)),
    )
    .arg(
        arg!(-f --frequency <N> "Emphasize every n-th word.")
        .long_help(
            "Selects which words are emphasized: the first word and then every n-th word. \
                    A frequency of 0 disables emphasis (defaults to the configured frequency).",
        )
        .value_parser(value_parser!(u64)),
    )
    .arg(
        arg!(-b --bold <PERCENT> "Part of each word to emphasize.")
        .long_help(
            "Part of each selected word to emphasize, as a fraction (0.5) or a percent (50, 50%). \
                    The number of emphasized letters is rounded up.",
        )
        .value_parser(bold_parser),
    )
    .arg(
        arg!(-t --"output-type" <TYPE> "Which kind of output should be produced.")
        .long_help(
            "Markup used for the emphasized letters: html (<b>), markdown (**) \
                    or ansi (terminal bold).",
        )
        .value_parser(PossibleValuesParser::new(OutputType::VARIANTS))
        .ignore_case(true),
    )
    .arg(
        arg!(--force "Overwrite the output file if it exists.")
        .long_help("Replaces the contents of an existing output file instead of failing."),
    )
    .arg(
        arg!(-n --"no-newline" "Supress the trailing new line.")
        .long_help("Prevents appending a new line when the result does not end with one."),
    )
    .subcommand(configure_subcommands())
}

/// Configure the config subcommands
fn configure_subcommands() -> Command {
    Command::new("config")
    .about("Inspect the configuration")
    .arg_required_else_help(true)
    .subcommand(
        Command::new("path")
        .about("Prints the location of the configuration file."),
    )
    .subcommand(
        Command::new("show")
        .about("Displays the contents of the configuration file.")
        .long_about(
            "Displays the configuration file ($NOTBR_CONFIG_DIR/notbr.toml by default). \
                    The file is created with default values on first run.",
        ),
    )
}
