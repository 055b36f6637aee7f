use std::io::{self, BufRead};

use abi_sigparse::{
    classify_input_with, parse_parameter_with, parse_signature_with, parse_struct_with,
    ParserConfig, SignatureKind,
};
use anyhow::{anyhow, Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    init_tracing();

    let matches = App::new("abi-sigparse")
        .version("0.1.0")
        .about("Parses Solidity ABI declarations and prints them in canonical form")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            common_args(SubCommand::with_name("signature"))
                .about("Parse function, constructor, fallback, receive, event or error signatures")
                .arg(
                    Arg::with_name("kind")
                        .short("k")
                        .long("kind")
                        .value_name("KIND")
                        .help("Require signatures of this kind")
                        .possible_values(&[
                            "function",
                            "constructor",
                            "fallback",
                            "receive",
                            "event",
                            "error",
                        ])
                        .takes_value(true),
                ),
        )
        .subcommand(common_args(SubCommand::with_name("parameter")).about("Parse standalone types"))
        .subcommand(common_args(SubCommand::with_name("struct")).about("Parse struct definitions"))
        .subcommand(
            common_args(SubCommand::with_name("classify")).about("Report which grammar the input matches"),
        )
        .get_matches();

    let (command, sub) = matches.subcommand();
    let sub = sub.ok_or_else(|| anyhow!("No subcommand given"))?;

    let mut config = ParserConfig::default();
    if let Some(depth) = sub.value_of("max-depth") {
        let depth = depth
            .parse()
            .with_context(|| format!("Invalid --max-depth value: {}", depth))?;
        config = config.with_max_depth(depth);
    }
    let kind = match sub.value_of("kind") {
        Some(kind) => kind.parse().map_err(|err: String| anyhow!(err))?,
        None => SignatureKind::Unknown,
    };
    let show_tree = sub.is_present("debug");

    for input in read_inputs(sub)? {
        debug!(command, input = %input, "processing");
        let line = match command {
            "signature" => {
                let sig = parse_signature_with(&input, kind, &config)
                    .with_context(|| format!("Failed to parse signature: {}", input))?;
                if show_tree {
                    format!("{:#?}", sig)
                } else {
                    sig.render()
                }
            }
            "parameter" => {
                let param = parse_parameter_with(&input, &config)
                    .with_context(|| format!("Failed to parse parameter: {}", input))?;
                if show_tree {
                    format!("{:#?}", param)
                } else {
                    param.render()
                }
            }
            "struct" => {
                let def = parse_struct_with(&input, &config)
                    .with_context(|| format!("Failed to parse struct: {}", input))?;
                if show_tree {
                    format!("{:#?}", def)
                } else {
                    def.render()
                }
            }
            "classify" => classify_input_with(&input, &config).to_string(),
            other => return Err(anyhow!("Unknown subcommand: {}", other)),
        };
        println!("{}", line);
    }

    Ok(())
}

fn common_args<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
    app.arg(
        Arg::with_name("INPUT")
            .help("Declaration to parse; read line by line from stdin when omitted")
            .index(1),
    )
    .arg(
        Arg::with_name("max-depth")
            .long("max-depth")
            .value_name("N")
            .help("Maximum tuple nesting depth")
            .takes_value(true),
    )
    .arg(
        Arg::with_name("debug")
            .long("debug")
            .help("Print the parsed tree instead of the canonical text"),
    )
}

fn read_inputs(matches: &ArgMatches) -> Result<Vec<String>> {
    if let Some(input) = matches.value_of("INPUT") {
        return Ok(vec![input.to_string()]);
    }
    let mut inputs = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if !line.trim().is_empty() {
            inputs.push(line);
        }
    }
    Ok(inputs)
}

/// Logs go to stderr; filter with `RUST_LOG`, e.g. `RUST_LOG=abi_sigparse=trace`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(filter)
        .init();
}
