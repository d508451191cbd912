use clap::{crate_version, value_parser, Arg, ArgAction, ArgMatches, Command};
use lsm_forcing::{
    config::{ForcingConfig, ScaffoldConfig},
    conversions::magnitude_conversion,
    logging, FileMetadata, ForcingWriter, TimeSeriesTable,
};
use tracing::info;

fn main() {
    let matches = build_cli().get_matches();
    logging::init(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("scaffold", sub_matches)) => {
            if let Err(e) = run_scaffold(sub_matches) {
                eprintln!("Scaffold error: {}", e);
                std::process::exit(1);
            }
        }
        Some(("forcing", sub_matches)) => {
            if let Err(e) = run_forcing(sub_matches) {
                eprintln!("Forcing file error: {}", e);
                std::process::exit(1);
            }
        }
        Some(("magnitude", sub_matches)) => {
            if let Err(e) = run_magnitude(sub_matches) {
                eprintln!("Magnitude conversion error: {}", e);
                std::process::exit(1);
            }
        }
        _ => {
            eprintln!("Please specify a subcommand. Use --help for more information.");
            std::process::exit(1);
        }
    }
}

fn run_scaffold(matches: &ArgMatches) -> Result<(), String> {
    let config = ScaffoldConfig::from_matches(matches)?;
    info!(
        output = %config.output.display(),
        start = %config.range.start,
        end = %config.range.end,
        "Creating forcing scaffold"
    );

    let writer = ForcingWriter::new(
        &config.output,
        FileMetadata::new(config.description, config.contact),
    );
    let scaffold = writer
        .scaffold(&config.range, config.time_step_seconds, config.ndim)
        .map_err(|e| e.to_string())?;

    println!(
        "Created {} with {} time steps on a {}x{}x{} grid",
        scaffold.file_path().display(),
        scaffold.time_len(),
        scaffold.ndim(),
        scaffold.ndim(),
        scaffold.ndim()
    );
    scaffold.close();
    Ok(())
}

fn run_forcing(matches: &ArgMatches) -> Result<(), String> {
    let config = ForcingConfig::from_matches(matches)?;
    info!(input = %config.input.display(), "Loading time series table");

    let table = TimeSeriesTable::from_json_file(&config.input).map_err(|e| e.to_string())?;
    let writer = ForcingWriter::new(
        &config.output,
        FileMetadata::new(config.description, config.contact),
    );
    writer
        .write_point(config.location, &table)
        .map_err(|e| e.to_string())?;

    println!(
        "Wrote {} time steps to {}",
        table.len(),
        config.output.display()
    );
    Ok(())
}

fn run_magnitude(matches: &ArgMatches) -> Result<(), String> {
    let value = *matches
        .get_one::<f64>("value")
        .ok_or_else(|| "Missing argument: value".to_string())?;
    let from = matches
        .get_one::<String>("from")
        .ok_or_else(|| "Missing argument: from".to_string())?;
    let to = matches
        .get_one::<String>("to")
        .ok_or_else(|| "Missing argument: to".to_string())?;

    let converted = magnitude_conversion(value, from, to).map_err(|e| e.to_string())?;
    println!("{}", converted);
    Ok(())
}

fn build_cli() -> Command {
    Command::new("lsm_forcing")
        .version(crate_version!())
        .about("Land surface model forcing file writer and unit conversions")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v, -vv, -vvv)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("scaffold")
                .about("Create a gridded forcing file with a regular time axis")
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("FILE")
                        .help("Output NetCDF file")
                        .required(true),
                )
                .arg(
                    Arg::new("start")
                        .long("start")
                        .value_name("YYYY/MM/DD")
                        .help("First day of the time axis")
                        .required(true),
                )
                .arg(
                    Arg::new("end")
                        .long("end")
                        .value_name("YYYY/MM/DD")
                        .help("Last day of the time axis (midnight, inclusive)")
                        .required(true),
                )
                .arg(
                    Arg::new("time-step")
                        .long("time-step")
                        .value_name("SECONDS")
                        .help("Spacing of the time axis")
                        .default_value("1800")
                        .value_parser(value_parser!(i64)),
                )
                .arg(
                    Arg::new("ndim")
                        .long("ndim")
                        .value_name("N")
                        .help("Extent of the x, y and z axes")
                        .default_value("1")
                        .value_parser(value_parser!(usize)),
                )
                .arg(description_arg())
                .arg(contact_arg()),
        )
        .subcommand(
            Command::new("forcing")
                .about("Write a single-point forcing file from a JSON time series")
                .arg(
                    Arg::new("input")
                        .long("input")
                        .short('i')
                        .value_name("FILE")
                        .help("JSON array of records with a time field and one field per column")
                        .required(true),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("FILE")
                        .help("Output NetCDF file")
                        .required(true),
                )
                .arg(
                    Arg::new("lat")
                        .long("lat")
                        .value_name("DEGREES")
                        .help("Site latitude")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(f64)),
                )
                .arg(
                    Arg::new("lon")
                        .long("lon")
                        .value_name("DEGREES")
                        .help("Site longitude")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(f64)),
                )
                .arg(description_arg())
                .arg(contact_arg()),
        )
        .subcommand(
            Command::new("magnitude")
                .about("Rescale a value between SI prefixes")
                .arg(
                    Arg::new("value")
                        .value_name("VALUE")
                        .help("Value to convert")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(f64)),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .value_name("PREFIX")
                        .help("Current prefix symbol, e.g. k or \"\" for the base unit")
                        .required(true),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .value_name("PREFIX")
                        .help("Target prefix symbol")
                        .required(true),
                ),
        )
}

fn description_arg() -> Arg {
    Arg::new("description")
        .long("description")
        .value_name("TEXT")
        .help("Value of the description global attribute")
        .default_value("Land surface model forcing")
}

fn contact_arg() -> Arg {
    Arg::new("contact")
        .long("contact")
        .value_name("TEXT")
        .help("Value of the contact global attribute")
}
