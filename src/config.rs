use crate::data_io::{GridLocation, TimeRange};
use clap::ArgMatches;
use std::path::PathBuf;

/// Defaults for command-line settings
#[derive(Clone, Debug)]
pub struct Constants {
    /// Default extent of the x, y and z axes of a scaffold
    pub ndim: usize,
    /// Default scaffold time step (s), half-hourly flux tower data
    pub time_step_seconds: i64,
    /// Contact written when none is given
    pub contact: String,
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            ndim: 1,
            time_step_seconds: 1800,
            contact: "unknown".to_string(),
        }
    }
}

/// Settings for `scaffold`
#[derive(Clone, Debug)]
pub struct ScaffoldConfig {
    pub output: PathBuf,
    pub description: String,
    pub contact: String,
    pub range: TimeRange,
    pub time_step_seconds: i64,
    pub ndim: usize,
}

impl ScaffoldConfig {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, String> {
        let constants = Constants::default();

        let output = PathBuf::from(required(matches, "output")?);
        let description = required(matches, "description")?.to_string();
        let contact = optional(matches, "contact").unwrap_or(constants.contact);
        let range = TimeRange::parse(required(matches, "start")?, required(matches, "end")?)
            .map_err(|e| e.to_string())?;
        let time_step_seconds = matches
            .get_one::<i64>("time-step")
            .copied()
            .unwrap_or(constants.time_step_seconds);
        let ndim = matches
            .get_one::<usize>("ndim")
            .copied()
            .unwrap_or(constants.ndim);

        let config = Self {
            output,
            description,
            contact,
            range,
            time_step_seconds,
            ndim,
        };
        config.validate()?;
        Ok(config)
    }

    /// An inverted date range is allowed and gives an empty time axis
    pub fn validate(&self) -> Result<(), String> {
        if self.time_step_seconds <= 0 {
            return Err("Time step must be positive".to_string());
        }
        if self.ndim == 0 {
            return Err("Grid extent must be at least 1".to_string());
        }
        validate_output(&self.output)
    }
}

/// Settings for `forcing`
#[derive(Clone, Debug)]
pub struct ForcingConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub description: String,
    pub contact: String,
    pub location: GridLocation,
}

impl ForcingConfig {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, String> {
        let constants = Constants::default();

        let latitude = *matches
            .get_one::<f64>("lat")
            .ok_or_else(|| "Missing argument: lat".to_string())?;
        let longitude = *matches
            .get_one::<f64>("lon")
            .ok_or_else(|| "Missing argument: lon".to_string())?;

        let config = Self {
            input: PathBuf::from(required(matches, "input")?),
            output: PathBuf::from(required(matches, "output")?),
            description: required(matches, "description")?.to_string(),
            contact: optional(matches, "contact").unwrap_or(constants.contact),
            location: GridLocation::new(latitude, longitude),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        let GridLocation {
            latitude,
            longitude,
        } = self.location;
        if !(-90.0..=90.0).contains(&latitude) {
            return Err("Latitude must be between -90 and 90 degrees".to_string());
        }
        if !(-180.0..=360.0).contains(&longitude) {
            return Err("Longitude must be between -180 and 360 degrees".to_string());
        }
        if !self.input.is_file() {
            return Err(format!(
                "Input table does not exist: {}",
                self.input.display()
            ));
        }
        validate_output(&self.output)
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str, String> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| format!("Missing argument: {}", name))
}

fn optional(matches: &ArgMatches, name: &str) -> Option<String> {
    matches.get_one::<String>(name).cloned()
}

fn validate_output(output: &std::path::Path) -> Result<(), String> {
    match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => Err(format!(
            "Output directory does not exist: {}",
            dir.display()
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use clap::{value_parser, Arg, Command};

    fn scaffold_command() -> Command {
        Command::new("scaffold")
            .arg(Arg::new("output").long("output"))
            .arg(Arg::new("description").long("description"))
            .arg(Arg::new("contact").long("contact"))
            .arg(Arg::new("start").long("start"))
            .arg(Arg::new("end").long("end"))
            .arg(
                Arg::new("time-step")
                    .long("time-step")
                    .value_parser(value_parser!(i64)),
            )
            .arg(
                Arg::new("ndim")
                    .long("ndim")
                    .value_parser(value_parser!(usize)),
            )
    }

    #[test]
    fn test_constants_default() {
        let constants = Constants::default();
        assert_eq!(constants.ndim, 1);
        assert_eq!(constants.time_step_seconds, 1800);
    }

    #[test]
    fn test_scaffold_config_defaults() {
        let matches = scaffold_command().get_matches_from([
            "scaffold",
            "--output",
            "out.nc",
            "--description",
            "test",
            "--start",
            "2012/01/01",
            "--end",
            "2012/01/02",
        ]);
        let config = ScaffoldConfig::from_matches(&matches).unwrap();

        assert_eq!(config.range.start, NaiveDate::from_ymd_opt(2012, 1, 1).unwrap());
        assert_eq!(config.time_step_seconds, 1800);
        assert_eq!(config.ndim, 1);
        assert_eq!(config.contact, "unknown");
    }

    #[test]
    fn test_scaffold_config_rejects_bad_date() {
        let matches = scaffold_command().get_matches_from([
            "scaffold",
            "--output",
            "out.nc",
            "--description",
            "test",
            "--start",
            "01-01-2012",
            "--end",
            "2012/01/02",
        ]);
        assert!(ScaffoldConfig::from_matches(&matches).is_err());
    }

    #[test]
    fn test_scaffold_config_rejects_zero_step() {
        let matches = scaffold_command().get_matches_from([
            "scaffold",
            "--output",
            "out.nc",
            "--description",
            "test",
            "--start",
            "2012/01/01",
            "--end",
            "2012/01/02",
            "--time-step",
            "0",
        ]);
        let err = ScaffoldConfig::from_matches(&matches).unwrap_err();
        assert!(err.contains("Time step"));
    }

    #[test]
    fn test_output_directory_must_exist() {
        assert!(validate_output(std::path::Path::new("out.nc")).is_ok());
        assert!(validate_output(std::path::Path::new("/definitely/not/here/out.nc")).is_err());
    }
}
