//! Fixed schema of the forcing file: dimensions, coordinate variables and
//! data variables with their CF-style attributes.

use std::fmt;

/// Missing-value sentinel attached to every data variable
pub const MISSING_VALUE: f64 = -9999.0;

/// Height (m) written to `za_tq` and `za_uv`. The instrument heights of the
/// source sites are unknown; 28 m follows Wilkinson et al. (2012),
/// Biogeosciences, 9, 5373-5389.
pub const MEASUREMENT_HEIGHT: f64 = 28.0;

/// Named dimensions of the forcing grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dim {
    Time,
    Z,
    Y,
    X,
}

impl Dim {
    pub const ALL: [Dim; 4] = [Dim::Time, Dim::Z, Dim::Y, Dim::X];

    pub fn name(self) -> &'static str {
        match self {
            Dim::Time => "time",
            Dim::Z => "z",
            Dim::Y => "y",
            Dim::X => "x",
        }
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a data variable's values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// Column of the input time series table
    Column(&'static str),
    Latitude,
    Longitude,
    MeasurementHeight,
}

/// Declarative description of one data variable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableSpec {
    pub name: &'static str,
    pub dims: &'static [Dim],
    pub units: &'static str,
    pub long_name: &'static str,
    /// Written as the `CF_name` attribute
    pub cf_name: &'static str,
    pub source: ValueSource,
}

impl VariableSpec {
    pub fn dim_names(&self) -> Vec<&'static str> {
        self.dims.iter().map(|d| d.name()).collect()
    }
}

/// Coordinate variable labelling one dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateSpec {
    pub dim: Dim,
    pub long_name: &'static str,
}

pub const TIME_COORDINATE: CoordinateSpec = CoordinateSpec {
    dim: Dim::Time,
    long_name: "time",
};

pub const TIME_CALENDAR: &str = "standard";

pub const SPATIAL_COORDINATES: [CoordinateSpec; 3] = [
    CoordinateSpec {
        dim: Dim::Z,
        long_name: "z dimension",
    },
    CoordinateSpec {
        dim: Dim::Y,
        long_name: "y dimension",
    },
    CoordinateSpec {
        dim: Dim::X,
        long_name: "x dimension",
    },
];

const YX: &[Dim] = &[Dim::Y, Dim::X];
const TYX: &[Dim] = &[Dim::Time, Dim::Y, Dim::X];
const TZYX: &[Dim] = &[Dim::Time, Dim::Z, Dim::Y, Dim::X];

/// Data variables of a forcing file, in declaration order
pub static FORCING_VARIABLES: [VariableSpec; 12] = [
    VariableSpec {
        name: "latitude",
        dims: YX,
        units: "degrees_north",
        long_name: "Latitude",
        cf_name: "latitude",
        source: ValueSource::Latitude,
    },
    VariableSpec {
        name: "longitude",
        dims: YX,
        units: "degrees_east",
        long_name: "Longitude",
        cf_name: "longitude",
        source: ValueSource::Longitude,
    },
    VariableSpec {
        name: "SWdown",
        dims: TYX,
        units: "W/m^2",
        long_name: "Surface incident shortwave radiation",
        cf_name: "surface_downwelling_shortwave_flux_in_air",
        source: ValueSource::Column("Swdown"),
    },
    VariableSpec {
        name: "Tair",
        dims: TYX,
        units: "K",
        long_name: "Near surface air temperature",
        cf_name: "surface_temperature",
        source: ValueSource::Column("Tair"),
    },
    VariableSpec {
        name: "Precip",
        dims: TYX,
        units: "mm/s",
        long_name: "Rainfall rate",
        cf_name: "precipitation_flux",
        source: ValueSource::Column("Rainf"),
    },
    VariableSpec {
        name: "Qair",
        dims: TYX,
        units: "kg/kg",
        long_name: "Near surface specific humidity",
        cf_name: "surface_specific_humidity",
        source: ValueSource::Column("Qair"),
    },
    VariableSpec {
        name: "Wind",
        dims: TYX,
        units: "m/s",
        long_name: "Scalar windspeed",
        cf_name: "wind_speed",
        source: ValueSource::Column("Wind"),
    },
    VariableSpec {
        name: "Psurf",
        dims: TYX,
        units: "Pa",
        long_name: "Surface air pressure",
        cf_name: "surface_air_pressure",
        source: ValueSource::Column("Psurf"),
    },
    VariableSpec {
        name: "LWdown",
        dims: TYX,
        units: "W/m^2",
        long_name: "Surface incident longwave radiation",
        cf_name: "surface_downwelling_longwave_flux_in_air",
        source: ValueSource::Column("LWdown"),
    },
    VariableSpec {
        name: "CO2air",
        dims: TZYX,
        units: "ppm",
        long_name: "",
        cf_name: "",
        source: ValueSource::Column("CO2air"),
    },
    VariableSpec {
        name: "za_tq",
        dims: YX,
        units: "m",
        long_name: "level of lowest atmospheric model layer",
        cf_name: "height",
        source: ValueSource::MeasurementHeight,
    },
    VariableSpec {
        name: "za_uv",
        dims: YX,
        units: "m",
        long_name: "level of lowest atmospheric model layer",
        cf_name: "height",
        source: ValueSource::MeasurementHeight,
    },
];

/// Look up a data variable by its output name
pub fn find_variable(name: &str) -> Option<&'static VariableSpec> {
    FORCING_VARIABLES.iter().find(|spec| spec.name == name)
}

/// Table columns a full forcing file needs, in declaration order
pub fn required_columns() -> impl Iterator<Item = &'static str> {
    FORCING_VARIABLES.iter().filter_map(|spec| match spec.source {
        ValueSource::Column(column) => Some(column),
        _ => None,
    })
}
