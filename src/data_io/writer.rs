//! NetCDF writer for land surface model forcing files.
//!
//! Two entry points share the same schema:
//! - [`ForcingWriter::scaffold`] lays out the global attributes, a regular
//!   time axis and the spatial axes, then hands the open file to the caller.
//! - [`ForcingWriter::write_point`] writes a complete single-site file from a
//!   [`TimeSeriesTable`] and closes it.

use super::metadata::{FileMetadata, GridLocation};
use super::schema::{
    find_variable, required_columns, Dim, ValueSource, VariableSpec, FORCING_VARIABLES,
    MEASUREMENT_HEIGHT, MISSING_VALUE, SPATIAL_COORDINATES, TIME_CALENDAR, TIME_COORDINATE,
};
use super::table::TimeSeriesTable;
use super::time_axis::{elapsed_seconds, time_units, TimeRange};
use super::WriteError;
use chrono::NaiveDateTime;
use ndarray::{Array, Array1, ErrorKind, IxDyn, ShapeError};
use netcdf::{FileMut, VariableMut};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Grid extent of a single-site file
const POINT_GRID: usize = 1;

/// Writer for one forcing file
#[derive(Debug, Clone)]
pub struct ForcingWriter {
    file_path: PathBuf,
    metadata: FileMetadata,
}

impl ForcingWriter {
    pub fn new(file_path: impl AsRef<Path>, metadata: FileMetadata) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
            metadata,
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn metadata(&self) -> &FileMetadata {
        &self.metadata
    }

    /// Create the file with global attributes, a regular time axis over
    /// `range` and x/y/z axes of extent `ndim`. No data variables are
    /// declared and the spatial coordinates are left unpopulated.
    ///
    /// The returned scaffold owns the open file; the caller must close it.
    pub fn scaffold(
        &self,
        range: &TimeRange,
        time_step_seconds: i64,
        ndim: usize,
    ) -> Result<ForcingScaffold, WriteError> {
        if ndim == 0 {
            return Err(WriteError::InvalidGridExtent(ndim));
        }
        let times = range.regular_axis(time_step_seconds)?;

        info!(
            path = %self.file_path.display(),
            time_steps = times.len(),
            ndim,
            "Creating forcing scaffold"
        );

        let mut file = netcdf::create(&self.file_path)?;
        write_global_attributes(&mut file, &self.metadata)?;
        declare_time_axis(&mut file, range.start_time(), &times)?;
        declare_spatial_axes(&mut file, ndim)?;

        Ok(ForcingScaffold {
            file,
            file_path: self.file_path.clone(),
            time_len: times.len(),
            ndim,
        })
    }

    /// Write a complete single-site forcing file and close it.
    ///
    /// The time coordinate holds the seconds elapsed since the first record,
    /// so gaps in the table stay gaps in the file. Every column named by the
    /// schema must be present in every record.
    pub fn write_point(
        &self,
        location: GridLocation,
        table: &TimeSeriesTable,
    ) -> Result<(), WriteError> {
        let origin = table.first_time().ok_or(WriteError::EmptyTable)?;
        let times = elapsed_seconds(&table.timestamps());
        let mut columns = collect_columns(table)?;

        info!(
            path = %self.file_path.display(),
            records = times.len(),
            latitude = location.latitude,
            longitude = location.longitude,
            "Writing forcing file"
        );

        // dropping the handle closes the file on every exit path
        let mut file = netcdf::create(&self.file_path)?;
        write_global_attributes(&mut file, &self.metadata)?;
        declare_time_axis(&mut file, origin, &times)?;
        declare_spatial_axes(&mut file, POINT_GRID)?;
        for spec in FORCING_VARIABLES.iter() {
            declare_variable(&mut file, spec)?;
        }

        let placeholder = vec![POINT_GRID as f64; POINT_GRID];
        put_spatial_coordinates(&mut file, &placeholder, &placeholder, &placeholder)?;

        let time_len = times.len();
        for spec in FORCING_VARIABLES.iter() {
            let values = match spec.source {
                ValueSource::Column(column) => {
                    let series = columns
                        .remove(column)
                        .ok_or_else(|| WriteError::UnknownVariable(column.to_string()))?;
                    reshape_series(series, spec, time_len, POINT_GRID)?
                }
                ValueSource::Latitude => fill_grid(spec, time_len, POINT_GRID, location.latitude),
                ValueSource::Longitude => fill_grid(spec, time_len, POINT_GRID, location.longitude),
                ValueSource::MeasurementHeight => {
                    fill_grid(spec, time_len, POINT_GRID, MEASUREMENT_HEIGHT)
                }
            };
            put_variable(&mut file, spec, &values, time_len, POINT_GRID)?;
            debug!(variable = spec.name, values = values.len(), "Wrote variable");
        }

        drop(file);
        info!(path = %self.file_path.display(), "Closed forcing file");
        Ok(())
    }
}

/// Open forcing file returned by [`ForcingWriter::scaffold`].
///
/// The caller owns the underlying NetCDF handle and is responsible for
/// closing it with [`ForcingScaffold::close`] (or by dropping the scaffold).
#[must_use = "the scaffold owns an open file; call `close` when finished"]
pub struct ForcingScaffold {
    file: FileMut,
    file_path: PathBuf,
    time_len: usize,
    ndim: usize,
}

impl std::fmt::Debug for ForcingScaffold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForcingScaffold")
            .field("file_path", &self.file_path)
            .field("time_len", &self.time_len)
            .field("ndim", &self.ndim)
            .finish()
    }
}

impl ForcingScaffold {
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Number of steps on the time axis
    pub fn time_len(&self) -> usize {
        self.time_len
    }

    /// Extent of each of the x, y and z axes
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// Direct access to the open file for writes outside the schema
    pub fn file_mut(&mut self) -> &mut FileMut {
        &mut self.file
    }

    /// Fill the x, y and z coordinate variables
    pub fn put_coordinates(&mut self, x: &[f64], y: &[f64], z: &[f64]) -> Result<(), WriteError> {
        for (dim, values) in [(Dim::X, x), (Dim::Y, y), (Dim::Z, z)] {
            if values.len() != self.ndim {
                return Err(WriteError::LengthMismatch {
                    variable: dim.name().to_string(),
                    expected: self.ndim,
                    found: values.len(),
                });
            }
        }
        put_spatial_coordinates(&mut self.file, x, y, z)
    }

    /// Declare every data variable of the forcing schema
    pub fn declare_forcing_variables(&mut self) -> Result<(), WriteError> {
        for spec in FORCING_VARIABLES.iter() {
            declare_variable(&mut self.file, spec)?;
        }
        Ok(())
    }

    /// Write all values of a declared schema variable. `values` is the
    /// row-major flattening of the variable's grid, e.g. `time * y * x`
    /// values for `Tair`.
    pub fn put_series(&mut self, name: &str, values: &[f64]) -> Result<(), WriteError> {
        let spec = find_variable(name).ok_or_else(|| WriteError::UnknownVariable(name.to_string()))?;
        put_variable(&mut self.file, spec, values, self.time_len, self.ndim)
    }

    /// Flush and close the file
    pub fn close(self) {
        let Self {
            file, file_path, ..
        } = self;
        drop(file);
        info!(path = %file_path.display(), "Closed forcing scaffold");
    }
}

fn write_global_attributes(file: &mut FileMut, metadata: &FileMetadata) -> Result<(), WriteError> {
    for (name, value) in metadata.attributes() {
        file.add_attribute(name, value)?;
    }
    Ok(())
}

/// Unlimited time dimension plus its coordinate variable
fn declare_time_axis(
    file: &mut FileMut,
    origin: NaiveDateTime,
    times: &[f64],
) -> Result<(), WriteError> {
    let name = TIME_COORDINATE.dim.name();
    file.add_unlimited_dimension(name)?;

    let mut time_var = file.add_variable::<f64>(name, &[name])?;
    time_var.put_attribute("units", time_units(origin))?;
    time_var.put_attribute("long_name", TIME_COORDINATE.long_name)?;
    time_var.put_attribute("calendar", TIME_CALENDAR)?;

    if !times.is_empty() {
        time_var.put_values(times, 0..times.len())?;
    }
    Ok(())
}

fn declare_spatial_axes(file: &mut FileMut, ndim: usize) -> Result<(), WriteError> {
    for coordinate in SPATIAL_COORDINATES.iter() {
        file.add_dimension(coordinate.dim.name(), ndim)?;
    }
    for coordinate in SPATIAL_COORDINATES.iter() {
        let name = coordinate.dim.name();
        let mut var = file.add_variable::<f64>(name, &[name])?;
        var.put_attribute("long_name", coordinate.long_name)?;
    }
    Ok(())
}

fn put_spatial_coordinates(
    file: &mut FileMut,
    x: &[f64],
    y: &[f64],
    z: &[f64],
) -> Result<(), WriteError> {
    for (dim, values) in [(Dim::X, x), (Dim::Y, y), (Dim::Z, z)] {
        let mut var = variable_mut(file, dim.name())?;
        var.put_values(values, 0..values.len())?;
    }
    Ok(())
}

fn declare_variable(file: &mut FileMut, spec: &VariableSpec) -> Result<(), WriteError> {
    let mut var = file.add_variable::<f64>(spec.name, &spec.dim_names())?;
    var.put_attribute("units", spec.units)?;
    var.put_attribute("missing_value", MISSING_VALUE)?;
    var.put_attribute("long_name", spec.long_name)?;
    var.put_attribute("CF_name", spec.cf_name)?;
    Ok(())
}

fn variable_mut<'f>(file: &'f mut FileMut, name: &str) -> Result<VariableMut<'f>, WriteError> {
    file.variable_mut(name)
        .ok_or_else(|| WriteError::UnknownVariable(name.to_string()))
}

/// Extent of each axis of `spec` on a grid with `time_len` steps
fn grid_shape(spec: &VariableSpec, time_len: usize, ndim: usize) -> Vec<usize> {
    spec.dims
        .iter()
        .map(|dim| match dim {
            Dim::Time => time_len,
            Dim::Z | Dim::Y | Dim::X => ndim,
        })
        .collect()
}

/// Place a per-timestep series of a single site onto the variable's grid
fn reshape_series(
    series: Array1<f64>,
    spec: &VariableSpec,
    time_len: usize,
    ndim: usize,
) -> Result<Vec<f64>, WriteError> {
    let shape = grid_shape(spec, time_len, ndim);
    let expected: usize = shape.iter().product();
    if series.len() != expected {
        return Err(WriteError::LengthMismatch {
            variable: spec.name.to_string(),
            expected,
            found: series.len(),
        });
    }
    Ok(series.into_shape(IxDyn(&shape))?.into_raw_vec())
}

/// Constant field covering the variable's grid
fn fill_grid(spec: &VariableSpec, time_len: usize, ndim: usize, value: f64) -> Vec<f64> {
    Array::from_elem(IxDyn(&grid_shape(spec, time_len, ndim)), value).into_raw_vec()
}

fn put_variable(
    file: &mut FileMut,
    spec: &VariableSpec,
    values: &[f64],
    time_len: usize,
    ndim: usize,
) -> Result<(), WriteError> {
    let shape = grid_shape(spec, time_len, ndim);
    let expected: usize = shape.iter().product();
    if values.len() != expected {
        return Err(WriteError::LengthMismatch {
            variable: spec.name.to_string(),
            expected,
            found: values.len(),
        });
    }
    if values.is_empty() {
        return Ok(());
    }

    let mut var = variable_mut(file, spec.name)?;
    match shape[..] {
        [a] => var.put_values(values, 0..a)?,
        [a, b] => var.put_values(values, (0..a, 0..b))?,
        [a, b, c] => var.put_values(values, (0..a, 0..b, 0..c))?,
        [a, b, c, d] => var.put_values(values, (0..a, 0..b, 0..c, 0..d))?,
        _ => return Err(ShapeError::from_kind(ErrorKind::IncompatibleShape).into()),
    }
    Ok(())
}

/// Pull every schema column out of the table before anything is written
fn collect_columns(
    table: &TimeSeriesTable,
) -> Result<HashMap<&'static str, Array1<f64>>, WriteError> {
    required_columns()
        .map(|column| Ok::<_, WriteError>((column, table.column(column)?)))
        .collect()
}
