//! Command-line interface for generating, editing and exporting a city grid

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use clap::Parser;

use crate::io::configuration::{
    DEFAULT_EXPORT_SCALE, DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH, MAX_OBJECTS,
};
use crate::io::error::{CityError, Result, invalid_parameter};
use crate::io::image::export_minimap;
use crate::model::city::{CityConfig, CityModel};
use crate::model::edits::{BrushSize, Edit, TerrainEdit};
use crate::model::shared::SharedCity;
use crate::objects::kinds::ObjectKind;
use crate::terrain::types::TerrainType;

#[derive(Parser, Debug)]
#[command(name = "citygrid")]
#[command(
    author,
    version,
    about = "Generate an isometric city grid, apply edits and export a minimap"
)]
/// Command-line arguments for the city grid tool
pub struct Cli {
    /// Grid width in tiles
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Grid height in tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Size of the object identifier pool
    #[arg(long, default_value_t = MAX_OBJECTS)]
    pub max_objects: usize,

    /// Fill the whole grid with one terrain instead of generating it
    #[arg(short, long, value_name = "TERRAIN")]
    pub fill: Option<TerrainType>,

    /// Fill a rectangle: `r0,c0,r1,c1:terrain[:noblend]`
    #[arg(short, long, value_name = "REGION")]
    pub paint: Vec<PaintArg>,

    /// Paint with a square brush: `r,c:size:terrain` where size is 1x1, 3x3 or 5x5
    #[arg(short, long, value_name = "STROKE")]
    pub brush: Vec<BrushArg>,

    /// Place an object: `r,c:kind`
    #[arg(short, long, value_name = "PLACEMENT")]
    pub object: Vec<ObjectArg>,

    /// Write a PNG minimap to this path
    #[arg(long, value_name = "PNG")]
    pub output: Option<PathBuf>,

    /// Pixels per tile in the minimap
    #[arg(long, default_value_t = DEFAULT_EXPORT_SCALE)]
    pub scale: u32,

    /// Spread the edits over this many update cycles
    #[arg(long, default_value_t = 1)]
    pub cycles: usize,

    /// Suppress the summary output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Rectangle fill given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintArg {
    /// First corner
    pub first: (usize, usize),
    /// Opposite corner
    pub second: (usize, usize),
    /// Terrain written to the rectangle
    pub terrain: TerrainType,
    /// Whether corner blending stays enabled
    pub blend: bool,
}

impl FromStr for PaintArg {
    type Err = CityError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(':');
        let corners = parse_numbers::<4>(parts.next().unwrap_or_default(), "paint")?;
        let terrain = parts
            .next()
            .ok_or_else(|| invalid_parameter("paint", &s, &"missing terrain"))?
            .parse()?;
        let blend = match parts.next() {
            None => true,
            Some("noblend") => false,
            Some(other) => {
                return Err(invalid_parameter("paint", &other, &"expected 'noblend'"));
            }
        };

        let [r0, c0, r1, c1] = corners;
        Ok(Self {
            first: (r0, c0),
            second: (r1, c1),
            terrain,
            blend,
        })
    }
}

/// Brush stroke given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushArg {
    /// Centre tile
    pub center: (usize, usize),
    /// Brush size
    pub size: BrushSize,
    /// Terrain painted
    pub terrain: TerrainType,
}

impl FromStr for BrushArg {
    type Err = CityError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        let [center, size, terrain] = parts.as_slice() else {
            return Err(invalid_parameter("brush", &s, &"expected r,c:size:terrain"));
        };
        let [row, col] = parse_numbers::<2>(center, "brush")?;
        Ok(Self {
            center: (row, col),
            size: size.parse()?,
            terrain: terrain.parse()?,
        })
    }
}

/// Object placement given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectArg {
    /// Anchor row
    pub row: usize,
    /// Anchor column
    pub col: usize,
    /// Kind of object
    pub kind: ObjectKind,
}

impl FromStr for ObjectArg {
    type Err = CityError;

    fn from_str(s: &str) -> Result<Self> {
        let (position, kind) = s
            .split_once(':')
            .ok_or_else(|| invalid_parameter("object", &s, &"expected r,c:kind"))?;
        let [row, col] = parse_numbers::<2>(position, "object")?;
        Ok(Self {
            row,
            col,
            kind: kind.parse()?,
        })
    }
}

fn parse_numbers<const N: usize>(text: &str, parameter: &'static str) -> Result<[usize; N]> {
    let values = text
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .map_err(|e| invalid_parameter(parameter, &part, &e))
        })
        .collect::<Result<Vec<_>>>()?;
    <[usize; N]>::try_from(values).map_err(|values| {
        invalid_parameter(
            parameter,
            &text,
            &format!("expected {N} numbers, got {}", values.len()),
        )
    })
}

/// Results of one command-line run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Edits that changed the city
    pub applied: usize,
    /// Edits that were refused
    pub rejected: usize,
    /// Objects placed in the city
    pub objects: usize,
    /// Render slices in the slice list
    pub slices: usize,
    /// Update cycles that were run
    pub cycles: usize,
    /// Total time spent applying the edits
    pub update_time: Duration,
    /// Rolling average duration of one update cycle
    pub average_update_time: Duration,
}

/// Builds a city from command-line arguments and runs the queued edits
pub struct CityRunner {
    cli: Cli,
}

impl CityRunner {
    /// Create a runner for parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Model configuration described by the arguments
    pub const fn config(&self) -> CityConfig {
        let config = CityConfig::new(self.cli.width, self.cli.height)
            .with_seed(self.cli.seed)
            .with_max_objects(self.cli.max_objects);
        match self.cli.fill {
            Some(terrain) => config.with_uniform_terrain(terrain),
            None => config,
        }
    }

    /// Edits described by the arguments, in application order
    pub fn edits(&self) -> Vec<Edit> {
        let paints = self.cli.paint.iter().map(|paint| {
            Edit::from(TerrainEdit::rect(
                paint.first,
                paint.second,
                paint.terrain,
                paint.blend,
            ))
        });
        let brushes = self.cli.brush.iter().map(|stroke| {
            Edit::from(TerrainEdit::brush(
                stroke.center,
                stroke.size,
                self.cli.height,
                self.cli.width,
                stroke.terrain,
                true,
            ))
        });
        let objects = self.cli.object.iter().map(|object| Edit::PlaceObject {
            row: object.row,
            col: object.col,
            kind: object.kind,
        });
        paints.chain(brushes).chain(objects).collect()
    }

    /// Build the city, apply the edits over the requested cycles and export
    ///
    /// Edits are split into consecutive batches, one batch submitted before
    /// each update cycle.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or cycle count is invalid, or
    /// the minimap cannot be written
    pub fn run(&self) -> Result<(CityModel, RunSummary)> {
        if self.cli.cycles == 0 {
            return Err(invalid_parameter(
                "cycles",
                &self.cli.cycles,
                &"must be at least 1",
            ));
        }

        let city = SharedCity::new(CityModel::with_config(self.config())?);
        let edits = self.edits();
        let batch_size = edits.len().div_ceil(self.cli.cycles).max(1);
        let mut batches = edits.chunks(batch_size);

        let mut applied = 0;
        let mut rejected = 0;
        let mut update_time = Duration::ZERO;
        for _ in 0..self.cli.cycles {
            for edit in batches.next().unwrap_or_default() {
                city.submit(*edit);
            }
            let report = city.update();
            applied += report.applied;
            rejected += report.rejected;
            update_time += report.elapsed;
        }
        let average_update_time = city.average_update_time();
        let model = city.into_inner();

        if let Some(path) = &self.cli.output {
            export_minimap(&model, self.cli.scale, path)?;
        }

        let summary = RunSummary {
            applied,
            rejected,
            objects: model.object_count(),
            slices: model.slices().len(),
            cycles: self.cli.cycles,
            update_time,
            average_update_time,
        };

        if !self.cli.quiet {
            log::info!(
                "{}x{} city: {} edits applied, {} rejected, {} objects in {} slices",
                model.width(),
                model.height(),
                summary.applied,
                summary.rejected,
                summary.objects,
                summary.slices,
            );
            log::info!(
                "{} update cycles took {:?} (average {:?})",
                summary.cycles,
                summary.update_time,
                summary.average_update_time
            );
        }

        Ok((model, summary))
    }
}
