//! PNG minimap export of terrain, line overlays and placed objects

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::assets::{AssetProvider, AssetTable};
use crate::io::error::{CityError, Result, invalid_parameter};
use crate::model::city::CityModel;
use crate::terrain::mods::{Corner, LineAxis, TerrainMod, active_mods};
use crate::terrain::types::TerrainType;

/// Solid colour of tiles covered by an object
pub const OBJECT_COLOR: Rgba<u8> = Rgba([150, 40, 40, 255]);

/// Flat colour for a terrain type
pub const fn terrain_color(terrain: TerrainType) -> Rgba<u8> {
    match terrain {
        TerrainType::Grass => Rgba([96, 160, 64, 255]),
        TerrainType::TallGrass => Rgba([72, 140, 52, 255]),
        TerrainType::Dirt => Rgba([140, 104, 64, 255]),
        TerrainType::Sand => Rgba([220, 200, 140, 255]),
        TerrainType::Water => Rgba([56, 104, 200, 255]),
        TerrainType::Paved => Rgba([120, 120, 124, 255]),
        TerrainType::PavedLine => Rgba([104, 104, 108, 255]),
    }
}

/// Flat colour for a mod overlay
pub const fn mod_color(modifier: TerrainMod) -> Rgba<u8> {
    match modifier {
        TerrainMod::Decoration(_) => Rgba([200, 220, 90, 255]),
        TerrainMod::Rounded { target, .. } => terrain_color(target),
        TerrainMod::StraightLine(_)
        | TerrainMod::RoundedLine(_)
        | TerrainMod::SmoothedLine { .. } => Rgba([240, 240, 240, 255]),
    }
}

/// Palette used by the minimap exporter
pub fn minimap_palette() -> AssetTable<Rgba<u8>> {
    AssetTable::from_fn(terrain_color, mod_color)
}

/// Render the city with `scale` x `scale` pixels per tile
///
/// Each tile is filled with its terrain colour. Corner blends tint the
/// matching corner pixel and line overlays are drawn through the tile
/// centre. Tiles covered by an object use a solid object colour.
///
/// # Errors
///
/// Returns an error if `scale` is zero or the image would be too large
pub fn render_minimap(
    city: &CityModel,
    assets: &impl AssetProvider<Handle = Rgba<u8>>,
    scale: u32,
) -> Result<RgbaImage> {
    if scale == 0 {
        return Err(invalid_parameter("scale", &scale, &"must be at least 1"));
    }
    let too_large = || invalid_parameter("scale", &scale, &"image dimensions overflow");
    let width = u32::try_from(city.width())
        .ok()
        .and_then(|w| w.checked_mul(scale))
        .ok_or_else(too_large)?;
    let height = u32::try_from(city.height())
        .ok()
        .and_then(|h| h.checked_mul(scale))
        .ok_or_else(too_large)?;

    let mut img = ImageBuffer::new(width, height);

    for row in 0..city.height() {
        for col in 0..city.width() {
            let origin_x = col as u32 * scale;
            let origin_y = row as u32 * scale;

            let base = if city.object_id(row, col).is_some() {
                OBJECT_COLOR
            } else {
                *assets.terrain_asset(city.terrain(row, col))
            };
            for dy in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(origin_x + dx, origin_y + dy, base);
                }
            }

            if city.object_id(row, col).is_some() {
                continue;
            }

            for modifier in active_mods(city.mods(row, col)) {
                let color = *assets.mod_asset(modifier);
                for (dx, dy) in overlay_pixels(modifier, scale) {
                    img.put_pixel(origin_x + dx, origin_y + dy, color);
                }
            }
        }
    }

    Ok(img)
}

/// Pixels within a tile cell touched by an overlay
fn overlay_pixels(modifier: TerrainMod, scale: u32) -> Vec<(u32, u32)> {
    let last = scale - 1;
    let mid = scale / 2;
    let corner_pixel = |corner: Corner| match corner {
        Corner::TopLeft => (0, 0),
        Corner::TopRight => (last, 0),
        Corner::BottomRight => (last, last),
        Corner::BottomLeft => (0, last),
    };

    match modifier {
        TerrainMod::Decoration(_) => vec![(mid, mid)],
        TerrainMod::Rounded { corner, .. } => vec![corner_pixel(corner)],
        TerrainMod::StraightLine(axis) | TerrainMod::SmoothedLine { axis, .. } => (0..scale)
            .map(|step| match axis {
                LineAxis::Horizontal => (step, mid),
                LineAxis::Vertical => (mid, step),
            })
            .collect(),
        TerrainMod::RoundedLine(corner) => {
            let (corner_x, corner_y) = corner_pixel(corner);
            let horizontal = (corner_x.min(mid)..=corner_x.max(mid)).map(|x| (x, mid));
            let vertical = (corner_y.min(mid)..=corner_y.max(mid)).map(|y| (mid, y));
            horizontal.chain(vertical).collect()
        }
    }
}

/// Export the city as a PNG minimap
///
/// # Errors
///
/// Returns an error if:
/// - `scale` is zero or the image would be too large
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_minimap(city: &CityModel, scale: u32, output_path: &Path) -> Result<()> {
    let img = render_minimap(city, &minimap_palette(), scale)?;

    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| CityError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| CityError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    log::debug!("Exported minimap to {}", output_path.display());
    Ok(())
}
