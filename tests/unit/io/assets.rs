//! Tests for asset tables and the provider contract

#[cfg(test)]
mod tests {
    use citygrid::io::assets::{AssetProvider, AssetTable};
    use citygrid::terrain::mods::{Corner, LineAxis, MOD_COUNT, TerrainMod};
    use citygrid::terrain::types::TerrainType;

    fn id_table() -> AssetTable<usize> {
        AssetTable::from_fn(TerrainType::index, TerrainMod::id)
    }

    // Tests every terrain and mod resolves to the handle built for it
    // Verified by building mod handles in reverse order
    #[test]
    fn test_from_fn_indexes_by_id() {
        let table = id_table();

        for terrain in TerrainType::ALL {
            assert_eq!(*table.terrain_asset(terrain), terrain.index());
        }
        for id in 0..MOD_COUNT {
            let modifier = TerrainMod::from_id(id).expect("every id below MOD_COUNT is valid");
            assert_eq!(*table.mod_asset(modifier), id);
            assert_eq!(table.get_mod(modifier), Some(&id));
        }
    }

    // Tests tables with the wrong number of handles are refused
    // Verified by removing the mod length check
    #[test]
    fn test_from_parts_checks_lengths() {
        let terrain: Vec<u8> = vec![0; TerrainType::COUNT];
        let mods: Vec<u8> = vec![0; MOD_COUNT];
        assert!(AssetTable::from_parts(terrain.clone(), mods.clone()).is_ok());

        assert!(AssetTable::from_parts(vec![0; TerrainType::COUNT - 1], mods).is_err());
        assert!(AssetTable::from_parts(terrain, vec![0; MOD_COUNT + 1]).is_err());
    }

    // Tests the default overlay offset follows the mod geometry
    // Verified by returning a zero offset from the provider
    #[test]
    fn test_default_overlay_offset() {
        let table = id_table();
        let line = TerrainMod::StraightLine(LineAxis::Vertical);
        let bend = TerrainMod::RoundedLine(Corner::TopRight);

        assert_eq!(table.overlay_offset(line), line.overlay_offset());
        assert_eq!(table.overlay_offset(bend), [63, 15]);
        assert_eq!(table.get_terrain(TerrainType::Water), Some(&4));
    }
}
