//! Copying a submap window out of the circular buffer.

use log::debug;

use crate::error::Result;
use crate::grid::{GridMap, buffer_regions};

use super::geometry::SubmapGeometry;

/// Copy the window described by `geometry` out of `map`.
///
/// The window is split into contiguous source blocks and each block is copied
/// to its corner of the output, so the result is unwrapped (start index zero)
/// regardless of where the source buffer currently starts.
pub fn extract_submap(map: &GridMap, geometry: &SubmapGeometry) -> Result<GridMap> {
    let regions = buffer_regions(geometry.top_left_index, geometry.size, map.size())?;

    let mut submap = GridMap::new(map.layers().iter().cloned());
    submap.set_basic_layers(map.basic_layers().iter().cloned());
    submap.set_timestamp(map.timestamp());
    submap.set_frame_id(map.frame_id());
    submap.set_geometry_from_submap(geometry);

    for layer in map.layers() {
        let source = map.get(layer)?;
        let mut target = submap.get_mut(layer)?;
        for region in &regions {
            target.copy_block(
                region.destination_index(geometry.size),
                source,
                region.index,
                region.size,
            );
        }
    }

    debug!(
        "Extracted {}x{} submap from {} regions across {} layers",
        geometry.size.rows,
        geometry.size.cols,
        regions.len(),
        map.layers().len()
    );

    Ok(submap)
}
