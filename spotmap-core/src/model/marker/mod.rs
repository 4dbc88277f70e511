mod map_marker;
mod marker_ops;

pub use map_marker::{MapMarker, MarkerKind};
pub use marker_ops::{cluster_markers, listing_markers, markers_to_geojson, nearest_markers};
