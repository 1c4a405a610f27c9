/// Default page size for administrative listings
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Radius drawn around every dip tank on the map, in meters
pub const DIP_TANK_RADIUS_METERS: u32 = 5000;

/// Characters of update content shown in list previews
pub const CONTENT_PREVIEW_CHARS: usize = 200;

/// Featured updates shown on the home page
pub const HOME_FEATURED_UPDATES: i64 = 3;

/// Updates shown on the public updates page
pub const UPDATES_PAGE_LIMIT: i64 = 20;

/// Attribution used when an editor leaves the source blank
pub const DEFAULT_SOURCE: &str = "Ministry of Agriculture";

/// Attribution stored on write; blank input falls back to [`DEFAULT_SOURCE`]
pub fn source_or_default(source: Option<&str>) -> String {
    source
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SOURCE)
        .to_string()
}
