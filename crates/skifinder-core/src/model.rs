// crates/skifinder-core/src/model.rs

use serde::{Deserialize, Serialize};

/// Photo width requested for grid cards.
pub const PHOTO_WIDTH_GRID: u32 = 400;
/// Photo width requested for the detail view.
pub const PHOTO_WIDTH_DETAIL: u32 = 800;

/// One review attached to a resort, as returned by the backend.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub author_name: String,
}

/// One search result.
///
/// Mirrors the backend's JSON shape (a Places-style record). Immutable once
/// parsed; the raw-results container is replaced wholesale on every search,
/// never patched in place. Fields the backend may omit carry defaults so a
/// sparse record still deserializes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResortRecord {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
    /// Opaque upstream identifier, unique within a result set. Used as the
    /// list/display key and for building map links.
    #[serde(default)]
    pub place_id: String,
    /// Kilometers from the query's reference point.
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub photo_ref: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl ResortRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn place_id(&self) -> &str {
        &self.place_id
    }

    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// URL for fetching the resort photo from the upstream mapping service.
    ///
    /// `None` when the record carries no photo reference or no API key is
    /// configured; the caller simply renders no image.
    pub fn photo_url(&self, max_width: u32, api_key: Option<&str>) -> Option<String> {
        let photo_ref = self.photo_ref.as_deref()?;
        let key = api_key?;
        Some(format!(
            "https://maps.googleapis.com/maps/api/place/photo?maxwidth={max_width}&photo_reference={photo_ref}&key={key}"
        ))
    }

    /// "View on map" link for the record's place id.
    pub fn map_url(&self) -> Option<String> {
        if self.place_id.is_empty() {
            return None;
        }
        Some(format!(
            "https://www.google.com/maps/place/?q=place_id:{}",
            self.place_id
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_record_deserializes_with_defaults() {
        let json = r#"{"name": "Stowe Mountain Resort", "address": "7412 Mountain Road, Stowe, VT 05672"}"#;
        let r: ResortRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.name(), "Stowe Mountain Resort");
        assert_eq!(r.rating(), 0.0);
        assert!(r.reviews().is_empty());
        assert!(r.website().is_none());
        assert!(r.map_url().is_none());
    }

    #[test]
    fn photo_url_requires_ref_and_key() {
        let mut r: ResortRecord =
            serde_json::from_str(r#"{"name": "Mount Snow", "address": "West Dover, VT"}"#).unwrap();
        assert!(r.photo_url(PHOTO_WIDTH_GRID, Some("k")).is_none());

        r.photo_ref = Some("abc123".into());
        assert!(r.photo_url(PHOTO_WIDTH_GRID, None).is_none());

        let url = r.photo_url(PHOTO_WIDTH_GRID, Some("k")).unwrap();
        assert!(url.contains("maxwidth=400"));
        assert!(url.contains("photo_reference=abc123"));
    }
}
