use chrono::DateTime;
use quakemap_types::geo::GeoPoint2d;
use quakemap_types::NewGeoPoint;

use crate::feature::EarthquakeEvent;
use crate::primitives::StyledMarker;
use crate::style::{color_for_magnitude, radius_for_magnitude};
use crate::symbol::Symbol;

/// Renders an earthquake as a circle colored and sized by its magnitude.
#[derive(Debug, Clone, Copy)]
pub struct EarthquakeSymbol {
    /// Opacity of the marker fill.
    pub fill_opacity: f64,
}

impl Default for EarthquakeSymbol {
    fn default() -> Self {
        Self { fill_opacity: 1.0 }
    }
}

impl Symbol<EarthquakeEvent> for EarthquakeSymbol {
    type Primitive = StyledMarker;

    fn render(&self, event: &EarthquakeEvent) -> StyledMarker {
        let color = color_for_magnitude(event.magnitude);

        StyledMarker {
            position: GeoPoint2d::latlon(event.latitude, event.longitude),
            color,
            fill_color: color,
            fill_opacity: self.fill_opacity,
            radius: radius_for_magnitude(event.magnitude),
            popup: popup_html(event),
        }
    }
}

fn popup_html(event: &EarthquakeEvent) -> String {
    format!(
        "<h3>{}</h3><hr><p>{}</p><hr><p>Magnitude: {}</p>",
        escape_html(&event.place),
        format_event_time(event.timestamp),
        event.magnitude
    )
}

/// Formats epoch milliseconds the way browsers print a `Date` in UTC, e.g.
/// `Thu Jan 01 1970 00:00:00 GMT+0000 (Coordinated Universal Time)`. Out of range values give
/// `Invalid Date`.
pub fn format_event_time(timestamp: i64) -> String {
    match DateTime::from_timestamp_millis(timestamp) {
        Some(time) => time
            .format("%a %b %d %Y %H:%M:%S GMT%z (Coordinated Universal Time)")
            .to_string(),
        None => "Invalid Date".to_string(),
    }
}

/// Escapes the characters with a special meaning in HTML text and attribute values.
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use quakemap_types::GeoPoint;

    use super::*;
    use crate::symbol::to_marker;
    use crate::Color;

    fn event(magnitude: f64, place: &str, timestamp: i64) -> EarthquakeEvent {
        EarthquakeEvent {
            longitude: -122.4,
            latitude: 37.8,
            magnitude,
            place: place.to_string(),
            timestamp,
        }
    }

    #[test]
    fn marker_swaps_source_coordinates() {
        let marker = to_marker(&event(3.2, "X", 0));

        assert_eq!(marker.position.lat(), 37.8);
        assert_eq!(marker.position.lon(), -122.4);
        assert_relative_eq!(marker.radius, 12.8);
        assert_eq!(marker.color, Color::GOLD);
        assert_eq!(marker.fill_color, Color::GOLD);
        assert_eq!(marker.fill_opacity, 1.0);
        assert!(marker.popup.contains('X'));
        assert!(marker.popup.contains("3.2"));
    }

    #[test]
    fn popup_lists_place_date_and_magnitude() {
        let marker = to_marker(&event(5.0, "10km SSW of Ridgecrest, CA", 0));
        insta::assert_snapshot!(
            marker.popup,
            @"<h3>10km SSW of Ridgecrest, CA</h3><hr><p>Thu Jan 01 1970 00:00:00 GMT+0000 (Coordinated Universal Time)</p><hr><p>Magnitude: 5</p>"
        );
    }

    #[test]
    fn popup_escapes_place() {
        let marker = to_marker(&event(1.0, "<b>Tom & Jerry</b>", 0));
        assert!(marker.popup.starts_with("<h3>&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;</h3>"));
    }

    #[test]
    fn event_time_formatting() {
        assert_eq!(
            format_event_time(1_700_000_000_000),
            "Tue Nov 14 2023 22:13:20 GMT+0000 (Coordinated Universal Time)"
        );
        assert_eq!(format_event_time(i64::MAX), "Invalid Date");
    }

    #[test]
    fn degenerate_magnitudes_are_passed_through() {
        let marker = to_marker(&event(-0.4, "", 0));
        assert_relative_eq!(marker.radius, -1.6);
        assert_eq!(marker.color, Color::GREEN_YELLOW);
    }
}
