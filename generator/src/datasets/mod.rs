//! Literal sample datasets behind the demo visualizations.
//!
//! Each dataset feeds one chart type. They are unrelated to each other;
//! the assembler only lines them up by row index.
//!
//! | Dataset    | Columns                                    | Rows |
//! |------------|--------------------------------------------|------|
//! | `scatter`  | scatter_x, scatter_y                       | 5    |
//! | `bar`      | bar_label, bar_val                         | 5    |
//! | `pie`      | pie_label, pie_val                         | 3    |
//! | `map`      | city, lat, lon, pop                        | 8    |
//! | `usa`      | state_id, state_name, state_val            | 50   |
//! | `strip`    | strip_x, strip_y                           | 9    |
//! | `violin`   | violin_y                                   | 15   |
//! | `features` | generic_x, generic_y_base                  | 7    |
//! | `sunburst` | sunburst_label, sunburst_parent, sunburst_val | 9 |

use crate::error::DatasetResult;
use crate::models::Dataset;

/// Output header, in dataset concatenation order.
pub const HEADER: [&str; 21] = [
    "scatter_x", "scatter_y", "bar_label", "bar_val", "pie_label", "pie_val",
    "city", "lat", "lon", "pop", "state_id", "state_name", "state_val",
    "strip_x", "strip_y", "violin_y", "generic_x", "generic_y_base",
    "sunburst_label", "sunburst_parent", "sunburst_val",
];

/// Dataset names in the order their columns appear in each row.
pub const ORDER: [&str; 9] = [
    "scatter", "bar", "pie", "map", "usa", "strip", "violin", "features", "sunburst",
];

const SCATTER: [(i64, i64); 5] = [(1, 2), (2, 3), (3, 5), (4, 4), (5, 7)];

const BAR: [(&str, i64); 5] = [("A", 10), ("B", 20), ("C", 15), ("D", 25), ("E", 30)];

const PIE: [(&str, i64); 3] = [("Product A", 300), ("Product B", 500), ("Product C", 100)];

const MAP: [(&str, f64, f64, i64); 8] = [
    ("London", 51.5074, -0.1278, 8908081),
    ("Paris", 48.8566, 2.3522, 2148271),
    ("Berlin", 52.5200, 13.4050, 3769495),
    ("Rome", 41.9028, 12.4964, 2873000),
    ("Madrid", 40.4168, -3.7038, 3223000),
    ("Tokyo", 35.6762, 139.6503, 13960000),
    ("New York", 40.7128, -74.0060, 8336817),
    ("Sydney", -33.8688, 151.2093, 5312000),
];

const USA: [(&str, &str, i64); 50] = [
    ("AL", "Alabama", 45), ("AK", "Alaska", 10), ("AZ", "Arizona", 78), ("AR", "Arkansas", 32),
    ("CA", "California", 95), ("CO", "Colorado", 67), ("CT", "Connecticut", 58), ("DE", "Delaware", 25),
    ("FL", "Florida", 88), ("GA", "Georgia", 72), ("HI", "Hawaii", 15), ("ID", "Idaho", 44),
    ("IL", "Illinois", 70), ("IN", "Indiana", 55), ("IA", "Iowa", 40), ("KS", "Kansas", 38),
    ("KY", "Kentucky", 48), ("LA", "Louisiana", 42), ("ME", "Maine", 22), ("MD", "Maryland", 65),
    ("MA", "Massachusetts", 80), ("MI", "Michigan", 68), ("MN", "Minnesota", 62), ("MS", "Mississippi", 30),
    ("MO", "Missouri", 52), ("MT", "Montana", 20), ("NE", "Nebraska", 35), ("NV", "Nevada", 12),
    ("NH", "New Hampshire", 28), ("NJ", "New Jersey", 85), ("NM", "New Mexico", 36), ("NY", "New York", 92),
    ("NC", "North Carolina", 74), ("ND", "North Dakota", 18), ("OH", "Ohio", 66), ("OK", "Oklahoma", 46),
    ("OR", "Oregon", 54), ("PA", "Pennsylvania", 76), ("RI", "Rhode Island", 24), ("SC", "South Carolina", 50),
    ("SD", "South Dakota", 16), ("TN", "Tennessee", 56), ("TX", "Texas", 82), ("UT", "Utah", 49),
    ("VT", "Vermont", 21), ("VA", "Virginia", 71), ("WA", "Washington", 64), ("WV", "West Virginia", 29),
    ("WI", "Wisconsin", 59), ("WY", "Wyoming", 14),
];

const STRIP: [(&str, i64); 9] = [
    ("A", 1), ("A", 2), ("A", 2), ("B", 3), ("B", 3), ("B", 3), ("A", 4), ("B", 4), ("A", 5),
];

const VIOLIN: [i64; 15] = [1, 2, 2, 3, 3, 3, 4, 4, 5, 5, 5, 5, 6, 6, 7];

const FEATURES: [(i64, i64); 7] = [(0, 0), (1, 1), (2, 0), (3, -1), (4, 0), (5, 1), (6, 0)];

// Empty parent marks the root.
const SUNBURST: [(&str, &str, i64); 9] = [
    ("Eve", "", 10), ("Cain", "Eve", 14), ("Seth", "Eve", 12), ("Enos", "Seth", 10),
    ("Noam", "Seth", 2), ("Abel", "Eve", 6), ("Awan", "Eve", 6), ("Enoch", "Awan", 4),
    ("Azura", "Eve", 4),
];

/// All datasets, in [`ORDER`].
pub fn all() -> DatasetResult<Vec<Dataset>> {
    Ok(vec![
        Dataset::new("scatter", &HEADER[0..2], SCATTER)?,
        Dataset::new("bar", &HEADER[2..4], BAR)?,
        Dataset::new("pie", &HEADER[4..6], PIE)?,
        Dataset::new("map", &HEADER[6..10], MAP)?,
        Dataset::new("usa", &HEADER[10..13], USA)?,
        Dataset::new("strip", &HEADER[13..15], STRIP)?,
        Dataset::new("violin", &HEADER[15..16], VIOLIN.map(|v| (v,)))?,
        Dataset::new("features", &HEADER[16..18], FEATURES)?,
        Dataset::new("sunburst", &HEADER[18..21], SUNBURST)?,
    ])
}

/// Look up one dataset by name.
pub fn by_name(name: &str) -> DatasetResult<Option<Dataset>> {
    Ok(all()?.into_iter().find(|ds| ds.name() == name))
}
