use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Track colours
// ---------------------------------------------------------------------------

/// Conventional hue (degrees) for well-known curve families, matched on the
/// whole family mnemonic.
const CURVE_HUES: &[(&str, f32)] = &[
    ("GR", 120.0),   // gamma ray: green
    ("SP", 200.0),   // spontaneous potential: cyan-blue
    ("CALI", 40.0),  // caliper: amber
    ("RHOB", 0.0),   // density: red
    ("DEN", 0.0),
    ("NPHI", 230.0), // neutron: blue
    ("NEU", 230.0),
    ("DT", 280.0),   // sonic: purple
    ("RT", 330.0),   // resistivity: magenta
    ("RES", 330.0),
    ("ILD", 330.0),
    ("LLD", 330.0),
    ("PE", 60.0),    // photo-electric: yellow
    ("PEF", 60.0),
];

/// Smallest hue distance (degrees) between two tracks of one figure.
const MIN_HUE_GAP: f32 = 20.0;

/// Step used to move a clashing hue along the wheel.
const GOLDEN_ANGLE: f32 = 137.508;

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Family part of a mnemonic: text before a `_` or `:` suffix, minus any
/// trailing run number. `GR_EDTC`, `GR:2` and `RT90` reduce to `GR`, `GR`, `RT`.
fn family(curve: &str) -> String {
    let upper = curve.to_ascii_uppercase();
    let base = upper.split(['_', ':']).next().unwrap_or_default();
    base.trim_end_matches(|c: char| c.is_ascii_digit()).to_string()
}

fn conventional_hue(curve: &str) -> Option<f32> {
    let family = family(curve);
    CURVE_HUES
        .iter()
        .find(|(name, _)| *name == family)
        .map(|&(_, hue)| hue)
}

fn hue_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

/// Move `hue` along the wheel until it is clear of every hue in `used`.
fn free_hue(hue: f32, used: &[f32]) -> f32 {
    let mut candidate = hue;
    for _ in 0..32 {
        if used.iter().all(|&u| hue_distance(candidate, u) >= MIN_HUE_GAP) {
            break;
        }
        candidate = (candidate + GOLDEN_ANGLE).rem_euclid(360.0);
    }
    candidate
}

/// One line colour per track, no two alike within the figure.
///
/// Known curve families claim their conventional hue first. Other curves
/// start from evenly spaced hues and step away from any hue already taken.
pub fn track_colors<S: AsRef<str>>(curves: &[S]) -> Vec<Color32> {
    let preferred: Vec<Option<f32>> = curves
        .iter()
        .map(|c| conventional_hue(c.as_ref()))
        .collect();
    let unknown = preferred.iter().filter(|h| h.is_none()).count().max(1) as f32;

    let mut hues: Vec<Option<f32>> = vec![None; curves.len()];
    let mut used: Vec<f32> = Vec::with_capacity(curves.len());

    for (slot, hue) in hues.iter_mut().zip(&preferred) {
        if let Some(hue) = *hue {
            let hue = free_hue(hue, &used);
            used.push(hue);
            *slot = Some(hue);
        }
    }

    let mut k = 0.0;
    for (slot, hue) in hues.iter_mut().zip(&preferred) {
        if hue.is_none() {
            let hue = free_hue((k / unknown) * 360.0, &used);
            used.push(hue);
            *slot = Some(hue);
            k += 1.0;
        }
    }

    hues.into_iter()
        .map(|hue| hsl_to_color32(hue.unwrap_or_default(), 0.75, 0.5))
        .collect()
}
