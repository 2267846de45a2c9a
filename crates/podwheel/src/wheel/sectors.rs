use super::{Point, WheelGeometry, WheelTuning, normalize_degrees};
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// One of the four fixed button zones on the wheel's outer band.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Sector {
    Menu,
    Left,
    Right,
    PlayPause,
}

impl Sector {
    /// Center angle of the sector in degrees (0° = +x, clockwise, y-down).
    pub fn center_degrees(&self) -> f64 {
        match self {
            Self::Right => 0.0,
            Self::PlayPause => 90.0,
            Self::Left => 180.0,
            Self::Menu => 270.0,
        }
    }
}

/// Bucket an angle into its sector. Half-open 90° ranges keep the 45°/135°/
/// 225°/315° boundaries unambiguous: each boundary belongs to the next sector
/// clockwise.
pub fn sector_at(angle_degrees: f64) -> Sector {
    match normalize_degrees(angle_degrees) {
        a if a < 45.0 => Sector::Right,
        a if a < 135.0 => Sector::PlayPause,
        a if a < 225.0 => Sector::Left,
        a if a < 315.0 => Sector::Menu,
        _ => Sector::Right,
    }
}

/// Map a point to the button sector under it, or `None` when the point falls
/// outside the radial band. Pure and deterministic; degenerate geometry is a
/// miss, never an error.
pub fn locate(point: Point, geometry: &WheelGeometry, tuning: &WheelTuning) -> Option<Sector> {
    if !geometry.radius.is_finite() || geometry.radius <= 0.0 {
        return None;
    }

    let distance = geometry.distance_from_center(point);
    if !distance.is_finite() {
        return None;
    }

    let inner = geometry.radius * tuning.band_inner_ratio;
    let outer = geometry.radius * tuning.band_outer_ratio;
    if distance < inner || distance > outer {
        return None;
    }

    Some(sector_at(geometry.angle_degrees(point)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> WheelGeometry {
        WheelGeometry::new(Point::new(0.0, 0.0), 100.0)
    }

    #[test]
    fn test_cardinal_hits() {
        let g = geometry();
        let t = WheelTuning::default();
        assert_eq!(locate(Point::new(90.0, 0.0), &g, &t), Some(Sector::Right));
        assert_eq!(locate(Point::new(0.0, 90.0), &g, &t), Some(Sector::PlayPause));
        assert_eq!(locate(Point::new(-90.0, 0.0), &g, &t), Some(Sector::Left));
        assert_eq!(locate(Point::new(0.0, -90.0), &g, &t), Some(Sector::Menu));
    }

    #[test]
    fn test_misses_outside_band() {
        let g = geometry();
        let t = WheelTuning::default();
        // inside the inner edge (center button territory)
        assert_eq!(locate(Point::new(10.0, 0.0), &g, &t), None);
        // beyond the rim
        assert_eq!(locate(Point::new(150.0, 0.0), &g, &t), None);
    }

    #[test]
    fn test_boundary_angles_resolve_to_one_sector() {
        // each 45°-family boundary belongs to exactly one fixed neighbor
        assert_eq!(sector_at(45.0), Sector::PlayPause);
        assert_eq!(sector_at(135.0), Sector::Left);
        assert_eq!(sector_at(225.0), Sector::Menu);
        assert_eq!(sector_at(315.0), Sector::Right);
    }

    #[test]
    fn test_deterministic() {
        let g = geometry();
        let t = WheelTuning::default();
        let p = Point::new(60.0, 60.0);
        assert_eq!(locate(p, &g, &t), locate(p, &g, &t));
    }

    #[test]
    fn test_degenerate_geometry_is_a_miss() {
        let t = WheelTuning::default();
        let zero = WheelGeometry::new(Point::new(0.0, 0.0), 0.0);
        assert_eq!(locate(Point::new(1.0, 0.0), &zero, &t), None);
        let bad = WheelGeometry::new(Point::new(0.0, 0.0), f64::NAN);
        assert_eq!(locate(Point::new(1.0, 0.0), &bad, &t), None);
    }
}
