use crate::math::Vec3;

/// Polyline path returned by the navigation layer.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Path {
    pub corners: Vec<Vec3>,
}

impl Path {
    pub fn new(corners: Vec<Vec3>) -> Self {
        Self { corners }
    }

    pub fn straight(from: Vec3, to: Vec3) -> Self {
        Self::new(vec![from, to])
    }

    /// Sum of segment lengths.
    pub fn length(&self) -> f32 {
        self.corners
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum()
    }

    pub fn destination(&self) -> Option<Vec3> {
        self.corners.last().copied()
    }
}

/// Pathfinding queries. The decision core never walks paths itself.
pub trait PathOracle {
    /// Computes a path, or `None` if `to` is unreachable from `from`.
    fn calculate_path(&self, from: Vec3, to: Vec3) -> Option<Path>;

    fn path_length(&self, path: &Path) -> f32 {
        path.length()
    }

    /// Seconds needed to walk `path` at `speed` units per second.
    fn estimate_duration(&self, path: &Path, speed: f32) -> f32 {
        if speed <= 0.0 {
            f32::INFINITY
        } else {
            self.path_length(path) / speed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Straight;

    impl PathOracle for Straight {
        fn calculate_path(&self, from: Vec3, to: Vec3) -> Option<Path> {
            Some(Path::straight(from, to))
        }
    }

    #[test]
    fn length_sums_segments() {
        let path = Path::new(vec![
            Vec3::ground(0.0, 0.0),
            Vec3::ground(3.0, 0.0),
            Vec3::ground(3.0, 4.0),
        ]);
        assert_eq!(path.length(), 7.0);
    }

    #[test]
    fn duration_at_zero_speed_is_infinite() {
        let path = Path::straight(Vec3::ZERO, Vec3::ground(10.0, 0.0));
        assert_eq!(Straight.estimate_duration(&path, 5.0), 2.0);
        assert!(Straight.estimate_duration(&path, 0.0).is_infinite());
    }
}
