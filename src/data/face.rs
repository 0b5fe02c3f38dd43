/// The six faces of the cubemap. The set is closed; each face carries a fixed
/// orientation formula that defines face adjacency, so the table below must
/// not change at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeFace {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl CubeFace {
    /// The order in which the orchestrator renders faces. Arbitrary for
    /// correctness, but fixed so progress reporting is reproducible.
    pub const RENDER_ORDER: [CubeFace; 6] = [
        CubeFace::Front,
        CubeFace::Back,
        CubeFace::Left,
        CubeFace::Right,
        CubeFace::Top,
        CubeFace::Bottom,
    ];

    /// Scene-space direction through the point at face-local (x, y), where
    /// both coordinates lie in [-1, 1]. The returned vector is intentionally
    /// left unnormalized; normalization happens in the equirectangular
    /// projection.
    pub fn direction(self, x: f64, y: f64) -> cgmath::Vector3<f64> {
        match self {
            CubeFace::Front => cgmath::Vector3::new(-1.0, -y, -x),
            CubeFace::Back => cgmath::Vector3::new(1.0, -y, x),
            CubeFace::Left => cgmath::Vector3::new(-x, -y, 1.0),
            CubeFace::Right => cgmath::Vector3::new(x, -y, -1.0),
            CubeFace::Top => cgmath::Vector3::new(-y, 1.0, -x),
            CubeFace::Bottom => cgmath::Vector3::new(y, -1.0, -x),
        }
    }

    /// Stable lowercase identifier used for file names and manifest keys.
    pub fn name(self) -> &'static str {
        match self {
            CubeFace::Front => "front",
            CubeFace::Back => "back",
            CubeFace::Left => "left",
            CubeFace::Right => "right",
            CubeFace::Top => "top",
            CubeFace::Bottom => "bottom",
        }
    }

    /// Human-readable label including the cube axis the face looks along.
    pub fn label(self) -> &'static str {
        match self {
            CubeFace::Front => "Front (Z+)",
            CubeFace::Back => "Back (Z-)",
            CubeFace::Left => "Left (X-)",
            CubeFace::Right => "Right (X+)",
            CubeFace::Top => "Top (Y+)",
            CubeFace::Bottom => "Bottom (Y-)",
        }
    }
}

impl std::fmt::Display for CubeFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
