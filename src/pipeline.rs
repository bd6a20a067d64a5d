//! Fixed-function pipeline state.

use crate::gl;

/// Specifies the polygon rasterization method.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PolygonMode {
    /// Vertices marked as the start of a boundary edge are drawn as points.
    Point(i32),

    /// Boundary edges of the polygon are drawn as line segments.
    Line(i32),

    /// The interior of the polygon is filled.
    Fill,
}

impl Default for PolygonMode {
    fn default() -> Self {
        PolygonMode::Fill
    }
}

impl PolygonMode {
    pub(crate) fn as_gl_enum(&self) -> u32 {
        match *self {
            PolygonMode::Point(_) => gl::POINT,
            PolygonMode::Line(_) => gl::LINE,
            PolygonMode::Fill => gl::FILL,
        }
    }
}

/// Specifies depth buffer testing.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DepthTest {
    /// Depth testing is switched off.
    Disabled,

    /// Depth test never passes.
    Never,

    /// Depth test passes if the incoming depth value is less than
    /// the stored depth value.
    LessThan,

    /// Depth test always passes.
    Always,
}

impl Default for DepthTest {
    fn default() -> Self {
        DepthTest::LessThan
    }
}

impl DepthTest {
    pub(crate) fn as_gl_enum_if_enabled(&self) -> Option<u32> {
        match *self {
            DepthTest::Disabled => None,
            DepthTest::Never => Some(gl::NEVER),
            DepthTest::LessThan => Some(gl::LESS),
            DepthTest::Always => Some(gl::ALWAYS),
        }
    }
}

/// Specifies the winding order of front facing triangles.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FrontFace {
    /// Front-facing triangles are clockwise wound.
    Clockwise,

    /// Front-facing triangles are counter-clockwise wound.
    CounterClockwise,
}

impl Default for FrontFace {
    fn default() -> Self {
        FrontFace::CounterClockwise
    }
}

impl FrontFace {
    pub(crate) fn as_gl_enum(&self) -> u32 {
        match *self {
            FrontFace::Clockwise => gl::CW,
            FrontFace::CounterClockwise => gl::CCW,
        }
    }
}

/// Hardware culling mode.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Culling {
    /// Disable culling.
    None,

    /// Cull the front-facing triangles.
    Front,

    /// Cull the back-facing triangles.
    Back,

    /// Cull all faces.
    All,
}

impl Default for Culling {
    fn default() -> Self {
        Culling::Back
    }
}

impl Culling {
    pub(crate) fn as_gl_enum_if_enabled(&self) -> Option<u32> {
        match *self {
            Culling::None => None,
            Culling::Front => Some(gl::FRONT),
            Culling::Back => Some(gl::BACK),
            Culling::All => Some(gl::FRONT_AND_BACK),
        }
    }
}

/// Color blending mode.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Blending {
    /// Incoming fragments replace the stored color.
    None,

    /// `src * src_alpha + dst * (1 - src_alpha)`.
    Alpha,
}

impl Default for Blending {
    fn default() -> Self {
        Blending::None
    }
}

impl Blending {
    pub(crate) fn as_gl_enums_if_enabled(&self) -> Option<(u32, u32)> {
        match *self {
            Blending::None => None,
            Blending::Alpha => Some((gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA)),
        }
    }
}

/// Viewport region to render to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Viewport {
    /// The whole framebuffer.
    Max,

    /// A sub-rectangle of the framebuffer, in pixels.
    Subset {
        /// X offset.
        x: u32,

        /// Y offset.
        y: u32,

        /// Width.
        w: u32,

        /// Height.
        h: u32,
    },
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::Max
    }
}

/// Fixed-function state parameters.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct State {
    /// Front face winding order.
    pub front_face: FrontFace,

    /// Hardware face culling mode.
    pub culling: Culling,

    /// Hardware depth testing mode.
    pub depth_test: DepthTest,

    /// Color blending mode.
    pub blending: Blending,

    /// Specifies the polygon rasterization method.
    pub polygon_mode: PolygonMode,

    /// Specifies region to render to.
    pub viewport: Viewport,
}

impl State {
    /// State for flat 2D drawing: no culling, no depth test, alpha blending.
    pub fn flat() -> Self {
        Self {
            culling: Culling::None,
            depth_test: DepthTest::Disabled,
            blending: Blending::Alpha,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_state_draws_both_faces_blended() {
        let flat = State::flat();
        assert_eq!(Culling::None, flat.culling);
        assert_eq!(DepthTest::Disabled, flat.depth_test);
        assert_eq!(Blending::Alpha, flat.blending);
        assert_eq!(Culling::Back, State::default().culling);
    }
}
