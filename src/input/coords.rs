//! Coordinate conversion between device (client) space and surface-local
//! space.

use crate::error::{PointerError, PointerResult};
use crate::point::Point;

/// Measured placement of the controlled surface, in client coordinates.
///
/// Translation only needs the top-left corner of the bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceBounds {
    pub origin: Point,
}

impl SurfaceBounds {
    pub fn new(origin: Point) -> Self {
        Self { origin }
    }
}

/// Source of the surface geometry (the host's element handle).
pub trait SurfaceGeometry {
    /// Current bounds, or `None` while the surface is detached or unmeasured.
    fn bounds(&self) -> Option<SurfaceBounds>;
}

impl SurfaceGeometry for SurfaceBounds {
    fn bounds(&self) -> Option<SurfaceBounds> {
        Some(*self)
    }
}

impl SurfaceGeometry for Option<SurfaceBounds> {
    fn bounds(&self) -> Option<SurfaceBounds> {
        *self
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a client position to surface-local coordinates
    #[inline]
    pub fn client_to_local(client: Point, bounds: &SurfaceBounds) -> Point {
        client.delta(bounds.origin)
    }

    /// Convert a surface-local position back to client coordinates
    #[inline]
    pub fn local_to_client(local: Point, bounds: &SurfaceBounds) -> Point {
        local + bounds.origin
    }
}

/// Translate `client` into the space of `surface`, measuring it now.
///
/// Fails with [`PointerError::MissingBounds`] when the surface cannot be
/// measured; routing events for an unattached surface is a host bug.
pub fn to_surface_local<G>(client: Point, surface: &G) -> PointerResult<Point>
where
    G: SurfaceGeometry + ?Sized,
{
    let bounds = surface.bounds().ok_or(PointerError::MissingBounds)?;
    Ok(CoordinateConverter::client_to_local(client, &bounds))
}
