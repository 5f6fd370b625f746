//! Backing-store scale computation for canvas surfaces
//!
//! Crisp canvas rendering on high-DPI displays needs the backing store
//! sized in physical pixels while the element keeps its logical CSS size.
//! The platform side (querying the pixel ratios, resizing the element,
//! applying the context scale) belongs to the host; this module only
//! computes the numbers.

use serde::Serialize;

/// Physical sizing for a rendering surface at a given pixel-ratio pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfaceScale {
    /// Backing-store width in physical pixels.
    pub physical_width: f64,
    /// Backing-store height in physical pixels.
    pub physical_height: f64,
    /// Uniform factor to apply to the drawing context.
    pub scale: f64,
    /// Logical size to style the element back down to, or `None` on a 1:1
    /// device where no CSS override is needed.
    pub css_size: Option<(f64, f64)>,
}

/// Computes physical surface dimensions and the context scale factor for a
/// requested logical `width` × `height`.
///
/// `scale` is always `device_pixel_ratio / backing_store_ratio`. When the
/// two ratios differ, the backing store is sized up by that factor and
/// `css_size` carries the logical size to style the element with; when they
/// match, the surface is sized 1:1. Ratios are taken as reported by the
/// host and not validated; a zero backing ratio yields infinities, as the
/// host itself would.
pub fn scale_for_surface(
    width: f64,
    height: f64,
    device_pixel_ratio: f64,
    backing_store_ratio: f64,
) -> SurfaceScale {
    let ratio = device_pixel_ratio / backing_store_ratio;

    if device_pixel_ratio == backing_store_ratio {
        SurfaceScale {
            physical_width: width,
            physical_height: height,
            scale: ratio,
            css_size: None,
        }
    } else {
        SurfaceScale {
            physical_width: width * ratio,
            physical_height: height * ratio,
            scale: ratio,
            css_size: Some((width, height)),
        }
    }
}

/// [`scale_for_surface`] against a plain backing store, defaulting the
/// device pixel ratio to 1 when the host does not report one.
pub fn scale_for_display(
    width: f64,
    height: f64,
    device_pixel_ratio: Option<f64>,
) -> SurfaceScale {
    scale_for_surface(width, height, device_pixel_ratio.unwrap_or(1.0), 1.0)
}
