//! Raster image rendering.

use std::sync::Arc;

use crate::error::RenderError;
use crate::host::ObjectUrlStore;
use crate::item::OutputItem;
use crate::lifecycle::Disposer;
use crate::surface::RenderSurface;

/// Class of the container wrapping an image.
pub const DISPLAY_CLASS: &str = "display";

/// Render an image from the item's bytes.
///
/// Returns the disposer releasing the object URL the image points at; the
/// caller decides where it is kept.
pub fn render_image(
    item: &OutputItem,
    surface: &mut RenderSurface<'_>,
    store: &Arc<dyn ObjectUrlStore>,
) -> Result<Disposer, RenderError> {
    let url = store.create(item.data(), item.mime())?;

    let doc = surface.document_mut();
    let image = doc.create_element("img");
    doc.set_attribute(image, "src", url.as_str());
    let display = doc.create_element("div");
    doc.add_class(display, DISPLAY_CLASS);
    doc.append_child(display, image);
    surface.append(display);

    let store = Arc::clone(store);
    Ok(Disposer::new(move || store.revoke(&url)))
}
