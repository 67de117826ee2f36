//! Rendering strategies, one per mime family.
//!
//! Each strategy mutates the surface it is given and nothing else. The
//! dispatcher decides which one runs and owns anything they return.

mod error;
mod hooks;
mod image;
mod markup;
mod stream;
mod text;

pub use error::{ErrorLike, TRACEBACK_CLASS, render_error};
pub use hooks::{HtmlRenderingHook, JavaScriptRenderingHook};
pub use image::{DISPLAY_CLASS, render_image};
pub use markup::{render_html, render_javascript};
pub use stream::{STREAM_CLASS, StreamRender, render_stream};
pub use text::{PLAINTEXT_CLASS, render_text};
