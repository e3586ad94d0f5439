use crate::constants::{RASTER_TAG, VECTOR_TAG};
use crate::core::{AssetKind, FlakeElement, OverlaySurface, FLAKE_CLASS, VECTOR_TINT};
use crate::overlay;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A flake's `<img>` or `<object>`. `None` if the element could not be created.
pub struct DomFlake {
    element: Option<web::HtmlElement>,
}

impl FlakeElement for DomFlake {
    fn set_left_percent(&mut self, x_percent: f32) {
        if let Some(el) = &self.element {
            overlay::set_style(el, "left", &format!("{}%", x_percent));
        }
    }

    fn set_top_px(&mut self, y: f32) {
        if let Some(el) = &self.element {
            overlay::set_style(el, "top", &format!("{}px", y));
        }
    }
}

/// The page's snow container.
pub struct DomSurface {
    document: web::Document,
    container: web::HtmlElement,
}

impl DomSurface {
    pub fn find(document: &web::Document, container_id: &str) -> Option<Self> {
        let container = document
            .get_element_by_id(container_id)?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        Some(Self {
            document: document.clone(),
            container,
        })
    }

    fn build(&self, image: &str) -> Result<web::HtmlElement, wasm_bindgen::JsValue> {
        match AssetKind::from_path(image) {
            AssetKind::Vector => {
                let object = self
                    .document
                    .create_element(VECTOR_TAG)?
                    .dyn_into::<web::HtmlObjectElement>()?;
                object.set_data(image);
                tint_on_load(&object);
                Ok(object.unchecked_into())
            }
            AssetKind::Raster => {
                let img = self
                    .document
                    .create_element(RASTER_TAG)?
                    .dyn_into::<web::HtmlImageElement>()?;
                img.set_src(image);
                Ok(img.unchecked_into())
            }
        }
    }
}

// Vector flakes are tinted once, after their document has loaded.
fn tint_on_load(object: &web::HtmlObjectElement) {
    let target = object.clone();
    let onload = Closure::once_into_js(move || {
        let root = target
            .content_document()
            .and_then(|doc| doc.document_element());
        match root {
            Some(svg) => {
                _ = svg.set_attribute("fill", VECTOR_TINT);
                _ = svg.set_attribute("stroke", VECTOR_TINT);
            }
            None => log::warn!("[dom] loaded flake has no svg document"),
        }
    });
    object.set_onload(Some(onload.unchecked_ref()));
}

impl OverlaySurface for DomSurface {
    type Element = DomFlake;

    fn create_element(&mut self, image: &str, radius: f32) -> DomFlake {
        let element = match self.build(image) {
            Ok(el) => el,
            Err(e) => {
                log::error!("[dom] failed to create flake for {}: {:?}", image, e);
                return DomFlake { element: None };
            }
        };
        let size = format!("{}px", radius);
        overlay::set_style(&element, "width", &size);
        overlay::set_style(&element, "height", &size);
        element.set_draggable(false);
        _ = element.class_list().add_1(FLAKE_CLASS);
        DomFlake {
            element: Some(element),
        }
    }

    fn append(&mut self, element: &DomFlake) {
        if let Some(el) = &element.element {
            if let Err(e) = self.container.append_child(el) {
                log::error!("[dom] append failed: {:?}", e);
            }
        }
    }

    fn detach(&mut self, element: &DomFlake) {
        if let Some(el) = &element.element {
            el.remove();
        }
    }

    fn set_visible(&mut self, visible: bool) {
        overlay::set_visible(&self.container, visible);
    }

    fn set_height(&mut self, height_px: f32) {
        overlay::set_height(&self.container, height_px);
    }
}
