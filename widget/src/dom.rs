//! Browser host backed by `web-sys`.
//!
//! The module is evaluated by the `/widget.js` loader through a dynamic
//! `import()`, so `document.currentScript` is already gone when it runs. The
//! loader resolves the tag while it still can and marks it with
//! `data-careaid-loader`; the host selects on that marker.

use std::cell::RefCell;
use std::rc::Rc;

use careaid::paths::{CHATBOT_ID_ATTRIBUTE, invoking_script_selector};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlScriptElement};

use crate::bootstrap::{Outcome, bootstrap};
use crate::host::{Host, HostError, ScriptTag};
use crate::state::Widget;
use crate::styles::{
    BUBBLE_CLASS, BUBBLE_ICON_SVG, BUBBLE_LABEL, FRAME_CLASS, FRAME_TITLE, ROOT_ID, STYLE_ID, container_class,
};

fn dom_err(err: JsValue) -> HostError {
    HostError::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

pub struct DomHost {
    document: Document,
    style: Option<Element>,
    root: Option<Element>,
    bubble: Option<Element>,
    container: Option<Element>,
}

impl DomHost {
    /// Bind to the current window's document.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::NoDocument`] outside a browsing context.
    pub fn from_window() -> Result<Self, HostError> {
        let document = web_sys::window().and_then(|w| w.document()).ok_or(HostError::NoDocument)?;
        Ok(Self { document, style: None, root: None, bubble: None, container: None })
    }

    /// The injected bubble, once [`Host::inject_bubble`] has run.
    #[must_use]
    pub fn bubble(&self) -> Option<&Element> {
        self.bubble.as_ref()
    }

    fn body(&self) -> Result<Element, HostError> {
        self.document.body().map(Into::into).ok_or(HostError::NoDocument)
    }
}

impl Host for DomHost {
    fn invoking_script(&self) -> Option<ScriptTag> {
        let element = self.document.query_selector(&invoking_script_selector()).ok().flatten()?;
        let chatbot_id = element.get_attribute(CHATBOT_ID_ATTRIBUTE);
        // `HtmlScriptElement::src` is already resolved against the page URL.
        let src = element.dyn_ref::<HtmlScriptElement>().map(HtmlScriptElement::src)?;
        Some(ScriptTag { src, chatbot_id })
    }

    fn widget_mounted(&self) -> bool {
        self.document.get_element_by_id(ROOT_ID).is_some()
    }

    fn inject_style(&mut self, css: &str) -> Result<(), HostError> {
        let style = self.document.create_element("style").map_err(dom_err)?;
        style.set_id(STYLE_ID);
        style.set_text_content(Some(css));
        match self.document.head() {
            Some(head) => head.append_child(&style).map_err(dom_err)?,
            None => self.body()?.append_child(&style).map_err(dom_err)?,
        };
        self.style = Some(style);
        Ok(())
    }

    fn inject_bubble(&mut self) -> Result<(), HostError> {
        let root = self.document.create_element("div").map_err(dom_err)?;
        root.set_id(ROOT_ID);
        self.body()?.append_child(&root).map_err(dom_err)?;
        self.root = Some(root.clone());

        let bubble = self.document.create_element("button").map_err(dom_err)?;
        bubble.set_class_name(BUBBLE_CLASS);
        bubble.set_attribute("type", "button").map_err(dom_err)?;
        bubble.set_attribute("aria-label", BUBBLE_LABEL).map_err(dom_err)?;
        bubble.set_attribute("aria-expanded", "false").map_err(dom_err)?;
        bubble.set_inner_html(BUBBLE_ICON_SVG);
        root.append_child(&bubble).map_err(dom_err)?;
        self.bubble = Some(bubble);
        Ok(())
    }

    fn inject_container(&mut self, surface_url: &str) -> Result<(), HostError> {
        let root = self.root.clone().ok_or_else(|| HostError::Dom("widget root missing".into()))?;

        let container = self.document.create_element("div").map_err(dom_err)?;
        container.set_class_name(&container_class(false));

        let frame = self.document.create_element("iframe").map_err(dom_err)?;
        frame.set_class_name(FRAME_CLASS);
        frame.set_attribute("title", FRAME_TITLE).map_err(dom_err)?;
        frame.set_attribute("allow", "microphone").map_err(dom_err)?;
        frame.set_attribute("src", surface_url).map_err(dom_err)?;

        container.append_child(&frame).map_err(dom_err)?;
        root.append_child(&container).map_err(dom_err)?;
        self.container = Some(container);
        Ok(())
    }

    fn set_container_open(&mut self, open: bool) {
        if let Some(container) = &self.container {
            container.set_class_name(&container_class(open));
        }
        if let Some(bubble) = &self.bubble {
            let _ = bubble.set_attribute("aria-expanded", if open { "true" } else { "false" });
        }
    }

    fn remove_injected(&mut self) {
        for element in [self.root.take(), self.style.take()].into_iter().flatten() {
            element.remove();
        }
        self.bubble = None;
        self.container = None;
    }

    fn diagnostic(&mut self, message: &str) {
        log::warn!("[careaid-widget] {message}");
    }
}

/// Bootstrap against the live document and wire the bubble click.
///
/// Never panics or throws into the host page; failures end in a console
/// diagnostic.
pub fn mount() {
    let mut host = match DomHost::from_window() {
        Ok(host) => host,
        Err(err) => {
            log::warn!("[careaid-widget] {err}");
            return;
        }
    };

    match bootstrap(&mut host) {
        Ok(Outcome::Mounted { slug, surface_url }) => {
            log::info!("[careaid-widget] mounted assistant {slug} from {surface_url}");
        }
        Ok(Outcome::AlreadyMounted) => {
            log::debug!("[careaid-widget] already mounted, skipping");
            return;
        }
        // `bootstrap` has already emitted the diagnostic.
        Err(_) => return,
    }

    let Some(bubble) = host.bubble().cloned() else {
        return;
    };
    let widget = Rc::new(RefCell::new(Widget::new(host)));
    let on_click = Closure::<dyn FnMut()>::new(move || {
        widget.borrow_mut().toggle();
    });
    if let Err(err) = bubble.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
        log::warn!("[careaid-widget] {}", dom_err(err));
    }
    // The listener lives as long as the page.
    on_click.forget();
}
