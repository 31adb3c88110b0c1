#![forbid(unsafe_code)]

//! DOM lookups and the [`PagingHost`] implementation over `web-sys`.

use folio_core::config::Selectors;
use folio_core::host::{Axis, PagingHost};
use folio_core::FolioError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, ScrollBehavior, ScrollToOptions, Window};

/// Class toggled on the current indicator, category button and skills tab.
pub(crate) const ACTIVE_CLASS: &str = "active";

pub(crate) fn host_error(err: JsValue) -> FolioError {
    FolioError::Host(
        err.as_string()
            .unwrap_or_else(|| format!("{err:?}")),
    )
}

fn html_elements(list: NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Every element matching `selector`, in document order.
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, FolioError> {
    document
        .query_selector_all(selector)
        .map(html_elements)
        .map_err(host_error)
}

/// Every element under `root` matching `selector`.
pub(crate) fn query_all_in(root: &Element, selector: &str) -> Result<Vec<HtmlElement>, FolioError> {
    root.query_selector_all(selector)
        .map(html_elements)
        .map_err(host_error)
}

/// First element matching `selector`; absence is an error.
pub(crate) fn query_one(document: &Document, selector: &str) -> Result<HtmlElement, FolioError> {
    document
        .query_selector(selector)
        .map_err(host_error)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| FolioError::MissingElement(selector.to_string()))
}

/// Add or remove the active marking.
pub(crate) fn set_active(el: &Element, active: bool) {
    if let Err(err) = el.class_list().toggle_with_force(ACTIVE_CLASS, active) {
        tracing::warn!(error = ?err, "failed to toggle active class");
    }
}

/// Mark `index` active within `group` and clear every other element.
pub(crate) fn mark_exclusive(group: &[HtmlElement], index: Option<usize>) {
    for (i, el) in group.iter().enumerate() {
        set_active(el, Some(i) == index);
    }
}

/// Sections, indicators and scrollers of the paged layout.
pub(crate) struct DomPage {
    window: Window,
    container: HtmlElement,
    sections: Vec<HtmlElement>,
    links: Vec<HtmlElement>,
    dots: Vec<HtmlElement>,
}

impl DomPage {
    /// Resolve the paged layout. Sections must exist and both indicator
    /// groups must have one element per section.
    pub(crate) fn locate(
        window: Window,
        document: &Document,
        selectors: &Selectors,
    ) -> Result<Self, FolioError> {
        let container = query_one(document, &selectors.scroll_container)?;
        let sections = query_all(document, &selectors.sections)?;
        if sections.is_empty() {
            return Err(FolioError::MissingElement(selectors.sections.clone()));
        }
        let links = query_all(document, &selectors.nav_links)?;
        let dots = query_all(document, &selectors.dots)?;
        if links.len() != sections.len() || dots.len() != sections.len() {
            return Err(FolioError::IndicatorMismatch {
                sections: sections.len(),
                links: links.len(),
                dots: dots.len(),
            });
        }

        Ok(Self {
            window,
            container,
            sections,
            links,
            dots,
        })
    }

    pub(crate) fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub(crate) fn window(&self) -> &Window {
        &self.window
    }

    pub(crate) fn container(&self) -> &HtmlElement {
        &self.container
    }

    pub(crate) fn links(&self) -> &[HtmlElement] {
        &self.links
    }

    pub(crate) fn dots(&self) -> &[HtmlElement] {
        &self.dots
    }
}

impl PagingHost for DomPage {
    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_offset(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.window.scroll_y().unwrap_or(0.0),
            Axis::Horizontal => f64::from(self.container.scroll_left()),
        }
    }

    fn section_top(&self, index: usize) -> f64 {
        self.sections
            .get(index)
            .map_or(0.0, |section| f64::from(section.offset_top()))
    }

    fn smooth_scroll(&mut self, axis: Axis, offset: f64) {
        let options = ScrollToOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        match axis {
            Axis::Vertical => {
                options.set_top(offset);
                self.window.scroll_to_with_scroll_to_options(&options);
            }
            Axis::Horizontal => {
                options.set_left(offset);
                self.container.scroll_to_with_scroll_to_options(&options);
            }
        }
    }

    fn mark_active(&mut self, index: usize) {
        mark_exclusive(&self.links, Some(index));
        mark_exclusive(&self.dots, Some(index));
    }
}
