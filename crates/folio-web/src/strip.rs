#![forbid(unsafe_code)]

//! DOM side of the project carousel.

use folio_core::FolioError;
use folio_core::carousel::{PlayState, StripAnimation, StripLayout};
use folio_core::config::{CarouselConfig, Selectors};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlStyleElement};

use crate::dom::{host_error, mark_exclusive, query_all, query_all_in, query_one};

const KEYFRAMES_STYLE_ID: &str = "folio-strip-keyframes";

/// The scrolling strip, its source cards and the category buttons.
pub(crate) struct ProjectStrip {
    config: CarouselConfig,
    card_selector: String,
    strip: HtmlElement,
    outer: HtmlElement,
    buttons: Vec<HtmlElement>,
    sources: Vec<HtmlElement>,
    categories: Vec<String>,
    document: Document,
}

impl ProjectStrip {
    /// Resolve the carousel without touching the DOM. Returns `Ok(None)` when
    /// the page has no strip.
    pub(crate) fn locate(
        document: &Document,
        selectors: &Selectors,
        config: &CarouselConfig,
    ) -> Result<Option<Self>, FolioError> {
        let strip = match query_one(document, &selectors.project_strip) {
            Ok(strip) => strip,
            Err(FolioError::MissingElement(selector)) => {
                tracing::info!(%selector, "no project strip, carousel disabled");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };
        let outer = query_one(document, &selectors.strip_outer)?;
        let buttons = query_all(document, &selectors.category_buttons)?;
        // Source cards are collected document-wide before the first rebuild
        // detaches them; the handles stay valid for cloning.
        let sources = query_all(document, &selectors.project_cards)?;
        let categories = sources
            .iter()
            .map(|card| card.get_attribute("data-category").unwrap_or_default())
            .collect();

        Ok(Some(Self {
            config: config.clone(),
            card_selector: selectors.project_cards.clone(),
            document: document.clone(),
            strip,
            outer,
            buttons,
            sources,
            categories,
        }))
    }

    pub(crate) fn outer(&self) -> &HtmlElement {
        &self.outer
    }

    pub(crate) fn buttons(&self) -> &[HtmlElement] {
        &self.buttons
    }

    /// Category value carried by button `index`.
    pub(crate) fn button_category(&self, index: usize) -> Option<String> {
        self.buttons.get(index)?.get_attribute("data-language")
    }

    /// Mark button `index` active and rebuild the strip for its category.
    pub(crate) fn select_button(&self, index: usize) -> Result<StripAnimation, FolioError> {
        mark_exclusive(&self.buttons, Some(index));
        let category = self
            .button_category(index)
            .unwrap_or_else(|| self.config.all_category.clone());
        self.show(&category)
    }

    /// Rebuild the strip for `category` and size its animation.
    pub(crate) fn show(&self, category: &str) -> Result<StripAnimation, FolioError> {
        let layout = StripLayout::build(&self.categories, category, &self.config);

        self.strip.set_inner_html("");
        for &source in &layout.cards {
            let clone = self.sources[source]
                .clone_node_with_deep(true)
                .map_err(host_error)?;
            self.strip.append_child(&clone).map_err(host_error)?;
        }

        let widths: Vec<f64> = query_all_in(&self.strip, &self.card_selector)?
            .iter()
            .map(|card| f64::from(card.offset_width()))
            .collect();
        let viewport = self
            .strip
            .parent_element()
            .and_then(|parent| parent.dyn_into::<HtmlElement>().ok())
            .unwrap_or_else(|| self.outer.clone());
        let animation = StripAnimation::measure(
            &widths,
            f64::from(viewport.offset_width()),
            &layout,
            &self.config,
        );
        self.apply(&animation)?;

        tracing::debug!(
            category,
            matches = layout.matches.len(),
            rendered = layout.len(),
            ?animation,
            "project strip rebuilt"
        );
        Ok(animation)
    }

    /// Pause or resume the strip animation.
    pub(crate) fn set_play_state(&self, state: PlayState) -> Result<(), FolioError> {
        self.strip
            .style()
            .set_property("animation-play-state", state.as_css())
            .map_err(host_error)
    }

    fn apply(&self, animation: &StripAnimation) -> Result<(), FolioError> {
        let name = &self.config.animation_name;
        let keyframes = animation.keyframes_css(name);
        keyframes_style(&self.document)?.set_text_content(keyframes.as_deref());

        let style = self.strip.style();
        style
            .set_property("animation", &animation.animation_css(name))
            .map_err(host_error)?;
        if *animation == StripAnimation::Static {
            style
                .set_property("transform", "translateX(0)")
                .map_err(host_error)?;
        }
        Ok(())
    }
}

/// The `<style>` element holding the generated keyframes, created on first use.
fn keyframes_style(document: &Document) -> Result<HtmlStyleElement, FolioError> {
    if let Some(existing) = document.get_element_by_id(KEYFRAMES_STYLE_ID)
        && let Ok(style) = existing.dyn_into::<HtmlStyleElement>()
    {
        return Ok(style);
    }

    let style = document
        .create_element("style")
        .map_err(host_error)?
        .dyn_into::<HtmlStyleElement>()
        .map_err(|_| FolioError::Host("created <style> is not a style element".to_string()))?;
    style.set_id(KEYFRAMES_STYLE_ID);
    let parent = document
        .head()
        .map(HtmlElement::from)
        .or_else(|| document.body())
        .ok_or_else(|| FolioError::MissingElement("head".to_string()))?;
    parent.append_child(&style).map_err(host_error)?;
    Ok(style)
}
