#![forbid(unsafe_code)]

//! DOM side of the skills tab panel.

use folio_core::FolioError;
use folio_core::config::Selectors;
use folio_core::tabs;
use web_sys::{Document, HtmlElement};

use crate::dom::{mark_exclusive, query_all};

pub(crate) struct SkillTabs {
    tabs: Vec<HtmlElement>,
    panels: Vec<HtmlElement>,
}

impl SkillTabs {
    /// Resolve the tab panel. Returns `Ok(None)` when the page has no tabs.
    pub(crate) fn locate(document: &Document, selectors: &Selectors) -> Result<Option<Self>, FolioError> {
        let tabs = query_all(document, &selectors.skill_tabs)?;
        if tabs.is_empty() {
            tracing::info!(selector = %selectors.skill_tabs, "no skill tabs, tab panel disabled");
            return Ok(None);
        }
        let panels = query_all(document, &selectors.skill_panels)?;
        Ok(Some(Self { tabs, panels }))
    }

    pub(crate) fn tabs(&self) -> &[HtmlElement] {
        &self.tabs
    }

    /// Mark tab `clicked` active and reveal its panel.
    pub(crate) fn activate(&self, clicked: usize) {
        let Some(tab) = self.tabs.get(clicked) else {
            return;
        };
        let category = tab.get_attribute("data-category").unwrap_or_default();
        let panel_ids: Vec<String> = self.panels.iter().map(|panel| panel.id()).collect();
        let selection = tabs::select(clicked, &category, &panel_ids);

        mark_exclusive(&self.tabs, Some(selection.active_tab));
        mark_exclusive(&self.panels, selection.visible_panel);
    }
}
