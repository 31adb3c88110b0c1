#![forbid(unsafe_code)]

//! Skills tab panel.

/// Element id of the panel revealed by a tab with category `category`.
#[must_use]
pub fn panel_id(category: &str) -> String {
    format!("{category}-skills")
}

/// Outcome of clicking a tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSelection {
    /// Tab to mark active; every other tab loses the marking.
    pub active_tab: usize,
    /// Panel to reveal; every other panel is hidden. `None` when no panel
    /// carries the expected id, which leaves all panels hidden.
    pub visible_panel: Option<usize>,
}

/// Resolve a click on tab `clicked`.
///
/// `panel_ids` are the ids of the panel elements in document order.
#[must_use]
pub fn select<S: AsRef<str>>(clicked: usize, category: &str, panel_ids: &[S]) -> TabSelection {
    let wanted = panel_id(category);
    let visible_panel = panel_ids.iter().position(|id| id.as_ref() == wanted);
    if visible_panel.is_none() {
        crate::warn!(panel = %wanted, "no skills panel for tab");
    }
    TabSelection {
        active_tab: clicked,
        visible_panel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANELS: [&str; 3] = ["frontend-skills", "backend-skills", "tools-skills"];

    #[test]
    fn panel_id_appends_suffix() {
        assert_eq!(panel_id("backend"), "backend-skills");
    }

    #[test]
    fn selecting_a_tab_reveals_matching_panel() {
        let sel = select(2, "tools", &PANELS);
        assert_eq!(
            sel,
            TabSelection {
                active_tab: 2,
                visible_panel: Some(2)
            }
        );
    }

    #[test]
    fn tab_order_need_not_match_panel_order() {
        assert_eq!(select(0, "backend", &PANELS).visible_panel, Some(1));
    }

    #[test]
    fn missing_panel_hides_everything() {
        let sel = select(1, "design", &PANELS);
        assert_eq!(sel.active_tab, 1);
        assert_eq!(sel.visible_panel, None);
    }
}
