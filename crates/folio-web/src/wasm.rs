#![forbid(unsafe_code)]

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::carousel::PlayState;
use folio_core::config::LockRelease;
use folio_core::input::{IndicatorGroup, NavInput, ScrollSource, WheelInput, normalize_dom_key};
use folio_core::{Dispatch, FolioConfig, FolioError, PagingController, PagingHost, ViewMode};
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event, EventTarget, KeyboardEvent, WheelEvent};
use web_time::Instant;

use crate::console::ConsoleMakeWriter;
use crate::dom::DomPage;
use crate::strip::ProjectStrip;
use crate::tabs::SkillTabs;

fn to_js(err: FolioError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Controller plus the page it drives, shared by every listener.
struct Paging {
    controller: PagingController,
    page: DomPage,
    epoch: Instant,
}

type SharedPaging = Rc<RefCell<Paging>>;

/// Route one input through the controller. Returns `None` when the
/// controller is already borrowed (an event fired from inside a handler).
fn dispatch(shared: &SharedPaging, input: &NavInput) -> Option<Dispatch> {
    let Ok(mut paging) = shared.try_borrow_mut() else {
        tracing::warn!(?input, "re-entrant event dropped");
        return None;
    };
    let now = paging.epoch.elapsed();
    let Paging {
        controller, page, ..
    } = &mut *paging;
    Some(controller.dispatch(input, page, now))
}

/// A registered DOM listener, kept so it can be detached on `destroy`.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn detach(&self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

#[derive(Default)]
struct Listeners(Vec<Listener>);

impl Listeners {
    fn add(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), FolioError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .map_err(crate::dom::host_error)?;
        self.push(target, kind, callback);
        Ok(())
    }

    /// Register a listener that may call `preventDefault` (wheel).
    fn add_active(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), FolioError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(crate::dom::host_error)?;
        self.push(target, kind, callback);
        Ok(())
    }

    fn push(&mut self, target: &EventTarget, kind: &'static str, callback: Closure<dyn FnMut(Event)>) {
        self.0.push(Listener {
            target: target.clone(),
            kind,
            callback,
        });
    }

    fn detach_all(&mut self) {
        for listener in self.0.drain(..) {
            listener.detach();
        }
    }
}

/// Portfolio page runtime.
///
/// Construct, then call `init` once the document is parsed. The instance owns
/// every listener it registers; `destroy` removes them.
#[wasm_bindgen]
pub struct FolioWeb {
    paging: Option<SharedPaging>,
    listeners: Listeners,
}

#[wasm_bindgen]
impl FolioWeb {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            paging: None,
            listeners: Listeners::default(),
        }
    }

    /// Attach to the current document.
    ///
    /// `options` is an optional plain object matching `FolioConfig`; missing
    /// fields keep their defaults. Fails when the paged layout is missing or
    /// its indicators do not match the sections.
    pub fn init(&mut self, options: Option<JsValue>) -> Result<(), JsValue> {
        let config = parse_options(options).map_err(to_js)?;
        crate::logging::install(&config.log_level, ConsoleMakeWriter).map_err(to_js)?;
        if self.paging.is_some() {
            self.destroy();
        }
        self.mount(&config).map_err(|err| {
            tracing::warn!(error = %err, "folio init failed");
            self.listeners.detach_all();
            to_js(err)
        })
    }

    /// Inject a JSON-encoded `NavInput`, as if the page had produced it.
    /// Returns the section navigated to, if any.
    pub fn input(&self, event: &str) -> Result<Option<u32>, JsValue> {
        let input = NavInput::from_json_str(event).map_err(|err| to_js(err.into()))?;
        let Some(shared) = &self.paging else {
            return Err(to_js(FolioError::Host("not initialized".to_string())));
        };
        Ok(dispatch(shared, &input)
            .and_then(|out| out.navigated)
            .and_then(|index| u32::try_from(index).ok()))
    }

    /// Index of the section currently marked active.
    #[wasm_bindgen(js_name = currentSection)]
    pub fn current_section(&self) -> u32 {
        self.paging
            .as_ref()
            .and_then(|shared| shared.try_borrow().ok())
            .map_or(0, |paging| paging.controller.index() as u32)
    }

    #[wasm_bindgen(js_name = isMobile)]
    pub fn is_mobile(&self) -> bool {
        self.paging
            .as_ref()
            .and_then(|shared| shared.try_borrow().ok())
            .is_some_and(|paging| paging.controller.view_mode() == ViewMode::Mobile)
    }

    /// Explicit teardown for JS callers: detaches every listener and drops
    /// the controller.
    pub fn destroy(&mut self) {
        self.listeners.detach_all();
        self.paging = None;
    }
}

impl FolioWeb {
    fn mount(&mut self, config: &FolioConfig) -> Result<(), FolioError> {
        let window = web_sys::window().ok_or_else(|| FolioError::Host("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| FolioError::Host("no document".to_string()))?;

        // Every lookup runs before the page is touched, so a failed lookup
        // leaves the document as it was.
        let mut page = DomPage::locate(window.clone(), &document, &config.selectors)?;
        let strip = ProjectStrip::locate(&document, &config.selectors, &config.carousel)?;
        let tabs = SkillTabs::locate(&document, &config.selectors)?;

        let mut controller =
            PagingController::new(page.section_count(), config.paging.clone(), page.viewport_width());
        controller.attach(&mut page);
        let shared = Rc::new(RefCell::new(Paging {
            controller,
            page,
            epoch: Instant::now(),
        }));

        self.wire_paging(&shared, &document, config)?;
        if let Some(strip) = strip {
            strip.show(&config.carousel.all_category)?;
            self.wire_strip(Rc::new(strip))?;
        }
        if let Some(tabs) = tabs {
            self.wire_tabs(Rc::new(tabs))?;
        }

        self.paging = Some(shared);
        Ok(())
    }

    fn wire_paging(
        &mut self,
        shared: &SharedPaging,
        document: &web_sys::Document,
        config: &FolioConfig,
    ) -> Result<(), FolioError> {
        let (window, container, links, dots) = {
            let paging = shared.borrow();
            (
                paging.page.window().clone(),
                paging.page.container().clone(),
                paging.page.links().to_vec(),
                paging.page.dots().to_vec(),
            )
        };

        let s = Rc::clone(shared);
        self.listeners.add_active(document, "wheel", move |event: Event| {
            let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                return;
            };
            let input = NavInput::Wheel(WheelInput::new(wheel.delta_x(), wheel.delta_y()));
            if let Some(out) = dispatch(&s, &input)
                && out.prevent_default
            {
                event.prevent_default();
            }
        })?;

        let s = Rc::clone(shared);
        self.listeners.add(document, "keydown", move |event: Event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let input = NavInput::Key {
                key: normalize_dom_key(&key.key()),
            };
            dispatch(&s, &input);
        })?;

        for (group, elements) in [(IndicatorGroup::Link, links), (IndicatorGroup::Dot, dots)] {
            for (index, element) in elements.into_iter().enumerate() {
                let s = Rc::clone(shared);
                self.listeners.add(&element, "click", move |event: Event| {
                    let input = NavInput::IndicatorClick { group, index };
                    if let Some(out) = dispatch(&s, &input)
                        && out.prevent_default
                    {
                        event.prevent_default();
                    }
                })?;
            }
        }

        let scroll_sources: [(EventTarget, ScrollSource); 2] = [
            (window.clone().into(), ScrollSource::Window),
            (container.into(), ScrollSource::Container),
        ];
        for (target, source) in scroll_sources {
            let s = Rc::clone(shared);
            self.listeners.add(&target, "scroll", move |_| {
                dispatch(&s, &NavInput::Scroll { source });
            })?;
            if config.paging.lock_release == LockRelease::ScrollEnd {
                let s = Rc::clone(shared);
                self.listeners.add(&target, "scrollend", move |_| {
                    dispatch(&s, &NavInput::ScrollEnd { source });
                })?;
            }
        }

        let s = Rc::clone(shared);
        self.listeners.add(&window, "resize", move |_| {
            dispatch(&s, &NavInput::Resize);
        })?;

        Ok(())
    }

    fn wire_strip(&mut self, strip: Rc<ProjectStrip>) -> Result<(), FolioError> {
        for (index, button) in strip.buttons().to_vec().into_iter().enumerate() {
            let st = Rc::clone(&strip);
            self.listeners.add(&button, "click", move |_| {
                if let Err(err) = st.select_button(index) {
                    tracing::warn!(error = %err, index, "project strip rebuild failed");
                }
            })?;
        }

        let outer = strip.outer().clone();
        for (kind, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let st = Rc::clone(&strip);
            self.listeners.add(&outer, kind, move |_| {
                if let Err(err) = st.set_play_state(PlayState::from_hover(hovered)) {
                    tracing::warn!(error = %err, "failed to set strip play state");
                }
            })?;
        }
        Ok(())
    }

    fn wire_tabs(&mut self, tabs: Rc<SkillTabs>) -> Result<(), FolioError> {
        for (index, tab) in tabs.tabs().to_vec().into_iter().enumerate() {
            let t = Rc::clone(&tabs);
            self.listeners.add(&tab, "click", move |_| t.activate(index))?;
        }
        Ok(())
    }
}

impl Default for FolioWeb {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_options(options: Option<JsValue>) -> Result<FolioConfig, FolioError> {
    let Some(options) = options.filter(|v| !v.is_undefined() && !v.is_null()) else {
        return Ok(FolioConfig::default());
    };
    let json = js_sys::JSON::stringify(&options)
        .map_err(crate::dom::host_error)?
        .as_string()
        .ok_or_else(|| FolioError::InvalidConfig("options are not JSON-serializable".to_string()))?;
    FolioConfig::from_json_str(&json)
}
