//! Drives a `VirtualDom` with real events for component tests
//!
//! Listeners and `data-testid` values are read from the mutations the dom
//! emits, so events reach the same element ids a browser would target.

use dioxus::dioxus_core::{AttributeValue, ElementId, Mutation, Mutations};
use dioxus::prelude::*;
use dioxus_html::{PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};
use std::any::Any;
use std::collections::HashMap;
use std::rc::Rc;

pub struct EventDom {
    dom: VirtualDom,
    test_ids: HashMap<String, ElementId>,
    listeners: Vec<(String, ElementId)>,
}

impl EventDom {
    pub fn new(mut dom: VirtualDom) -> Self {
        dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));
        let mutations = dom.rebuild_to_vec();
        let mut event_dom = Self {
            dom,
            test_ids: HashMap::new(),
            listeners: Vec::new(),
        };
        event_dom.record(&mutations);
        event_dom
    }

    fn record(&mut self, mutations: &Mutations) {
        for edit in &mutations.edits {
            match edit {
                Mutation::SetAttribute { name, value: AttributeValue::Text(text), id, .. }
                    if name.to_string() == "data-testid" =>
                {
                    self.test_ids.insert(text.to_string(), *id);
                }
                Mutation::NewEventListener { name, id, .. } => {
                    self.listeners.push((name.to_string(), *id));
                }
                _ => {}
            }
        }
    }

    /// Element carrying `data-testid="{test_id}"`
    pub fn by_test_id(&self, test_id: &str) -> ElementId {
        match self.test_ids.get(test_id) {
            Some(id) => *id,
            None => panic!("no element with data-testid {test_id}"),
        }
    }

    /// Every element listening for `event`, in creation order
    pub fn listening(&self, event: &str) -> Vec<ElementId> {
        self.listeners
            .iter()
            .filter(|(name, _)| name == event)
            .map(|(_, id)| *id)
            .collect()
    }

    /// Fires a mouse event at `target` and renders the resulting updates
    pub fn fire(&mut self, event: &str, target: ElementId) {
        let data: Rc<dyn Any> = Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default()));
        let bubbles = !matches!(event, "mouseenter" | "mouseleave");
        self.dom.runtime().handle_event(event, Event::new(data, bubbles), target);
        self.dom.process_events();
        let mutations = self.dom.render_immediate_to_vec();
        self.record(&mutations);
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}
