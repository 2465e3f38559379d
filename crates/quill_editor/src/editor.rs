//! Editor session for one control: the authoritative property store, the view tree, the
//! notification bus and the services renderers call into.

use crate::binder::BindingRecord;
use crate::bus::{Notification, NotificationBus, NotificationHandler, NotificationKind, SubscriptionId};
use crate::config::EditorConfig;
use crate::document::{Document, NodeId};
use crate::error::{EditorError, EditorResult};
use crate::i18n::{LanguageService, StaticLanguages};
use crate::overlay::OptionsOverlay;
use crate::registry::RendererRegistry;
use crate::templates::{BuiltinTemplates, TemplateProvider};
use quill_forms::{Control, Property, PropertyId, PropertyValue, ValidationResult};
use std::collections::HashMap;
use std::rc::Rc;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomEventKind {
    /// Text typed into a field.
    Input,
    Click,
    /// Selection or checked state committed.
    Change,
}

pub type DomHandler = Rc<dyn Fn(&mut Editor, NodeId)>;

struct Listener {
    node: NodeId,
    kind: DomEventKind,
    handler: DomHandler,
}

pub struct Editor {
    control: Control,
    document: Document,
    bus: NotificationBus<Editor>,
    listeners: Vec<Listener>,
    registry: RendererRegistry,
    templates: Box<dyn TemplateProvider>,
    languages: Box<dyn LanguageService>,
    overlay: OptionsOverlay,
    config: EditorConfig,
    pub(crate) bindings: HashMap<NodeId, BindingRecord>,
    pub(crate) panel: Option<NodeId>,
}

impl Editor {
    pub fn new(control: Control) -> Self {
        Self::with_config(control, EditorConfig::default())
    }

    pub fn with_config(control: Control, config: EditorConfig) -> Self {
        Self {
            control,
            document: Document::new(),
            bus: NotificationBus::new(),
            listeners: Vec::new(),
            registry: RendererRegistry::with_builtins(),
            templates: Box::new(BuiltinTemplates),
            languages: Box::new(StaticLanguages::new(config.languages.clone())),
            overlay: OptionsOverlay::default(),
            config,
            bindings: HashMap::new(),
            panel: None,
        }
    }

    pub fn with_registry(mut self, registry: RendererRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_templates(mut self, templates: impl TemplateProvider + 'static) -> Self {
        self.templates = Box::new(templates);
        self
    }

    pub fn with_languages(mut self, languages: impl LanguageService + 'static) -> Self {
        self.languages = Box::new(languages);
        self
    }

    pub fn control(&self) -> &Control {
        &self.control
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn registry(&self) -> &RendererRegistry {
        &self.registry
    }

    pub fn languages(&self) -> &dyn LanguageService {
        self.languages.as_ref()
    }

    pub fn overlay(&self) -> &OptionsOverlay {
        &self.overlay
    }

    pub fn overlay_mut(&mut self) -> &mut OptionsOverlay {
        &mut self.overlay
    }

    pub fn property(&self, id: &PropertyId) -> Option<&Property> {
        self.control.properties.get(id)
    }

    pub fn property_mut(&mut self, id: &PropertyId) -> Option<&mut Property> {
        self.control.properties.get_mut(id)
    }

    pub fn require_property(&self, id: &PropertyId) -> EditorResult<&Property> {
        self.property(id)
            .ok_or_else(|| EditorError::MissingProperty(id.clone()))
    }

    pub(crate) fn require_property_mut(&mut self, id: &PropertyId) -> EditorResult<&mut Property> {
        self.property_mut(id)
            .ok_or_else(|| EditorError::MissingProperty(id.clone()))
    }

    pub fn clone_template(&mut self, name: &str) -> EditorResult<NodeId> {
        self.templates
            .clone_template(&mut self.document, name)
            .ok_or_else(|| EditorError::MissingTemplate(name.to_string()))
    }

    // ---------------------------------------------------------------------------
    // Notifications
    // ---------------------------------------------------------------------------

    pub fn subscribe(
        &mut self,
        owner: Option<NodeId>,
        kind: NotificationKind,
        handler: NotificationHandler<Editor>,
    ) -> SubscriptionId {
        self.bus.subscribe(owner, kind, handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    pub fn bus(&self) -> &NotificationBus<Editor> {
        &self.bus
    }

    /// Delivers synchronously, in subscription order.
    pub fn publish(&mut self, notification: Notification) {
        trace!(kind = notification.kind.as_str(), property = %notification.property, "publish");
        for handler in self.bus.handlers_for(notification.kind) {
            handler(self, &notification.property);
        }
    }

    pub fn notify_updated(&mut self, id: &PropertyId) {
        self.publish(Notification::properties_updated(id.clone()));
    }

    /// Replaces a value from outside the editors and announces it.
    pub fn set_value(&mut self, id: &PropertyId, value: PropertyValue) -> EditorResult<()> {
        self.require_property_mut(id)?.value = value;
        self.notify_updated(id);
        Ok(())
    }

    /// Stores results computed by the external validator and announces them.
    pub fn set_validations(&mut self, id: &PropertyId, validations: Vec<ValidationResult>) -> EditorResult<()> {
        self.require_property_mut(id)?.validations = validations;
        self.publish(Notification::validation_changed(id.clone()));
        Ok(())
    }

    // ---------------------------------------------------------------------------
    // DOM events
    // ---------------------------------------------------------------------------

    /// Attaches `handler` to `node`. It is dropped together with the node.
    pub fn on(&mut self, node: NodeId, kind: DomEventKind, handler: impl Fn(&mut Editor, NodeId) + 'static) {
        self.listeners.push(Listener {
            node,
            kind,
            handler: Rc::new(handler),
        });
    }

    pub fn listener_count(&self, node: NodeId) -> usize {
        self.listeners.iter().filter(|l| l.node == node).count()
    }

    /// Runs the `kind` handlers of `node`. Dead or disabled nodes receive nothing.
    pub fn dispatch(&mut self, node: NodeId, kind: DomEventKind) -> bool {
        if !self.document.is_alive(node) || self.document.is_disabled(node) {
            return false;
        }
        let handlers: Vec<DomHandler> = self
            .listeners
            .iter()
            .filter(|l| l.node == node && l.kind == kind)
            .map(|l| Rc::clone(&l.handler))
            .collect();
        for handler in handlers {
            handler(self, node);
        }
        true
    }

    /// Removes a subtree and everything attached to it.
    pub fn remove_node(&mut self, node: NodeId) {
        let freed = self.document.remove(node);
        self.release(&freed);
    }

    /// Removes the children of `node` and everything attached to them.
    pub fn empty_node(&mut self, node: NodeId) {
        let freed = self.document.empty(node);
        self.release(&freed);
    }

    pub fn replace_node(&mut self, old: NodeId, new: NodeId) {
        let freed = self.document.replace(old, new);
        self.release(&freed);
    }

    fn release(&mut self, freed: &[NodeId]) {
        if freed.is_empty() {
            return;
        }
        self.listeners.retain(|l| !freed.contains(&l.node));
        self.bus.release(freed);
        for node in freed {
            self.bindings.remove(node);
        }
        debug!(nodes = freed.len(), "released nodes");
    }

    // ---------------------------------------------------------------------------
    // User interaction
    // ---------------------------------------------------------------------------

    /// Replaces the text of a field and fires `Input`.
    pub fn type_text(&mut self, field: NodeId, text: impl Into<String>) -> bool {
        if !self.accepts_input(field) {
            return false;
        }
        self.document.set_value(field, text);
        self.dispatch(field, DomEventKind::Input)
    }

    /// Clicks a node. Checkboxes flip their checked state and also fire `Change`.
    pub fn click(&mut self, node: NodeId) -> bool {
        if !self.accepts_input(node) {
            return false;
        }
        let is_checkbox = self.document.node(node).is_some_and(|n| n.is_checkbox());
        if is_checkbox {
            let checked = self.document.is_checked(node);
            self.document.set_checked(node, !checked);
        }
        self.dispatch(node, DomEventKind::Click);
        if is_checkbox {
            self.dispatch(node, DomEventKind::Change);
        }
        true
    }

    /// Chooses the option with `value` in a select and fires `Change`.
    pub fn select(&mut self, select: NodeId, value: &str) -> bool {
        if !self.accepts_input(select) {
            return false;
        }
        if !self.document.set_select_value(select, value) {
            return false;
        }
        self.dispatch(select, DomEventKind::Change)
    }

    /// Chooses a specific option node and fires `Change`.
    pub fn select_option(&mut self, select: NodeId, option: NodeId) -> bool {
        if !self.accepts_input(select) || self.document.parent(option) != Some(select) {
            return false;
        }
        self.document.set_selected_option(select, Some(option));
        self.dispatch(select, DomEventKind::Change)
    }

    fn accepts_input(&self, node: NodeId) -> bool {
        self.document.is_alive(node) && !self.document.is_disabled(node)
    }
}
