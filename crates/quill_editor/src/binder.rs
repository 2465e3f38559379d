//! Property binder: owns the lifecycle of one property editor instance.
//!
//! A binding lives in a host element. Binding empties the host, clones the template for the
//! target's type, runs the renderer and installs the validation and visibility reactions.
//! Listeners and subscriptions are owned by the cloned fragment, so anything that removes
//! the fragment (rebinding, an ancestor being removed) detaches them too.

use crate::bus::NotificationKind;
use crate::document::NodeId;
use crate::editor::Editor;
use crate::error::{EditorError, EditorResult};
use crate::registry::RenderContext;
use crate::target::Target;
use quill_forms::{PropertyId, PropertyType};
use std::rc::Rc;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    Unbound,
    Rendering,
    Bound { visible: bool },
    Rebinding,
    Destroyed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Rendering,
    Bound,
    Rebinding,
}

#[derive(Debug, Clone)]
pub(crate) struct BindingRecord {
    target: Target,
    display_name: Option<String>,
    phase: Phase,
}

impl Editor {
    /// Binds `target` into `host`, replacing whatever the host showed before.
    ///
    /// On error the host is left empty and the error is logged; other bindings are unaffected.
    pub fn bind(&mut self, host: NodeId, target: Target, display_name: Option<&str>) -> EditorResult<()> {
        self.bindings.insert(
            host,
            BindingRecord {
                target: target.clone(),
                display_name: display_name.map(str::to_string),
                phase: Phase::Rendering,
            },
        );

        match self.render_binding(host, &target, display_name) {
            Ok(()) => {
                if let Some(record) = self.bindings.get_mut(&host) {
                    record.phase = Phase::Bound;
                }
                debug!(property = %target.owner(), ?host, "bound property editor");
                Ok(())
            }
            Err(err) => {
                warn!(property = %target.owner(), error = %err, "property editor failed to render");
                self.empty_node(host);
                self.bindings.remove(&host);
                Err(err)
            }
        }
    }

    /// Binds a top-level property, named after its id.
    pub fn bind_property(&mut self, host: NodeId, id: &PropertyId) -> EditorResult<()> {
        self.bind(host, Target::Property(id.clone()), Some(id.as_str()))
    }

    /// Replaces `host` with a freshly bound host for the same target. Returns the new host.
    pub fn rebind(&mut self, host: NodeId) -> EditorResult<NodeId> {
        let alive = self.document().is_alive(host);
        let record = match self.bindings.get_mut(&host) {
            Some(record) if record.phase == Phase::Bound && alive => {
                record.phase = Phase::Rebinding;
                record.clone()
            }
            _ => return Err(EditorError::NotBound(host)),
        };

        let (tag, classes) = self
            .document()
            .node(host)
            .map(|n| (n.tag.clone(), n.classes.join(" ")))
            .unwrap_or_else(|| ("li".to_string(), String::new()));
        let fresh = self.document_mut().create(&tag, &classes);
        let result = self.bind(fresh, record.target.clone(), record.display_name.as_deref());
        self.replace_node(host, fresh);
        debug!(old = ?host, new = ?fresh, "rebound property editor");
        result.map(|()| fresh)
    }

    /// Records of removed hosts are dropped on release, so any dead host reads as destroyed.
    pub fn binding_state(&self, host: NodeId) -> BindingState {
        if !self.document().is_alive(host) {
            return BindingState::Destroyed;
        }
        let Some(record) = self.bindings.get(&host) else {
            return BindingState::Unbound;
        };
        match record.phase {
            Phase::Rendering => BindingState::Rendering,
            Phase::Rebinding => BindingState::Rebinding,
            Phase::Bound => BindingState::Bound {
                visible: !self.document().is_hidden(host),
            },
        }
    }

    pub fn binding_target(&self, host: NodeId) -> Option<&Target> {
        self.bindings.get(&host).map(|r| &r.target)
    }

    fn render_binding(&mut self, host: NodeId, target: &Target, display_name: Option<&str>) -> EditorResult<()> {
        let property_type = self.target_type(target)?;
        self.check_siblings(target, &property_type)?;
        let renderer = self.registry().get(&property_type)?;

        self.empty_node(host);
        let fragment = self.clone_template(property_type.as_str())?;
        if let Some(name) = display_name {
            let doc = self.document_mut();
            doc.set_attr(fragment, "data-name", name);
            doc.add_class(fragment, &format!("property-{}", name));
        }
        self.document_mut().append_child(host, fragment);

        let cx = RenderContext {
            host,
            fragment,
            target: target.clone(),
            property_type,
        };
        renderer.render(self, &cx)?;

        if let Target::Property(id) = target {
            self.install_validation_display(host, fragment, id);
            self.install_visibility(host, fragment, id);
        }
        Ok(())
    }

    /// Configuration errors surface before anything is rendered.
    fn check_siblings(&self, target: &Target, property_type: &PropertyType) -> EditorResult<()> {
        let Target::Property(id) = target else {
            return Ok(());
        };
        let property = self.require_property(id)?;
        let mut siblings: Vec<&PropertyId> = property.bind_display_if.iter().collect();
        if *property_type == PropertyType::DependentOption {
            let bound = property
                .bind_to
                .as_ref()
                .ok_or_else(|| EditorError::MissingBinding(id.clone()))?;
            siblings.push(bound);
        }
        for sibling in siblings {
            if self.property(sibling).is_none() {
                return Err(EditorError::MissingSibling {
                    property: id.clone(),
                    sibling: sibling.clone(),
                });
            }
        }
        Ok(())
    }

    fn install_validation_display(&mut self, host: NodeId, owner: NodeId, id: &PropertyId) {
        let watched = id.clone();
        self.subscribe(
            Some(owner),
            NotificationKind::ValidationChanged,
            Rc::new(move |editor: &mut Editor, changed: &PropertyId| {
                if *changed == watched {
                    editor.show_validation(host, &watched);
                }
            }),
        );
        self.show_validation(host, id);
    }

    /// Toggles the host's error state and rebuilds its inline error list.
    fn show_validation(&mut self, host: NodeId, id: &PropertyId) {
        let messages: Vec<String> = self
            .property(id)
            .map(|p| p.errors().map(|v| v.message.clone()).collect())
            .unwrap_or_default();

        self.document_mut().toggle_class(host, "error", !messages.is_empty());
        let stale: Vec<NodeId> = self
            .document()
            .children(host)
            .into_iter()
            .filter(|child| self.document().has_class(*child, "errorList"))
            .collect();
        for list in stale {
            self.remove_node(list);
        }

        if messages.is_empty() {
            return;
        }
        let doc = self.document_mut();
        let list = doc.append_new(host, "ul", "errorList");
        for message in messages {
            let item = doc.append_new(list, "li", "");
            doc.set_text(item, message);
        }
    }

    fn install_visibility(&mut self, host: NodeId, owner: NodeId, id: &PropertyId) {
        let Some(sibling) = self.property(id).and_then(|p| p.bind_display_if.clone()) else {
            return;
        };
        let watched = sibling.clone();
        self.subscribe(
            Some(owner),
            NotificationKind::PropertiesUpdated,
            Rc::new(move |editor: &mut Editor, changed: &PropertyId| {
                if *changed == watched {
                    editor.apply_visibility(host, &watched);
                }
            }),
        );
        self.apply_visibility(host, &sibling);
    }

    /// Only a strictly `false` sibling hides the host.
    fn apply_visibility(&mut self, host: NodeId, sibling: &PropertyId) {
        let hidden = self
            .property(sibling)
            .is_some_and(|p| p.value.is_strictly_false());
        self.document_mut().set_hidden(host, hidden);
    }
}
