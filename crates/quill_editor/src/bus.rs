use crate::document::NodeId;
use quill_forms::PropertyId;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// A property's value changed.
    PropertiesUpdated,
    /// A property's validation results changed.
    ValidationChanged,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::PropertiesUpdated => "propertiesUpdated",
            NotificationKind::ValidationChanged => "validationChanged",
        }
    }
}

/// A notification names the property only; listeners re-read state from the control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub property: PropertyId,
}

impl Notification {
    pub fn properties_updated(property: impl Into<PropertyId>) -> Self {
        Self {
            kind: NotificationKind::PropertiesUpdated,
            property: property.into(),
        }
    }

    pub fn validation_changed(property: impl Into<PropertyId>) -> Self {
        Self {
            kind: NotificationKind::ValidationChanged,
            property: property.into(),
        }
    }
}

pub type NotificationHandler<C> = Rc<dyn Fn(&mut C, &PropertyId)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscription<C> {
    id: SubscriptionId,
    owner: Option<NodeId>,
    kind: NotificationKind,
    handler: NotificationHandler<C>,
}

/// Publish/subscribe channel scoped to one control.
///
/// The bus only stores subscriptions; delivery is driven by the owner of the context `C`,
/// which takes a snapshot with [`NotificationBus::handlers_for`] and calls each handler with
/// itself. Handlers may therefore publish or subscribe while being delivered to.
pub struct NotificationBus<C> {
    subscriptions: Vec<Subscription<C>>,
    next_id: u64,
}

impl<C> Default for NotificationBus<C> {
    fn default() -> Self {
        Self {
            subscriptions: Vec::new(),
            next_id: 0,
        }
    }
}

impl<C> NotificationBus<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler`. An owned subscription is dropped when its owner node is released.
    pub fn subscribe(
        &mut self,
        owner: Option<NodeId>,
        kind: NotificationKind,
        handler: NotificationHandler<C>,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription {
            id,
            owner,
            kind,
            handler,
        });
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        before != self.subscriptions.len()
    }

    /// Drops every subscription owned by one of `nodes`.
    pub fn release(&mut self, nodes: &[NodeId]) {
        if nodes.is_empty() {
            return;
        }
        self.subscriptions
            .retain(|s| s.owner.is_none_or(|owner| !nodes.contains(&owner)));
    }

    /// Handlers for `kind` in registration order.
    pub fn handlers_for(&self, kind: NotificationKind) -> Vec<NotificationHandler<C>> {
        self.subscriptions
            .iter()
            .filter(|s| s.kind == kind)
            .map(|s| Rc::clone(&s.handler))
            .collect()
    }

    pub fn subscriber_count(&self, kind: NotificationKind) -> usize {
        self.subscriptions.iter().filter(|s| s.kind == kind).count()
    }

    pub fn owned_by(&self, owner: NodeId) -> usize {
        self.subscriptions
            .iter()
            .filter(|s| s.owner == Some(owner))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Log(Vec<String>);

    fn deliver(bus: &NotificationBus<Log>, log: &mut Log, n: &Notification) {
        for handler in bus.handlers_for(n.kind) {
            handler(log, &n.property);
        }
    }

    #[test]
    fn delivers_in_registration_order() {
        let mut bus = NotificationBus::<Log>::new();
        bus.subscribe(None, NotificationKind::PropertiesUpdated, Rc::new(|log: &mut Log, id: &PropertyId| log.0.push(format!("a:{}", id))));
        bus.subscribe(None, NotificationKind::ValidationChanged, Rc::new(|log: &mut Log, _: &PropertyId| log.0.push("wrong".into())));
        bus.subscribe(None, NotificationKind::PropertiesUpdated, Rc::new(|log: &mut Log, id: &PropertyId| log.0.push(format!("b:{}", id))));

        let mut log = Log::default();
        deliver(&bus, &mut log, &Notification::properties_updated("range"));

        assert_eq!(log.0, vec!["a:range", "b:range"]);
    }

    #[test]
    fn release_drops_owned_subscriptions() {
        let mut doc = crate::document::Document::new();
        let owner = doc.create("div", "");
        let other = doc.create("div", "");
        let mut bus = NotificationBus::<Log>::new();
        bus.subscribe(Some(owner), NotificationKind::PropertiesUpdated, Rc::new(|_: &mut Log, _: &PropertyId| {}));
        bus.subscribe(Some(other), NotificationKind::PropertiesUpdated, Rc::new(|_: &mut Log, _: &PropertyId| {}));
        bus.subscribe(None, NotificationKind::PropertiesUpdated, Rc::new(|_: &mut Log, _: &PropertyId| {}));

        bus.release(&[owner]);

        assert_eq!(bus.owned_by(owner), 0);
        assert_eq!(bus.subscriber_count(NotificationKind::PropertiesUpdated), 2);
    }
}
