use crate::document::NodeId;
use crate::editor::Editor;
use tracing::{info, warn};

impl Editor {
    /// Builds the property list for the control: one host per property, in property order.
    ///
    /// A property whose editor fails to bind is logged and left out; the others still render.
    pub fn render_panel(&mut self) -> NodeId {
        if let Some(old) = self.panel.take() {
            self.remove_node(old);
        }
        let list = self.document_mut().create("ul", "propertyList");
        let ids = self.control().properties.ids();
        let mut failed = 0;
        for id in &ids {
            let host = self.document_mut().append_new(list, "li", "");
            if let Err(err) = self.bind_property(host, id) {
                warn!(property = %id, error = %err, "skipping property editor");
                self.remove_node(host);
                failed += 1;
            }
        }
        info!(
            control = %self.control().name,
            bound = ids.len() - failed,
            failed,
            "rendered property panel"
        );
        self.panel = Some(list);
        list
    }

    pub fn panel(&self) -> Option<NodeId> {
        self.panel
    }

    /// Host of the editor bound to `id` in the current panel.
    pub fn panel_host(&self, id: &str) -> Option<NodeId> {
        let panel = self.panel?;
        self.document().children(panel).into_iter().find(|host| {
            self.binding_target(*host)
                .is_some_and(|target| target.owner().as_str() == id)
        })
    }
}
