use crate::document::NodeId;
use crate::editor::Editor;
use crate::error::{EditorError, EditorResult};
use crate::renderers;
use crate::target::Target;
use quill_forms::{Form, PropertyId, PropertyType};
use std::collections::HashMap;
use std::rc::Rc;

/// Everything a renderer gets for one binding.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Element owning the binding; error state and visibility apply to it.
    pub host: NodeId,
    /// Freshly cloned template, already appended to `host`.
    pub fragment: NodeId,
    pub target: Target,
    pub property_type: PropertyType,
}

impl RenderContext {
    /// The edited property, for renderers that cannot edit option row labels.
    pub fn property_id(&self) -> EditorResult<&PropertyId> {
        match &self.target {
            Target::Property(id) => Ok(id),
            Target::RowLabel { .. } => Err(EditorError::UnsupportedTarget(self.property_type.clone())),
        }
    }

    pub fn part(&self, editor: &Editor, class: &str) -> EditorResult<NodeId> {
        editor
            .document()
            .find_by_class(self.fragment, class)
            .ok_or_else(|| self.missing(class))
    }

    pub fn part_by_tag(&self, editor: &Editor, tag: &str) -> EditorResult<NodeId> {
        editor
            .document()
            .find_by_tag(self.fragment, tag)
            .ok_or_else(|| self.missing(tag))
    }

    fn missing(&self, part: &str) -> EditorError {
        EditorError::MissingTemplatePart {
            template: self.property_type.as_str().to_string(),
            part: part.to_string(),
        }
    }
}

/// Builds and wires the editor UI for one property type.
pub trait Renderer {
    fn render(&self, editor: &mut Editor, cx: &RenderContext) -> EditorResult<()>;
}

impl<F> Renderer for F
where
    F: Fn(&mut Editor, &RenderContext) -> EditorResult<()>,
{
    fn render(&self, editor: &mut Editor, cx: &RenderContext) -> EditorResult<()> {
        self(editor, cx)
    }
}

#[derive(Clone, Default)]
pub struct RendererRegistry {
    renderers: HashMap<PropertyType, Rc<dyn Renderer>>,
}

impl RendererRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(PropertyType::Text, renderers::text::render);
        registry.register(PropertyType::RichText, renderers::rich_text::render);
        registry.register(PropertyType::Boolean, renderers::boolean::render);
        registry.register(PropertyType::NumericRange, renderers::range::render);
        registry.register(PropertyType::Enumeration, renderers::enumeration::render);
        registry.register(PropertyType::DateRange, renderers::date_range::render);
        registry.register(PropertyType::OptionList, renderers::option_list::render);
        registry.register(PropertyType::DependentOption, renderers::dependent_option::render);
        registry
    }

    /// Registers or replaces the renderer for `property_type`.
    pub fn register(&mut self, property_type: PropertyType, renderer: impl Renderer + 'static) {
        self.renderers.insert(property_type, Rc::new(renderer));
    }

    pub fn get(&self, property_type: &PropertyType) -> EditorResult<Rc<dyn Renderer>> {
        self.renderers
            .get(property_type)
            .cloned()
            .ok_or_else(|| EditorError::UnknownPropertyType(property_type.clone()))
    }

    pub fn contains(&self, property_type: &PropertyType) -> bool {
        self.renderers.contains_key(property_type)
    }

    /// Startup check: fails on the first type without a renderer.
    pub fn ensure_covers<'a>(&self, types: impl IntoIterator<Item = &'a PropertyType>) -> EditorResult<()> {
        for property_type in types {
            if !self.contains(property_type) {
                return Err(EditorError::UnknownPropertyType(property_type.clone()));
            }
        }
        Ok(())
    }

    /// Checks every property type used by any control of `form`.
    pub fn ensure_covers_form(&self, form: &Form) -> EditorResult<()> {
        self.ensure_covers(
            form.controls
                .iter()
                .flat_map(|control| control.properties.iter().map(|p| &p.property_type)),
        )
    }

    /// Runs the renderer registered for `cx.property_type`.
    pub fn render(&self, editor: &mut Editor, cx: &RenderContext) -> EditorResult<()> {
        let renderer = self.get(&cx.property_type)?;
        renderer.render(editor, cx)
    }
}
