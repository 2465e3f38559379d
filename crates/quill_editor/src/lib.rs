//! Headless property editor for form controls.
//!
//! An [`Editor`] owns one control's properties and a retained view tree. Property editors
//! are rendered into that tree by type through the [`RendererRegistry`], and talk to each
//! other only through the notification bus.

pub mod binder;
pub mod bus;
pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod i18n;
pub mod overlay;
pub mod panel;
pub mod registry;
pub mod renderers;
pub mod target;
pub mod templates;

pub use binder::BindingState;
pub use bus::{Notification, NotificationBus, NotificationHandler, NotificationKind, SubscriptionId};
pub use config::{ConfigError, ConfigResult, EditorConfig};
pub use document::{Document, Node, NodeId};
pub use editor::{DomEventKind, DomHandler, Editor};
pub use error::{EditorError, EditorResult};
pub use i18n::{Language, LanguageService, StaticLanguages};
pub use overlay::{CommitHandler, OptionsOverlay};
pub use registry::{RenderContext, Renderer, RendererRegistry};
pub use renderers::date_range::DATE_PICKER_ATTR;
pub use renderers::dependent_option::ROW_ATTR;
pub use target::Target;
pub use templates::{BuiltinTemplates, TemplateProvider};
