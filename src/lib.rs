pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod util;
pub mod widgets;

pub use app::App;
pub use config::{EditorSettings, FieldSpec, FormSpec};
pub use error::{FormError, Result};
pub use form::{
    EditorMode, FieldConstraints, FieldDescriptor, FieldKind, FieldValue, FormEditor, FormHooks, LayoutMode, NoHooks,
    Outcome,
};
pub use widgets::{FieldWidget, WidgetFactory, WidgetStatus};
