use crate::config::EditorSettings;
use crate::util::clock::{Clock, SystemClock};
use crate::widgets::{BuiltinWidgets, WidgetFactory};
use super::{FormEditor, FormHooks, NoHooks, Outcome};

impl FormEditor {
    pub fn new() -> Self {
        Self::with_settings(EditorSettings::default())
    }

    pub fn with_settings(settings: EditorSettings) -> Self {
        Self {
            fields: Vec::new(),
            buffers: Vec::new(),
            index_by_name: Default::default(),
            adapters: Vec::new(),
            focus_index: 0,
            expansion: None,
            editing: false,
            field_errors: Default::default(),
            form_errors: Vec::new(),
            last_keystroke: Vec::new(),
            outcome: Outcome::Pending,
            layout: settings.layout,
            settings,
            needs_full_repaint: true,
            cursor: None,
            clock: Box::new(SystemClock),
            factory: Box::new(BuiltinWidgets),
            hooks: Box::new(NoHooks),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replace the built-in modal widgets. Cached widgets are dropped.
    pub fn with_widget_factory(mut self, factory: impl WidgetFactory + 'static) -> Self {
        self.factory = Box::new(factory);
        self.adapters = (0..self.fields.len()).map(|_| None).collect();
        self
    }

    pub fn with_hooks(mut self, hooks: impl FormHooks + 'static) -> Self {
        self.hooks = Box::new(hooks);
        self
    }
}

impl Default for FormEditor {
    fn default() -> Self {
        Self::new()
    }
}
