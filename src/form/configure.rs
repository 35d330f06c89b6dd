use std::collections::HashMap;

use crate::error::{FormError, Result};
use crate::log_info;
use super::{FieldDescriptor, FormEditor, Outcome, TextBuffer};

impl FormEditor {
    /// Load a new descriptor list. All session state is reset, including every
    /// cached modal widget. A malformed descriptor aborts without touching the
    /// current session.
    pub fn configure(&mut self, fields: Vec<FieldDescriptor>) -> Result<()> {
        let mut fields = fields;
        let mut index_by_name = HashMap::with_capacity(fields.len());

        for (index, field) in fields.iter_mut().enumerate() {
            field.check(index)?;
            if index_by_name.insert(field.name.clone(), index).is_some() {
                return Err(FormError::DuplicateName(field.name.clone()));
            }
        }

        self.buffers = fields
            .iter()
            .map(|f| TextBuffer::new(&f.value.as_display_string()))
            .collect();
        self.adapters = (0..fields.len()).map(|_| None).collect();
        self.last_keystroke = vec![None; fields.len()];
        self.index_by_name = index_by_name;
        self.fields = fields;

        self.focus_index = 0;
        self.expansion = None;
        self.editing = false;
        self.field_errors.clear();
        self.form_errors.clear();
        self.outcome = Outcome::Pending;
        self.needs_full_repaint = true;
        self.cursor = None;

        log_info!("Form configured with {} fields", self.fields.len());
        Ok(())
    }
}
