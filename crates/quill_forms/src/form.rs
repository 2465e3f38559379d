use crate::control::{Control, ControlKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub name: String,
    pub title: String,
    pub controls: Vec<Control>,
}

impl Form {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            title: name.clone(),
            name,
            controls: Vec::new(),
        }
    }

    pub fn add_control(&mut self, control: Control) {
        self.controls.push(control);
    }

    /// Adds a control of `kind` with the next free default name (`text1`, `text2`, ...).
    pub fn add_new_control(&mut self, kind: ControlKind) -> Uuid {
        let prefix = kind.default_name_prefix().to_string();
        let next = (1..)
            .map(|n| format!("{}{}", prefix, n))
            .find(|candidate| self.get_control_by_name(candidate).is_none())
            .unwrap_or_else(|| prefix.clone());
        let control = Control::new(kind, next);
        let id = control.id;
        self.controls.push(control);
        id
    }

    pub fn remove_control(&mut self, id: Uuid) {
        self.controls.retain(|c| c.id != id);
    }

    pub fn get_control(&self, id: Uuid) -> Option<&Control> {
        self.controls.iter().find(|c| c.id == id)
    }

    pub fn get_control_mut(&mut self, id: Uuid) -> Option<&mut Control> {
        self.controls.iter_mut().find(|c| c.id == id)
    }

    pub fn get_control_by_name(&self, name: &str) -> Option<&Control> {
        self.controls.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Writes an edited control back, replacing the one with the same id.
    pub fn replace_control(&mut self, control: Control) -> bool {
        match self.get_control_mut(control.id) {
            Some(existing) => {
                *existing = control;
                true
            }
            None => false,
        }
    }

    /// Sample form used when the shell starts without a file.
    pub fn sample() -> Self {
        let mut form = Form::new("household_survey");
        form.title = "Household Survey".to_string();
        form.add_new_control(ControlKind::InputText);
        form.add_new_control(ControlKind::InputNumeric);
        form.add_new_control(ControlKind::InputDate);
        form.add_new_control(ControlKind::InputSelectOne);
        form
    }
}
