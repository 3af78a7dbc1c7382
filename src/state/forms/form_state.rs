//! Entry form state and focus handling

use super::field::{FieldId, FormField};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
}

/// The giveaway entry form: six fields plus the submit button row
#[derive(Debug, Clone)]
pub struct EntryForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub phone: FormField,
    pub email: FormField,
    pub air_fryer_cost: FormField,
    pub spidr_pin: FormField,
    /// Index of the focused row; `SUBMIT_ROW` is the submit button
    pub active_field_index: usize,
}

impl EntryForm {
    /// Focus index of the submit button row
    pub const SUBMIT_ROW: usize = FieldId::ALL.len();

    pub fn new() -> Self {
        Self {
            first_name: FormField::new(FieldId::FirstName),
            last_name: FormField::new(FieldId::LastName),
            phone: FormField::new(FieldId::Phone),
            email: FormField::new(FieldId::Email),
            air_fryer_cost: FormField::new(FieldId::AirFryerCost),
            spidr_pin: FormField::new(FieldId::SpidrPin),
            active_field_index: 0,
        }
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Phone => &self.phone,
            FieldId::Email => &self.email,
            FieldId::AirFryerCost => &self.air_fryer_cost,
            FieldId::SpidrPin => &self.spidr_pin,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::FirstName => &mut self.first_name,
            FieldId::LastName => &mut self.last_name,
            FieldId::Phone => &mut self.phone,
            FieldId::Email => &mut self.email,
            FieldId::AirFryerCost => &mut self.air_fryer_cost,
            FieldId::SpidrPin => &mut self.spidr_pin,
        }
    }

    /// Format, validate and store a new value for one field
    pub fn set_field(&mut self, id: FieldId, value: &str) {
        self.field_mut(id).set_value(value);
    }

    /// All fields in display order
    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        FieldId::ALL.into_iter().map(move |id| self.field(id))
    }

    pub fn all_valid(&self) -> bool {
        self.fields().all(FormField::is_valid)
    }

    /// The focused field, or `None` when the submit row is focused
    pub fn active_field_id(&self) -> Option<FieldId> {
        FieldId::from_index(self.active_field_index)
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_ROW
    }

    #[cfg(test)]
    pub fn focus(&mut self, id: FieldId) {
        self.active_field_index = id.index();
    }

    pub fn focus_submit(&mut self) {
        self.active_field_index = Self::SUBMIT_ROW;
    }

    /// Clear every value and status and focus the first field
    pub fn reset(&mut self) {
        for id in FieldId::ALL {
            self.field_mut(id).reset();
        }
        self.active_field_index = 0;
    }
}

impl Default for EntryForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for EntryForm {
    fn field_count(&self) -> usize {
        Self::SUBMIT_ROW + 1 // six fields, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let id = self.active_field_id()?;
        Some(self.field_mut(id))
    }
}
