// File: src/state.rs
// Purpose: Typed records for field values and their inline errors

use crate::error::FieldError;
use crate::field::Field;
use serde::Serialize;

/// Current value of every field. All fields start empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub alternate_phone_number: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub dob: String,
    pub company_name: String,
    pub id_card_number: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::PhoneNumber => &self.phone_number,
            Field::AlternatePhoneNumber => &self.alternate_phone_number,
            Field::StreetAddress => &self.street_address,
            Field::City => &self.city,
            Field::State => &self.state,
            Field::Pincode => &self.pincode,
            Field::Dob => &self.dob,
            Field::CompanyName => &self.company_name,
            Field::IdCardNumber => &self.id_card_number,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        *self.slot_mut(field) = value;
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::PhoneNumber => &mut self.phone_number,
            Field::AlternatePhoneNumber => &mut self.alternate_phone_number,
            Field::StreetAddress => &mut self.street_address,
            Field::City => &mut self.city,
            Field::State => &mut self.state,
            Field::Pincode => &mut self.pincode,
            Field::Dob => &mut self.dob,
            Field::CompanyName => &mut self.company_name,
            Field::IdCardNumber => &mut self.id_card_number,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        }
    }

    /// Values in form order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}

/// Inline error per field; `None` means the field shows no message.
///
/// Every field always has an entry, so a renderer never has to guess
/// whether a key was validated yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorState {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub phone_number: Option<FieldError>,
    pub alternate_phone_number: Option<FieldError>,
    pub street_address: Option<FieldError>,
    pub city: Option<FieldError>,
    pub state: Option<FieldError>,
    pub pincode: Option<FieldError>,
    pub dob: Option<FieldError>,
    pub company_name: Option<FieldError>,
    pub id_card_number: Option<FieldError>,
    pub password: Option<FieldError>,
    pub confirm_password: Option<FieldError>,
}

impl ErrorState {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::PhoneNumber => self.phone_number,
            Field::AlternatePhoneNumber => self.alternate_phone_number,
            Field::StreetAddress => self.street_address,
            Field::City => self.city,
            Field::State => self.state,
            Field::Pincode => self.pincode,
            Field::Dob => self.dob,
            Field::CompanyName => self.company_name,
            Field::IdCardNumber => self.id_card_number,
            Field::Password => self.password,
            Field::ConfirmPassword => self.confirm_password,
        }
    }

    /// Message text for a field, or "" when the field is clear
    pub fn message(&self, field: Field) -> &'static str {
        self.get(field).map(|err| err.message()).unwrap_or("")
    }

    pub fn set(&mut self, field: Field, error: Option<FieldError>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::PhoneNumber => &mut self.phone_number,
            Field::AlternatePhoneNumber => &mut self.alternate_phone_number,
            Field::StreetAddress => &mut self.street_address,
            Field::City => &mut self.city,
            Field::State => &mut self.state,
            Field::Pincode => &mut self.pincode,
            Field::Dob => &mut self.dob,
            Field::CompanyName => &mut self.company_name,
            Field::IdCardNumber => &mut self.id_card_number,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = error;
    }

    /// True when no field carries a message
    pub fn is_clear(&self) -> bool {
        self.iter().all(|(_, err)| err.is_none())
    }

    /// Overlay every error present in `other`; fields clear in `other` keep their entry
    pub fn merge(&mut self, other: &ErrorState) {
        for (field, err) in other.iter() {
            if err.is_some() {
                self.set(field, err);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, Option<FieldError>)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}
