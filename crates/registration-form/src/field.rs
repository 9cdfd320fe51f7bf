// File: src/field.rs
// Purpose: The fixed set of registration fields and their display metadata

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the thirteen registration fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    PhoneNumber,
    AlternatePhoneNumber,
    StreetAddress,
    City,
    State,
    Pincode,
    Dob,
    CompanyName,
    IdCardNumber,
    Password,
    ConfirmPassword,
}

/// HTML input type the renderer should use for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Date,
    Password,
}

impl Field {
    /// Every field, in the order the form lays them out
    pub const ALL: [Field; 13] = [
        Field::Name,
        Field::Email,
        Field::PhoneNumber,
        Field::AlternatePhoneNumber,
        Field::StreetAddress,
        Field::City,
        Field::State,
        Field::Pincode,
        Field::Dob,
        Field::CompanyName,
        Field::IdCardNumber,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Fields that must be non-blank at submit time
    pub const REQUIRED: [Field; 12] = [
        Field::Name,
        Field::Email,
        Field::PhoneNumber,
        Field::StreetAddress,
        Field::City,
        Field::State,
        Field::Pincode,
        Field::Dob,
        Field::CompanyName,
        Field::IdCardNumber,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Position in form order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Wire key used by the rendering layer
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::PhoneNumber => "phoneNumber",
            Field::AlternatePhoneNumber => "alternatePhoneNumber",
            Field::StreetAddress => "streetAddress",
            Field::City => "city",
            Field::State => "state",
            Field::Pincode => "pincode",
            Field::Dob => "dob",
            Field::CompanyName => "companyName",
            Field::IdCardNumber => "idCardNumber",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name*",
            Field::Email => "Email*",
            Field::PhoneNumber => "Phone Number*",
            Field::AlternatePhoneNumber => "Alternate Phone Number",
            Field::StreetAddress => "Street Address*",
            Field::City => "City*",
            Field::State => "State*",
            Field::Pincode => "Pincode*",
            Field::Dob => "Date of Birth*",
            Field::CompanyName => "Company Name*",
            Field::IdCardNumber => "ID Card Number*",
            Field::Password => "Password*",
            Field::ConfirmPassword => "Confirm Password*",
        }
    }

    pub fn input_kind(&self) -> InputKind {
        match self {
            Field::Email => InputKind::Email,
            Field::PhoneNumber | Field::AlternatePhoneNumber => InputKind::Tel,
            Field::Dob => InputKind::Date,
            Field::Password | Field::ConfirmPassword => InputKind::Password,
            _ => InputKind::Text,
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Field::AlternatePhoneNumber)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrips_through_from_str() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn test_index_matches_form_order() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = "nickname".parse::<Field>().unwrap_err();
        assert!(matches!(err, FormError::UnknownField(name) if name == "nickname"));

        // Keys are case-sensitive
        assert!("PhoneNumber".parse::<Field>().is_err());
    }

    #[test]
    fn test_required_list_excludes_only_alternate_phone() {
        assert_eq!(Field::REQUIRED.len(), Field::ALL.len() - 1);
        assert!(!Field::REQUIRED.contains(&Field::AlternatePhoneNumber));
        for field in Field::ALL {
            assert_eq!(field.is_required(), Field::REQUIRED.contains(&field));
        }
    }

    #[test]
    fn test_serde_uses_wire_keys() {
        let json = serde_json::to_string(&Field::IdCardNumber).unwrap();
        assert_eq!(json, "\"idCardNumber\"");

        let field: Field = serde_json::from_str("\"confirmPassword\"").unwrap();
        assert_eq!(field, Field::ConfirmPassword);
    }

    #[test]
    fn test_input_kinds() {
        assert_eq!(Field::Email.input_kind(), InputKind::Email);
        assert_eq!(Field::AlternatePhoneNumber.input_kind(), InputKind::Tel);
        assert_eq!(Field::Dob.input_kind(), InputKind::Date);
        assert_eq!(Field::ConfirmPassword.input_kind(), InputKind::Password);
        assert_eq!(Field::City.input_kind(), InputKind::Text);
    }
}
