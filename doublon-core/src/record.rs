// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Record
//!
//! The immutable input type for duplicate detection. Records are owned by
//! the external store; the matching pipeline only reads them.

use serde::{Deserialize, Serialize};

/// A single CRM contact record.
///
/// The `id` is opaque and stable - it comes from the external store and is
/// never interpreted beyond equality. Optional fields that are absent simply
/// disable the corresponding scoring signal; they are never an error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Unique identifier from the external store.
    id: String,
    /// First name.
    first_name: String,
    /// Last name.
    last_name: String,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    /// Phone number, in whatever format the source system used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    /// Company name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    company: Option<String>,
    /// Role or job title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    /// Reference to a profile photo (URL or store handle).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    photo_url: Option<String>,
}

impl ContactRecord {
    /// Creates a record with the required fields only.
    pub fn new(id: &str, first_name: &str, last_name: &str) -> Self {
        ContactRecord {
            id: id.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: None,
            phone: None,
            company: None,
            role: None,
            photo_url: None,
        }
    }

    /// Sets the email address.
    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    /// Sets the phone number.
    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = Some(phone.to_string());
        self
    }

    /// Sets the company name.
    pub fn with_company(mut self, company: &str) -> Self {
        self.company = Some(company.to_string());
        self
    }

    /// Sets the role.
    pub fn with_role(mut self, role: &str) -> Self {
        self.role = Some(role.to_string());
        self
    }

    /// Sets the photo reference.
    pub fn with_photo_url(mut self, photo_url: &str) -> Self {
        self.photo_url = Some(photo_url.to_string());
        self
    }

    /// Returns the record's unique ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the email address, if present.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the phone number, if present.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Returns the company name, if present.
    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    /// Returns the role, if present.
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// Returns the photo reference, if present.
    pub fn photo_url(&self) -> Option<&str> {
        self.photo_url.as_deref()
    }

    /// Returns the full name as "first last".
    ///
    /// Callers normalize the result before distance computation.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
