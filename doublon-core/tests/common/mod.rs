// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared test helpers.

#![allow(dead_code)]

pub mod strategies;

use doublon_core::ContactRecord;

/// Builds a record with just a name.
pub fn record(id: &str, first: &str, last: &str) -> ContactRecord {
    ContactRecord::new(id, first, last)
}

/// Builds a record with name and email.
pub fn record_with_email(id: &str, first: &str, last: &str, email: &str) -> ContactRecord {
    ContactRecord::new(id, first, last).with_email(email)
}
