// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies
//!
//! Reusable proptest strategies for property-based testing.

use doublon_core::ContactRecord;
use proptest::prelude::*;

/// Strategy for generating first/last names.
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,11}"
}

/// Strategy for generating email addresses.
pub fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{3,10}", "[a-z]{2,8}", "[a-z]{2,4}")
        .prop_map(|(user, domain, tld)| format!("{}@{}.{}", user, domain, tld))
}

/// Strategy for generating phone numbers in loose source formats.
pub fn phone_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "0[1-9][0-9]{8}",
        "\\+33[1-9][0-9]{8}",
        "0[1-9]( [0-9]{2}){4}",
    ]
}

/// Strategy for generating arbitrary free-text strings for distance tests.
pub fn text_strategy() -> impl Strategy<Value = String> {
    ".{0,40}"
}

/// Strategy for generating a full contact record with optional fields.
pub fn record_strategy(id: usize) -> impl Strategy<Value = ContactRecord> {
    (
        name_strategy(),
        name_strategy(),
        proptest::option::of(email_strategy()),
        proptest::option::of(phone_strategy()),
        proptest::option::of("[A-Z][a-z]{2,10}"),
    )
        .prop_map(move |(first, last, email, phone, company)| {
            let mut record = ContactRecord::new(&format!("rec-{}", id), &first, &last);
            if let Some(e) = email {
                record = record.with_email(&e);
            }
            if let Some(p) = phone {
                record = record.with_phone(&p);
            }
            if let Some(c) = company {
                record = record.with_company(&c);
            }
            record
        })
}

/// Strategy for generating a small record set with distinct IDs.
pub fn record_set_strategy(max: usize) -> impl Strategy<Value = Vec<ContactRecord>> {
    (0..=max).prop_flat_map(|n| (0..n).map(record_strategy).collect::<Vec<_>>())
}
