// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Share link workflow tests.
//!
//! These tests validate that a roster survives the trip through a link, including links
//! produced by older releases and links mangled along the way.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use rotacal_core::{
    AnchorState, Config, Rota, Roster, STATE_VERSION_PREFIX, decode_with, encode_with,
    sanitize_with,
};
use serde_json::json;
use url::Url;

use crate::common::{PersonBuilder, date, roster};

#[test]
fn share_link_roundtrips_between_instances() {
    // Arrange
    let shared = roster(vec![
        PersonBuilder::new("ann")
            .name("Ann")
            .color("#AABBCC")
            .weeks(3, 2)
            .anchor(date(2023, 11, 6), AnchorState::Work)
            .build(),
        PersonBuilder::new("bob").name("Bøb ✓").build(),
    ]);
    let sender = Rota::ephemeral(Config::default(), &encode_with(&shared, date(2024, 5, 1)));
    let base = Url::parse("https://example.org/rota/").unwrap();

    // Act
    let link = sender.share_url(&base);
    let receiver = Rota::ephemeral(Config::default(), link.as_str());

    // Assert
    assert!(link.fragment().unwrap().starts_with(STATE_VERSION_PREFIX));
    assert_eq!(receiver.roster(), sender.roster());
    assert_eq!(receiver.roster().people[0].color, "#aabbcc");
}

#[test]
fn share_link_tolerates_mangled_payloads() {
    // Arrange
    let today = date(2024, 5, 1);
    let shared = roster(vec![PersonBuilder::new("ann").weeks(2, 5).build()]);
    let json = serde_json::to_string(&shared).unwrap();

    // Act
    let variants = [
        format!("#{}", encode_with(&shared, today)),
        URL_SAFE_NO_PAD.encode(&json),
        STANDARD.encode(&json),
        format!("{STATE_VERSION_PREFIX}{}", STANDARD.encode(&json)),
    ];

    // Assert
    for text in variants {
        assert_eq!(decode_with(&text, today), shared, "text: {text}");
    }
}

#[test]
fn share_link_from_legacy_release_is_migrated() {
    // Arrange
    let today = date(2024, 5, 1);
    let legacy = json!({
        "months": "9",
        "minOff": 5,
        "people": [
            { "id": "x", "name": "Old", "workDays": 14, "offDays": 21,
              "anchorDate": "2022-02-30", "anchorState": "work" },
            { "id": "x", "name": "Dup", "workDays": 0, "offDays": 400 },
        ],
    });
    let text = format!("{STATE_VERSION_PREFIX}{}", URL_SAFE_NO_PAD.encode(legacy.to_string()));

    // Act
    let migrated = decode_with(&text, today);

    // Assert
    assert_eq!(migrated.months, 9);
    assert_eq!(migrated.min_off, Some(2));
    assert_eq!(migrated.people.len(), 2);

    let old = &migrated.people[0];
    assert_eq!(old.id, "x");
    assert_eq!((old.weeks_on, old.weeks_off), (2, 3));
    assert_eq!(old.anchor_date, today, "impossible dates fall back to today");
    assert_eq!(old.anchor_state, AnchorState::Work);

    let dup = &migrated.people[1];
    assert_ne!(dup.id, "x", "duplicate ids are regenerated");
    assert_eq!((dup.weeks_on, dup.weeks_off), (1, 26));
    assert_eq!(dup.anchor_state, AnchorState::Off);
}

#[test]
fn share_link_decoding_is_stable() {
    // Arrange
    let today = date(2024, 5, 1);
    let raw = json!({ "months": 0, "people": [ { "name": "  spaced  ", "weeksOn": 2.9 } ] });

    // Act
    let once = sanitize_with(&raw, today);
    let twice = decode_with(&encode_with(&once, today), today);

    // Assert
    assert_eq!(once, twice);
    assert_eq!(once.months, 1);
    assert_eq!(once.people[0].weeks_on, 2);
    assert_eq!(once, once.sanitized_with(today));
}

#[test]
fn share_link_garbage_yields_default_roster() {
    let today = date(2024, 5, 1);
    for text in ["v1:@@@", "https://example.org/#v1:e30", "v1:bnVsbA"] {
        assert_eq!(
            decode_with(text, today),
            Roster::default_with(today),
            "text: {text}"
        );
    }
}
