// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Roster editing workflow tests.
//!
//! These tests drive edits through the application core and check the timeline that
//! results, the way a user editing people and settings would see it.

use rotacal_core::{
    AnchorState, Config, MAX_PEOPLE, PersonPatch, Rota, RosterError, TimelineStart, encode,
    is_off,
};

use crate::common::{PersonBuilder, date, roster};

fn ephemeral(people: Vec<rotacal_core::Person>, timeline_start: TimelineStart) -> Rota {
    let config = Config {
        state_path: None,
        timeline_start,
    };
    Rota::ephemeral(config, &encode(&roster(people)))
}

#[tokio::test]
async fn editing_add_then_patch_person() {
    // Arrange
    let mut rota = ephemeral(vec![PersonBuilder::new("ann").build()], TimelineStart::Today);
    let patch = PersonPatch {
        name: Some("  Bob  ".to_string()),
        weeks_on: Some(40),
        weeks_off: Some(-3),
        anchor_date: Some(date(2024, 2, 5)),
        anchor_state: Some(AnchorState::Work),
        ..Default::default()
    };

    // Act
    let id = rota
        .edit(|r, today| {
            let id = r.add_person(today)?.id.clone();
            r.update_person(&id, &patch)?;
            Ok(id)
        })
        .await
        .unwrap();

    // Assert
    let bob = rota.roster().person(&id).unwrap();
    assert_eq!(bob.name, "Bob");
    assert_eq!((bob.weeks_on, bob.weeks_off), (26, 1));
    assert_eq!(bob.anchor_date, date(2024, 2, 5));
    assert_eq!(bob.anchor_state, AnchorState::Work);
    assert_eq!(rota.roster().people.len(), 2);
}

#[tokio::test]
async fn editing_roster_is_capped() {
    // Arrange
    let mut rota = ephemeral(vec![PersonBuilder::new("ann").build()], TimelineStart::Today);

    // Act
    for _ in 1..MAX_PEOPLE {
        rota.edit(|r, today| r.add_person(today).map(|_| ()))
            .await
            .unwrap();
    }
    let overflow = rota
        .edit(|r, today| r.add_person(today).map(|_| ()))
        .await;

    // Assert
    assert_eq!(rota.roster().people.len(), MAX_PEOPLE);
    let err = overflow.unwrap_err();
    assert_eq!(err.to_string(), RosterError::TooManyPeople.to_string());
}

#[tokio::test]
async fn editing_remove_last_person_leaves_a_default_one() {
    // Arrange
    let mut rota = ephemeral(vec![PersonBuilder::new("ann").build()], TimelineStart::Today);

    // Act
    let removed = rota
        .edit(|r, today| Ok(r.remove_person("ann", today)))
        .await
        .unwrap();

    // Assert
    assert_eq!(removed.map(|p| p.id), Some("ann".to_string()));
    let people = &rota.roster().people;
    assert_eq!(people.len(), 1);
    assert_ne!(people[0].id, "ann");
    assert_eq!(people[0].name, "Friend A");
    assert_eq!(people[0].anchor_date, rota.today());
}

#[tokio::test]
async fn editing_min_off_follows_roster_size() {
    // Arrange
    let people = vec![
        PersonBuilder::new("a").build(),
        PersonBuilder::new("b").build(),
        PersonBuilder::new("c").build(),
    ];
    let mut rota = ephemeral(people, TimelineStart::Today);

    // Act
    rota.edit(|r, _| {
        r.set_min_off(Some(99));
        Ok(())
    })
    .await
    .unwrap();
    assert_eq!(rota.roster().min_off, Some(3));
    rota.edit(|r, today| Ok(r.remove_person("c", today)))
        .await
        .unwrap();

    // Assert
    assert_eq!(rota.roster().min_off, Some(2));
}

#[tokio::test]
async fn editing_timeline_reflects_people() {
    // Arrange
    let people = vec![
        PersonBuilder::new("ann")
            .name("Ann")
            .weeks(1, 1)
            .anchor(date(2024, 1, 1), AnchorState::Off)
            .build(),
        PersonBuilder::new("bob")
            .name("Bob")
            .weeks(1, 1)
            .anchor(date(2024, 1, 1), AnchorState::Work)
            .build(),
    ];
    let rota = ephemeral(people, TimelineStart::Today);

    // Act
    let days = rota.timeline();

    // Assert
    assert_eq!(days.first().map(|d| d.date), Some(rota.today()));
    for day in &days {
        assert_eq!(day.on_count + day.off_count, 2);
        assert_eq!(day.on_count, day.working.len());
        assert_eq!(day.off_count, day.off.len());
        // opposite phases, exactly one of them is always off
        assert_eq!(day.off_count, 1);
        assert!(!day.all_free());
        for member in &day.off {
            let person = rota.roster().person(&member.id).unwrap();
            assert!(is_off(person, day.date));
        }
    }
}

#[tokio::test]
async fn editing_timeline_can_start_at_earliest_anchor() {
    // Arrange
    let people = vec![
        PersonBuilder::new("ann")
            .anchor(date(2020, 3, 15), AnchorState::Off)
            .build(),
    ];
    let rota = ephemeral(people, TimelineStart::EarliestAnchor);

    // Act
    let days = rota.timeline();

    // Assert
    assert_eq!(days.first().map(|d| d.date), Some(date(2020, 3, 15)));
    assert!(days[0].all_free());
    assert_eq!(days[7].off_count, 0);
    assert_eq!(days[14].off_count, 1);
}
