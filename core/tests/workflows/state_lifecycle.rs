// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! State file lifecycle workflow tests.
//!
//! These tests validate how a persistent instance reads, falls back from and writes the
//! encoded roster on disk.

use rotacal_core::{AnchorState, Config, DecodeError, Rota, Roster, encode};

use crate::common::{PersonBuilder, date, roster, setup_temp_state, test_config};

#[tokio::test]
async fn state_missing_file_yields_default_roster() {
    // Arrange
    let temp = setup_temp_state().unwrap();

    // Act
    let rota = Rota::new(test_config(&temp.state_path)).await.unwrap();

    // Assert
    assert!(rota.is_persistent());
    assert_eq!(rota.roster(), &Roster::default_with(rota.today()));
    assert!(!temp.state_path.exists(), "reading must not create the file");
}

#[tokio::test]
async fn state_existing_file_is_loaded() {
    // Arrange
    let temp = setup_temp_state().unwrap();
    let saved = roster(vec![
        PersonBuilder::new("ann")
            .name("Ann")
            .weeks(2, 1)
            .anchor(date(2024, 1, 1), AnchorState::Work)
            .build(),
    ]);
    temp.write(&format!("{}\n", encode(&saved))).await.unwrap();

    // Act
    let rota = Rota::new(test_config(&temp.state_path)).await.unwrap();

    // Assert
    assert_eq!(rota.roster(), &saved);
}

#[tokio::test]
async fn state_garbage_file_falls_back_to_default() {
    // Arrange
    let temp = setup_temp_state().unwrap();
    temp.write("v1:%%% definitely not a roster").await.unwrap();

    // Act
    let rota = Rota::new(test_config(&temp.state_path)).await.unwrap();

    // Assert
    assert_eq!(rota.roster(), &Roster::default_with(rota.today()));
    assert_eq!(
        temp.read().await.unwrap(),
        "v1:%%% definitely not a roster",
        "an unreadable file is left alone until the next edit"
    );
}

#[tokio::test]
async fn state_edits_survive_restart() {
    // Arrange
    let temp = setup_temp_state().unwrap();
    let mut rota = Rota::new(test_config(&temp.state_path)).await.unwrap();

    // Act
    rota.edit(|r, _| {
        r.set_months(12);
        r.set_min_off(Some(2));
        Ok(())
    })
    .await
    .unwrap();
    let reopened = Rota::new(test_config(&temp.state_path)).await.unwrap();

    // Assert
    assert_eq!(reopened.roster(), rota.roster());
    assert_eq!(reopened.roster().months, 12);
    assert_eq!(reopened.roster().min_off, Some(2));
    assert_eq!(temp.read().await.unwrap(), format!("{}\n", rota.state()));
}

#[tokio::test]
async fn state_save_creates_missing_directories() {
    // Arrange
    let temp = setup_temp_state().unwrap();
    let rota = Rota::new(test_config(&temp.state_path)).await.unwrap();
    assert!(!temp.state_path.parent().unwrap().exists());

    // Act
    rota.save().await.unwrap();

    // Assert
    assert!(temp.state_path.exists());
}

#[tokio::test]
async fn state_failed_edit_changes_nothing() {
    // Arrange
    let temp = setup_temp_state().unwrap();
    let mut rota = Rota::new(test_config(&temp.state_path)).await.unwrap();
    let before = rota.roster().clone();

    // Act
    let result = rota
        .edit(|r, _| {
            r.set_months(3);
            r.update_person("missing", &Default::default()).map(|_| ())
        })
        .await;

    // Assert
    assert!(result.is_err());
    assert_eq!(rota.roster(), &before);
    assert!(!temp.state_path.exists());
}

#[tokio::test]
async fn state_load_replaces_and_persists() {
    // Arrange
    let temp = setup_temp_state().unwrap();
    let mut rota = Rota::new(test_config(&temp.state_path)).await.unwrap();
    let shared = roster(vec![PersonBuilder::new("bob").weeks(3, 3).build()]);
    let link = format!("https://example.org/rota/#{}", encode(&shared));

    // Act
    let warning = rota.load(&link).await.unwrap();

    // Assert
    assert!(warning.is_none());
    assert_eq!(rota.roster(), &shared);
    let reopened = Rota::new(test_config(&temp.state_path)).await.unwrap();
    assert_eq!(reopened.roster(), &shared);
}

#[tokio::test]
async fn state_load_garbage_reports_and_resets() {
    // Arrange
    let temp = setup_temp_state().unwrap();
    let mut rota = Rota::new(test_config(&temp.state_path)).await.unwrap();
    rota.edit(|r, _| {
        r.set_months(20);
        Ok(())
    })
    .await
    .unwrap();

    // Act
    let warning = rota.load("#v1:!!!").await.unwrap();

    // Assert
    assert!(matches!(warning, Some(DecodeError::Base64(_))));
    assert_eq!(rota.roster(), &Roster::default_with(rota.today()));
    let reopened = Rota::new(test_config(&temp.state_path)).await.unwrap();
    assert_eq!(reopened.roster().months, 6);
}

#[tokio::test]
async fn state_ephemeral_instance_never_writes() {
    // Arrange
    let temp = setup_temp_state().unwrap();
    let shared = roster(vec![PersonBuilder::new("cat").build()]);
    let config = Config {
        state_path: Some(temp.state_path.clone()),
        ..Default::default()
    };
    let mut rota = Rota::ephemeral(config, &encode(&shared));

    // Act
    rota.edit(|r, today| r.add_person(today).map(|_| ()))
        .await
        .unwrap();

    // Assert
    assert!(!rota.is_persistent());
    assert_eq!(rota.roster().people.len(), 2);
    assert_eq!(rota.roster().people[0], shared.people[0]);
    assert!(!temp.state_path.exists());
}
