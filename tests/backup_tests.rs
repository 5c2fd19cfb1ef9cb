use healthlog::core::backup::BackupLogic;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Fresh scratch directory under the system temp dir.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("{name}_healthlog_backups"));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn backups_belong_only_to_their_own_store() {
    let dir = scratch_dir("backup_scope");
    let short = dir.join("health");
    let long = dir.join("health.db");
    fs::write(&short, "short store").unwrap();
    fs::write(&long, "long store").unwrap();

    let short_backup = BackupLogic::create(&short).unwrap().expect("backup taken");
    let long_backup = BackupLogic::create(&long).unwrap().expect("backup taken");

    // look-alikes that are not backups of either store
    fs::write(dir.join("health.notes.backup"), "").unwrap();
    fs::write(dir.join("health.2021_0101.backup"), "").unwrap();

    assert_eq!(BackupLogic::list(&short).unwrap(), vec![short_backup]);
    assert_eq!(BackupLogic::list(&long).unwrap(), vec![long_backup.clone()]);

    assert_eq!(BackupLogic::delete_all(&short).unwrap(), 1);
    assert!(long_backup.exists());
    assert!(dir.join("health.notes.backup").exists());
}

#[test]
fn restore_puts_backup_content_back() {
    let dir = scratch_dir("backup_restore");
    let store = dir.join("health.db");
    fs::write(&store, "before").unwrap();

    let backup = BackupLogic::create(&store).unwrap().expect("backup taken");
    fs::write(&store, "after").unwrap();

    BackupLogic::restore(&store, &backup).unwrap();
    assert_eq!(fs::read_to_string(&store).unwrap(), "before");

    fs::remove_file(&backup).unwrap();
    assert!(BackupLogic::restore(&store, &backup).is_err());
    assert!(BackupLogic::create(&dir.join("absent.db")).unwrap().is_none());
}
