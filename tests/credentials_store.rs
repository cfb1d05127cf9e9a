// tests/credentials_store.rs
use attendance_hub::model::Credentials;
use attendance_hub::store::CredentialStore;

#[test]
fn credentials_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = CredentialStore::open(dir.path()).unwrap();
        store.save(&Credentials::new("a@uni.edu", "first")).unwrap();
    }
    let store = CredentialStore::open(dir.path()).unwrap();
    assert_eq!(store.credentials(), Credentials::new("a@uni.edu", "first"));
}

#[test]
fn later_save_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = CredentialStore::open(dir.path()).unwrap();
    store.save(&Credentials::new("a@uni.edu", "first")).unwrap();
    store.save(&Credentials::new("b@uni.edu", "second")).unwrap();

    let reopened = CredentialStore::open(dir.path()).unwrap();
    assert_eq!(reopened.credentials(), Credentials::new("b@uni.edu", "second"));
}

#[test]
fn clear_forgets_login() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = CredentialStore::open(dir.path()).unwrap();
    store.save(&Credentials::new("a@uni.edu", "pw")).unwrap();
    store.clear().unwrap();
    assert!(CredentialStore::open(dir.path()).unwrap().credentials().is_empty());
}

#[test]
fn store_directory_is_created_on_first_save() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join(".store");
    let mut store = CredentialStore::open(&nested).unwrap();
    store.save(&Credentials::new("u", "p")).unwrap();
    assert!(nested.join("credentials.csv").is_file());
}
