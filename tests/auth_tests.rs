use tempfile::TempDir;

use unigate::auth::{authenticate, departments, random_session_id, username_exists};
use unigate::models::{NewUser, Role};
use unigate::store::UserStore;

fn scratch_store() -> (UserStore, TempDir) {
    let dir = TempDir::new().expect("tempdir");
    let store = UserStore::new(dir.path());
    (store, dir)
}

#[test]
fn authenticate_matches_exact_credentials_only() {
    let (store, _dir) = scratch_store();

    let user = authenticate(&store, "admin", "admin123").expect("seeded admin");
    assert_eq!(user.id, 1);
    assert_eq!(user.role, Role::Admin);

    assert!(authenticate(&store, "admin", "wrong").is_none());
    assert!(authenticate(&store, "nobody", "admin123").is_none());
    assert!(authenticate(&store, "", "").is_none());
}

#[test]
fn authenticate_is_case_sensitive() {
    let (store, _dir) = scratch_store();
    assert!(authenticate(&store, "Admin", "admin123").is_none());
    assert!(authenticate(&store, "admin", "Admin123").is_none());
}

#[test]
fn username_exists_checks_the_whole_list() {
    let (store, _dir) = scratch_store();
    assert!(username_exists(&store, "admin"));
    assert!(!username_exists(&store, "bob"));

    store
        .add_user(NewUser {
            username: "bob".into(),
            password: "x".into(),
            role: Role::Employee,
            dept: Some("Civil".into()),
        })
        .unwrap();
    assert!(username_exists(&store, "bob"));
    assert!(!username_exists(&store, "Bob"));
}

#[test]
fn departments_are_the_nine_fixed_labels() {
    let labels = departments();
    assert_eq!(labels.len(), 9);
    assert_eq!(labels[0], "Computer Science");
    assert_eq!(labels[labels.len() - 1], "Other");
}

#[test]
fn session_ids_are_random_hex() {
    let a = random_session_id();
    let b = random_session_id();
    assert_eq!(a.len(), 32);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(a, b);
}

// The scenario from the functional outline: seed, log in as the admin,
// create an employee, reject the duplicate.
#[test]
fn end_to_end_admin_creates_employee() {
    let (store, _dir) = scratch_store();

    let users = store.list_users().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "admin");

    let admin = authenticate(&store, "admin", "admin123").expect("admin logs in");
    store.set_session(&admin).unwrap();

    assert!(!username_exists(&store, "bob"));
    let bob = store
        .add_user(NewUser {
            username: "bob".into(),
            password: "x".into(),
            role: Role::Employee,
            dept: Some("Civil".into()),
        })
        .unwrap();
    assert_eq!(bob.id, 2);
    assert_eq!(bob.role, Role::Employee);

    let users = store.list_users().unwrap();
    assert_eq!(users.len(), 2);

    // a second "bob" must be rejected by the pre-check callers run
    assert!(username_exists(&store, "bob"));
}
