use tempfile::TempDir;

use unigate::models::{NewUser, Role};
use unigate::store::UserStore;

fn scratch_store() -> (UserStore, TempDir) {
    let dir = TempDir::new().expect("tempdir");
    let store = UserStore::new(dir.path());
    (store, dir)
}

fn new_user(username: &str, role: Role, dept: Option<&str>) -> NewUser {
    NewUser {
        username: username.to_string(),
        password: "x".to_string(),
        role,
        dept: dept.map(str::to_string),
    }
}

#[test]
fn empty_store_seeds_exactly_one_admin() {
    let (store, _dir) = scratch_store();
    let users = store.list_users().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, 1);
    assert_eq!(users[0].username, "admin");
    assert_eq!(users[0].password, "admin123");
    assert_eq!(users[0].role, Role::Admin);
}

#[test]
fn seeding_is_idempotent() {
    let (store, _dir) = scratch_store();
    let first = store.list_users().unwrap();
    let second = store.list_users().unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(first[0].id, second[0].id);
    assert_eq!(first[0].created_at, second[0].created_at);
}

#[test]
fn add_user_assigns_next_id_and_timestamp() {
    let (store, _dir) = scratch_store();
    store.list_users().unwrap();

    let bob = store
        .add_user(new_user("bob", Role::Employee, Some("Civil")))
        .unwrap();
    assert_eq!(bob.id, 2);
    assert_eq!(bob.role, Role::Employee);
    assert_eq!(bob.dept.as_deref(), Some("Civil"));
    assert!(!bob.created_at.is_empty());

    let users = store.list_users().unwrap();
    assert_eq!(users.len(), 2);
}

#[test]
fn ids_keep_increasing_past_deleted_holes() {
    let (store, _dir) = scratch_store();
    store.list_users().unwrap();

    let bob = store.add_user(new_user("bob", Role::Student, None)).unwrap();
    let carol = store.add_user(new_user("carol", Role::Student, None)).unwrap();
    assert_eq!((bob.id, carol.id), (2, 3));

    store.delete_user(bob.id).unwrap();
    let dave = store.add_user(new_user("dave", Role::Student, None)).unwrap();
    // max surviving id is 3, so the next id is 4, not a reuse of 2
    assert_eq!(dave.id, 4);
}

#[test]
fn delete_user_removes_only_the_matching_record() {
    let (store, _dir) = scratch_store();
    store.list_users().unwrap();
    let bob = store.add_user(new_user("bob", Role::Student, Some("Civil"))).unwrap();
    let carol = store.add_user(new_user("carol", Role::Student, None)).unwrap();

    store.delete_user(bob.id).unwrap();

    let users = store.list_users().unwrap();
    assert!(users.iter().all(|u| u.id != bob.id));
    assert!(users.iter().any(|u| u.id == 1));
    assert!(users.iter().any(|u| u.id == carol.id));
}

#[test]
fn delete_unknown_id_is_a_noop() {
    let (store, _dir) = scratch_store();
    store.list_users().unwrap();
    store.delete_user(999).unwrap();
    assert_eq!(store.list_users().unwrap().len(), 1);
}

#[test]
fn session_slot_lifecycle() {
    let (store, _dir) = scratch_store();
    assert!(store.get_session().unwrap().is_none());

    let admin = &store.list_users().unwrap()[0];
    store.set_session(admin).unwrap();
    let snapshot = store.get_session().unwrap().expect("session set");
    assert_eq!(snapshot.id, admin.id);
    assert_eq!(snapshot.username, admin.username);

    store.clear_session().unwrap();
    assert!(store.get_session().unwrap().is_none());
    // clearing an absent slot stays a no-op
    store.clear_session().unwrap();
}

#[test]
fn session_snapshot_is_detached_from_the_list() {
    let (store, _dir) = scratch_store();
    let bob = store.add_user(new_user("bob", Role::Student, None)).unwrap();
    store.set_session(&bob).unwrap();

    store.delete_user(bob.id).unwrap();
    // the slot still holds the stale copy; revalidation is the caller's job
    let snapshot = store.get_session().unwrap().expect("stale snapshot");
    assert_eq!(snapshot.id, bob.id);
}

#[test]
fn data_survives_reopening_the_store() {
    let dir = TempDir::new().expect("tempdir");
    {
        let store = UserStore::new(dir.path());
        store.list_users().unwrap();
        store.add_user(new_user("bob", Role::Employee, Some("Civil"))).unwrap();
    }
    let reopened = UserStore::new(dir.path());
    let users = reopened.list_users().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().any(|u| u.username == "bob"));
}

#[test]
fn malformed_users_slot_surfaces_an_error() {
    let (store, dir) = scratch_store();
    std::fs::write(dir.path().join("app_users.json"), "{not json").unwrap();
    assert!(store.list_users().is_err());
}

#[test]
fn users_slot_keeps_the_original_field_layout() {
    let (store, dir) = scratch_store();
    store.add_user(new_user("bob", Role::Student, Some("Civil"))).unwrap();

    let text = std::fs::read_to_string(dir.path().join("app_users.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    let bob = &json.as_array().unwrap()[1];
    assert_eq!(bob["role"], "student");
    assert_eq!(bob["dept"], "Civil");
    assert!(bob["createdAt"].is_string());
}
