//! Proptest generators for property-based testing.

use proptest::prelude::*;

/// A username every sidecar backend accepts.
pub fn username() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_]{0,15}".prop_map(String::from)
}

/// A printable, single-line password.
pub fn password() -> impl Strategy<Value = String> {
    "[ -~]{0,32}".prop_map(String::from)
}

/// One step of a vault workload.
#[derive(Debug, Clone)]
pub enum Op {
    Insert { username: String, password: String },
    Delete { username: String, password: String },
}

/// A workload of inserts and deletes over a small set of users, so keys
/// collide and repeat.
pub fn ops(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    let user = prop::sample::select(vec!["alice", "bob", "carol", "erin", "frank", "user0"]);
    let pw = prop::sample::select(vec!["pw", "Cat123!", "hunter2", "Zz"]);
    let op = (any::<bool>(), user, pw).prop_map(|(insert, u, p)| {
        let (username, password) = (u.to_string(), p.to_string());
        if insert {
            Op::Insert { username, password }
        } else {
            Op::Delete { username, password }
        }
    });
    prop::collection::vec(op, 0..=max_len)
}
