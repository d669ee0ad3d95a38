//! Run state: an open, string-keyed mapping of JSON values.
//!
//! The engine never interprets state contents; node functions read the keys
//! they need and return a partial mapping that is merged back key-wise.

use serde_json::{Map, Value};

/// Shared mutable accumulator of a run: string keys, arbitrary JSON values.
pub type State = Map<String, Value>;

/// Partial update returned by a node function; merged into [`State`] by key.
pub type StatePatch = Map<String, Value>;

/// Merges `patch` into `state`: keys already present are overwritten, all
/// other keys are left untouched.
pub fn merge_patch(state: &mut State, patch: StatePatch) {
    for (key, value) in patch {
        state.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: serde_json::Value) -> State {
        value.as_object().expect("object literal").clone()
    }

    /// **Scenario**: A patch overwriting an existing key changes exactly that
    /// key; all other keys keep their values.
    #[test]
    fn merge_overwrites_only_patched_keys() {
        let mut state = map(json!({"a": 1, "b": "keep"}));
        merge_patch(&mut state, map(json!({"a": 2})));
        assert_eq!(state, map(json!({"a": 2, "b": "keep"})));
    }

    /// **Scenario**: A patch with new keys adds them without touching
    /// pre-existing entries.
    #[test]
    fn merge_adds_new_keys() {
        let mut state = map(json!({"a": 1}));
        merge_patch(&mut state, map(json!({"b": true, "c": [1, 2]})));
        assert_eq!(state, map(json!({"a": 1, "b": true, "c": [1, 2]})));
    }

    /// **Scenario**: An empty patch leaves the state unchanged.
    #[test]
    fn merge_empty_patch_is_noop() {
        let mut state = map(json!({"a": 1}));
        merge_patch(&mut state, State::new());
        assert_eq!(state, map(json!({"a": 1})));
    }
}
