// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON dump of an idea forest.
//!
//! [`forest_json`] renders every tree in an [`IdeaStore`] as nested objects:
//!
//! ```json
//! [{ "id": 0, "title": "root", "ideas": [
//!     { "id": 1, "title": "child",
//!       "attr": { "parentConnector": { "color": "red", "themeAutoColor": "red" } },
//!       "ideas": [] } ] }]
//! ```
//!
//! `attr` is omitted for ideas without an attribute container, so the dump
//! shows exactly which ideas have one.

use serde_json::{Map, Value, json};

use canopy_core::error::ContentError;
use canopy_core::idea::{AttrMap, AttrValue, IdeaId, IdeaStore};

/// Renders the whole forest, roots in store order.
pub fn forest_json(store: &IdeaStore) -> Result<Value, ContentError> {
    let trees = store
        .roots()
        .into_iter()
        .map(|root| idea_json(store, root))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::Array(trees))
}

/// Renders one idea and its descendants.
pub fn idea_json(store: &IdeaStore, id: IdeaId) -> Result<Value, ContentError> {
    let ideas = store
        .children(id)?
        .map(|child| idea_json(store, child))
        .collect::<Result<Vec<_>, _>>()?;

    let mut obj = Map::new();
    obj.insert("id".into(), json!(id.index()));
    obj.insert("title".into(), Value::String(store.title(id)?.into()));
    if let Some(attrs) = store.attributes(id)? {
        obj.insert("attr".into(), attrs_json(attrs));
    }
    obj.insert("ideas".into(), Value::Array(ideas));
    Ok(Value::Object(obj))
}

fn attrs_json(attrs: &AttrMap) -> Value {
    Value::Object(
        attrs
            .iter()
            .map(|(key, value)| (key.clone(), attr_value_json(value)))
            .collect(),
    )
}

fn attr_value_json(value: &AttrValue) -> Value {
    match value {
        AttrValue::Text(text) => json!(text),
        // Non-finite numbers become null.
        AttrValue::Number(n) => json!(n),
        AttrValue::Flag(flag) => json!(flag),
        AttrValue::Connector(c) => json!({
            "color": c.color.as_str(),
            "themeAutoColor": c.theme_auto_color.as_str()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_core::auto_color::AutoColorMaintainer;
    use canopy_core::idea::ParentRef;
    use canopy_core::theme::PaletteTheme;

    #[test]
    fn snapshot_shows_auto_colors() {
        let mut store = IdeaStore::new();
        let root = store.create_idea(ParentRef::Root, "root").unwrap();
        let theme = PaletteTheme::new(["red", "green"]);
        let mut maintainer = AutoColorMaintainer::new();
        let a = maintainer
            .add_sub_idea(&mut store, Some(&theme), root.into(), Some("a"))
            .unwrap();
        maintainer
            .add_sub_idea(&mut store, Some(&theme), a.into(), Some("a.1"))
            .unwrap();
        store.set_attribute(a, "note", AttrValue::Number(1.5)).unwrap();

        let snapshot = forest_json(&store).unwrap();
        assert_eq!(
            snapshot,
            json!([{
                "id": 0,
                "title": "root",
                "ideas": [{
                    "id": 1,
                    "title": "a",
                    "attr": {
                        "note": 1.5,
                        "parentConnector": { "color": "red", "themeAutoColor": "red" }
                    },
                    "ideas": [{ "id": 2, "title": "a.1", "ideas": [] }]
                }]
            }])
        );
    }

    #[test]
    fn snapshot_lists_every_root() {
        let mut store = IdeaStore::new();
        store.create_idea(ParentRef::Root, "one").unwrap();
        store.create_idea(ParentRef::Root, "two").unwrap();
        let snapshot = forest_json(&store).unwrap();
        let titles: Vec<_> = snapshot
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, ["one", "two"]);
    }

    #[test]
    fn stale_handle_is_an_error() {
        let mut store = IdeaStore::new();
        let gone = store.create_idea(ParentRef::Root, "gone").unwrap();
        store.remove_idea(gone).unwrap();
        assert_eq!(
            idea_json(&store, gone),
            Err(ContentError::UnknownIdea(gone))
        );
        assert_eq!(forest_json(&store), Ok(json!([])));
    }
}
