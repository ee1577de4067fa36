//! Choice-list resolution for `list` properties, including cascading lists
//! whose options depend on an earlier answer.

use serde::Serialize;
use serde_json::Value;

use crate::form::ParamMap;
use crate::schema::{value_text, ChoiceItem, PropertyDef, Schema};

/// Display-ready option handed to the prompt executor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Choice {
    pub value: Value,
    /// Label plus description and link lines.
    pub name: String,
    /// Label shown after selection.
    pub short: String,
}

/// Resolve the selectable items for `key`.
///
/// Only one level of cascading is supported: the dependency itself is read
/// through its own `list`, never through another dependency.
pub fn resolve_choices<'a>(key: &str, schema: &'a Schema, params: &ParamMap) -> &'a [ChoiceItem] {
    let Some(def) = schema.property(key) else {
        return &[];
    };

    let Some(dependence) = def.dependence.as_deref().filter(|d| !d.is_empty()) else {
        return &def.list;
    };

    if def.dep_level <= 0 {
        return &[];
    }

    let Some(dep_def) = schema.property(dependence) else {
        return &[];
    };
    let Some(dep_value) = dependency_value(dependence, dep_def, params) else {
        return &[];
    };

    dep_def
        .list
        .iter()
        .find(|item| &item.value == dep_value)
        .and_then(|item| {
            def.reference
                .as_deref()
                .and_then(|reference| item.sub_list.get(reference))
        })
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// The dependency's answer, or the first item of its list when it has not
/// been answered yet.
pub fn dependency_value<'a>(
    dependence: &str,
    dep_def: &'a PropertyDef,
    params: &'a ParamMap,
) -> Option<&'a Value> {
    match params.get(dependence) {
        Some(value) if !value.is_null() => Some(value),
        _ => dep_def.list.first().map(|item| &item.value),
    }
}

pub fn display_choices(items: &[ChoiceItem]) -> Vec<Choice> {
    items.iter().map(display_choice).collect()
}

pub fn display_choice(item: &ChoiceItem) -> Choice {
    let mut name = item.name.clone();

    if let Some(desc) = &item.desc {
        name.push_str("\n\n    ");
        name.push_str(desc);
    }

    if let Some(url) = &item.url {
        push_link(&mut name, url, None);
    } else if !item.imgs.is_empty() {
        for img in &item.imgs {
            push_link(&mut name, &img.src, img.alt.as_deref());
        }
    } else if let Some(img) = &item.img {
        push_link(&mut name, img, None);
    }

    Choice {
        value: item.value.clone(),
        name,
        short: value_text(&item.value),
    }
}

fn push_link(name: &mut String, link: &str, caption: Option<&str>) {
    name.push_str("\n\n    - ");
    name.push_str(link);
    if let Some(caption) = caption {
        name.push_str(" - ");
        name.push_str(caption);
    }
}
