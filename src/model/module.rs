// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Named node groupings and the parent tree they form.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const COLLAPSED_ATTRIBUTE: &str = "collapsed";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Module {
    pub name: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub module_attributes: BTreeMap<String, String>,
}

impl Module {
    pub fn new(name: impl Into<String>, parent: Option<String>) -> Self {
        Self { name: name.into(), parent, module_attributes: BTreeMap::new() }
    }

    /// Unset and `"false"` both read as expanded.
    pub fn is_collapsed(&self) -> bool {
        self.module_attributes.get(COLLAPSED_ATTRIBUTE).is_some_and(|v| v == "true")
    }

    pub fn set_collapsed(&mut self, collapsed: bool) {
        let value = if collapsed { "true" } else { "false" };
        self.module_attributes.insert(COLLAPSED_ATTRIBUTE.to_owned(), value.to_owned());
    }

    /// Flips the collapse flag and returns the written attribute value.
    pub fn toggle_collapsed(&mut self) -> &str {
        self.set_collapsed(!self.is_collapsed());
        self.module_attributes.get(COLLAPSED_ATTRIBUTE).map(String::as_str).unwrap_or("false")
    }
}

pub type ModuleMap = BTreeMap<String, Module>;

/// Parent chain of `name`, nearest first, excluding `name` itself.
///
/// Parents that name no module end the chain. A chain that revisits a module is reported as a
/// cycle instead of being walked forever.
pub fn ancestors<'a>(modules: &'a ModuleMap, name: &str) -> Result<Vec<&'a str>, ModuleTreeError> {
    let mut chain = Vec::new();
    let mut seen = BTreeSet::new();
    seen.insert(name);

    let mut current = modules.get(name).and_then(|m| m.parent.as_deref());
    while let Some(parent) = current {
        let Some((key, module)) = modules.get_key_value(parent) else {
            break;
        };
        if !seen.insert(key.as_str()) {
            return Err(ModuleTreeError::Cycle { module: name.to_owned(), via: key.clone() });
        }
        chain.push(key.as_str());
        current = module.parent.as_deref();
    }
    Ok(chain)
}

/// Verifies that no parent chain in `modules` loops.
pub fn check_acyclic(modules: &ModuleMap) -> Result<(), ModuleTreeError> {
    for name in modules.keys() {
        ancestors(modules, name)?;
    }
    Ok(())
}

/// Suggests existing module names for a partially typed one.
///
/// Prefix matches come first in name order, then the remaining names ranked by fuzzy similarity.
pub fn complete<'a>(modules: &'a ModuleMap, input: &str, limit: usize) -> Vec<&'a str> {
    let input = input.trim();
    let mut prefixed = modules
        .keys()
        .filter(|name| name.starts_with(input))
        .map(String::as_str)
        .collect::<Vec<_>>();
    if input.is_empty() || prefixed.len() >= limit {
        prefixed.truncate(limit);
        return prefixed;
    }

    let mut fuzzy = modules
        .keys()
        .filter(|name| !name.starts_with(input))
        .map(|name| (rapidfuzz::fuzz::ratio(input.chars(), name.chars()), name.as_str()))
        .filter(|(ratio, _)| *ratio >= FUZZY_THRESHOLD)
        .collect::<Vec<_>>();
    fuzzy.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));

    prefixed.extend(fuzzy.into_iter().map(|(_, name)| name));
    prefixed.truncate(limit);
    prefixed
}

const FUZZY_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleTreeError {
    EmptyName,
    SelfParent { module: String },
    UnknownParent { module: String, parent: String },
    Cycle { module: String, via: String },
    UnknownModule { module: String },
}

impl fmt::Display for ModuleTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => f.write_str("module name must not be empty"),
            Self::SelfParent { module } => write!(f, "module '{module}' cannot be its own parent"),
            Self::UnknownParent { module, parent } => {
                write!(f, "parent '{parent}' of module '{module}' does not exist")
            }
            Self::Cycle { module, via } => {
                write!(f, "parent chain of module '{module}' loops through '{via}'")
            }
            Self::UnknownModule { module } => write!(f, "module '{module}' does not exist"),
        }
    }
}

impl std::error::Error for ModuleTreeError {}
