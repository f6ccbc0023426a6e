// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::{Address, NodeId};
use super::module::Module;
use super::node::{NodeRecord, SourceLocation};
use super::tables::{MinedDiagram, RawTables};

pub(crate) const MAIN_C: &str = "date_viewer/main.c";
pub(crate) const PARSE_C: &str = "date_viewer/parse.c";

fn modules() -> super::module::ModuleMap {
    let mut root = Module::new("app", None);
    root.module_attributes.insert("color".to_owned(), "blue".to_owned());
    [root, Module::new("parse", Some("app".to_owned())), Module::new("io", Some("app".to_owned()))]
        .into_iter()
        .map(|m| (m.name.clone(), m))
        .collect()
}

/// Three instrumentation points of a small date-printing program.
pub(crate) fn raw_tables() -> RawTables {
    let mut tables = RawTables { modules: modules(), ..RawTables::default() };

    tables.nodes.insert(
        Address::new(0x1000),
        NodeRecord::new("main", Address::new(0x1000))
            .with_module("app")
            .with_location(SourceLocation::new(MAIN_C, 12)),
    );
    tables.nodes.insert(
        Address::new(0x1040),
        NodeRecord::new("parse_date", Address::new(0x1040))
            .with_module("parse")
            .with_location(SourceLocation::new(PARSE_C, 87)),
    );
    tables.nodes.insert(
        Address::new(0x10a0),
        NodeRecord::new("print_date", Address::new(0x10a0)).with_module("io"),
    );

    tables
}

/// Mined view of [`raw_tables`]: ids differ from addresses, and node 9 is a collapsed
/// placeholder for the `parse` module.
pub(crate) fn mined_diagram() -> MinedDiagram {
    let mut diagram = MinedDiagram { modules: modules(), ..MinedDiagram::default() };

    diagram.nodes.insert(
        NodeId::new(1),
        NodeRecord::new("main", Address::new(0x1000))
            .with_module("app")
            .with_location(SourceLocation::new(MAIN_C, 12)),
    );
    diagram.nodes.insert(
        NodeId::new(2),
        NodeRecord::new("parse_date", Address::new(0x1040))
            .with_module("parse")
            .with_location(SourceLocation::new(PARSE_C, 87)),
    );
    diagram.nodes.insert(
        NodeId::new(3),
        NodeRecord::new("print_date", Address::new(0x10a0)).with_module("io"),
    );
    diagram
        .nodes
        .insert(NodeId::new(9), NodeRecord::new("parse", Address::new(0)).with_module("parse"));

    diagram
}

/// `count` numbered lines (`line 1` .. `line <count>`), newline separated.
pub(crate) fn numbered_source(count: usize) -> String {
    (1..=count).map(|n| format!("line {n}")).collect::<Vec<_>>().join("\n")
}
