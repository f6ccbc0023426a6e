// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Node/module mutation helpers used by `apply_ops`.
/// Keeps `ops::mod` focused on public op types and orchestration.
fn apply_node_op(
    tables: &mut RawTables,
    op: &NodeOp,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    match op {
        NodeOp::Add { record } => {
            let addr = record.addr;
            if tables.nodes.contains_key(&addr) {
                return Err(ApplyError::NodeExists { addr });
            }
            if let Some(module) = &record.module {
                require_module(tables, module)?;
            }
            tables.nodes.insert(addr, record.clone());
            delta.record_added(EntityRef::Node(addr));
            Ok(())
        }
        NodeOp::Rename { addr, name } => {
            node_mut(tables, *addr)?.name = name.clone();
            delta.record_updated(EntityRef::Node(*addr));
            Ok(())
        }
        NodeOp::ReassignModule { addr, module } => {
            let module = module.as_deref().map(str::trim).filter(|m| !m.is_empty());
            if let Some(module) = module {
                require_module(tables, module)?;
            }
            node_mut(tables, *addr)?.module = module.map(str::to_owned);
            delta.record_updated(EntityRef::Node(*addr));
            Ok(())
        }
        NodeOp::RelocateLine { addr, line_num } => {
            let node = node_mut(tables, *addr)?;
            let Some(location) = node.location.as_mut() else {
                return Err(ApplyError::NoLocation { addr: *addr });
            };
            location.line_num = *line_num;
            delta.record_updated(EntityRef::Node(*addr));
            Ok(())
        }
        NodeOp::SetType { addr, node_type } => {
            node_mut(tables, *addr)?.node_type = *node_type;
            delta.record_updated(EntityRef::Node(*addr));
            Ok(())
        }
        NodeOp::Delete { addr } => {
            if tables.nodes.remove(addr).is_none() {
                return Err(ApplyError::NodeNotFound { addr: *addr });
            }
            delta.record_removed(EntityRef::Node(*addr));
            Ok(())
        }
    }
}

fn apply_module_op(
    tables: &mut RawTables,
    op: &ModuleOp,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    match op {
        ModuleOp::Upsert { name, parent } => {
            let name = name.trim();
            if name.is_empty() {
                return Err(ApplyError::Module(ModuleTreeError::EmptyName));
            }
            let parent = parent.as_deref().map(str::trim).filter(|p| !p.is_empty());
            if let Some(parent) = parent {
                if parent == name {
                    return Err(ApplyError::Module(ModuleTreeError::SelfParent {
                        module: name.to_owned(),
                    }));
                }
                if !tables.modules.contains_key(parent) {
                    return Err(ApplyError::Module(ModuleTreeError::UnknownParent {
                        module: name.to_owned(),
                        parent: parent.to_owned(),
                    }));
                }
            }

            let parent = parent.map(str::to_owned);
            match tables.modules.get_mut(name) {
                Some(existing) => {
                    existing.parent = parent;
                    delta.record_updated(EntityRef::Module(name.to_owned()));
                }
                None => {
                    tables.modules.insert(name.to_owned(), Module::new(name, parent));
                    delta.record_added(EntityRef::Module(name.to_owned()));
                }
            }
            Ok(())
        }
        ModuleOp::ToggleCollapsed { name } => {
            let Some(module) = tables.modules.get_mut(name) else {
                return Err(ApplyError::ModuleNotFound { name: name.clone() });
            };
            module.toggle_collapsed();
            delta.record_updated(EntityRef::Module(name.clone()));
            Ok(())
        }
    }
}

fn node_mut(tables: &mut RawTables, addr: Address) -> Result<&mut NodeRecord, ApplyError> {
    tables.nodes.get_mut(&addr).ok_or(ApplyError::NodeNotFound { addr })
}

fn require_module(tables: &RawTables, name: &str) -> Result<(), ApplyError> {
    if tables.modules.contains_key(name) {
        Ok(())
    } else {
        Err(ApplyError::ModuleNotFound { name: name.to_owned() })
    }
}
