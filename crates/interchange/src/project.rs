//! Maquette project package format.
//!
//! A `.maq` project is a folder containing:
//! - `manifest.kdl` - Project metadata
//! - `plan/floorplan.kdl` - The floor-plan document
//! - `assets/` - Photographs, audio guides, etc. (future)
//!
//! # Manifest format
//!
//! ```kdl
//! project version="0.1" {
//!   name "Musée des Beaux-Arts"
//!   created "2026-08-26T14:03:55+00:00"
//!   plan file="plan/floorplan.kdl"
//! }
//! ```

use crate::{Document, InterchangeError, FORMAT_VERSION};
use chrono::{DateTime, Utc};
use kdl::{KdlDocument, KdlEntry, KdlNode};
use std::path::Path;

const PLAN_FILE: &str = "plan/floorplan.kdl";

/// A Maquette project (folder-based package).
#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    pub version: String,
    pub created: DateTime<Utc>,
    pub plan: Document,
}

impl Project {
    /// Create a project from a floor-plan document.
    pub fn from_document(name: impl Into<String>, plan: Document) -> Self {
        Self {
            name: name.into(),
            version: FORMAT_VERSION.to_string(),
            created: Utc::now(),
            plan,
        }
    }

    /// Save the project to a .maq folder.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), InterchangeError> {
        let path = path.as_ref();

        // Ensure path ends with .maq
        let path = if path.extension().map(|e| e == "maq").unwrap_or(false) {
            path.to_path_buf()
        } else {
            path.with_extension("maq")
        };

        std::fs::create_dir_all(path.join("plan"))
            .map_err(|e| InterchangeError::Io(format!("Failed to create project folder: {}", e)))?;

        std::fs::write(path.join("manifest.kdl"), self.to_manifest_kdl())
            .map_err(|e| InterchangeError::Io(format!("Failed to write manifest: {}", e)))?;

        std::fs::write(path.join(PLAN_FILE), self.plan.to_kdl())
            .map_err(|e| InterchangeError::Io(format!("Failed to write floor plan: {}", e)))?;

        log::info!("saved project '{}' to {}", self.name, path.display());
        Ok(())
    }

    /// Load a project from a .maq folder.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InterchangeError> {
        let path = path.as_ref();

        let manifest_str = std::fs::read_to_string(path.join("manifest.kdl"))
            .map_err(|e| InterchangeError::Io(format!("Failed to read manifest: {}", e)))?;

        let manifest: KdlDocument = manifest_str
            .parse()
            .map_err(|e| InterchangeError::Parse(format!("Failed to parse manifest: {}", e)))?;

        let project_node = manifest.get("project").ok_or_else(|| {
            InterchangeError::InvalidStructure("Missing 'project' node in manifest".into())
        })?;

        let version = project_node
            .get("version")
            .and_then(|v| v.as_string())
            .map(|s| s.to_string())
            .unwrap_or_else(|| FORMAT_VERSION.to_string());

        let children = project_node.children();

        let name = children
            .and_then(|c| c.get("name"))
            .and_then(|n| n.entries().first())
            .and_then(|e| e.value().as_string())
            .unwrap_or("Untitled")
            .to_string();

        let created = children
            .and_then(|c| c.get("created"))
            .and_then(|n| n.entries().first())
            .and_then(|e| e.value().as_string())
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(Utc::now);

        let plan_file = children
            .and_then(|c| c.get("plan"))
            .and_then(|n| n.get("file"))
            .and_then(|v| v.as_string())
            .unwrap_or(PLAN_FILE);

        let plan_str = std::fs::read_to_string(path.join(plan_file))
            .map_err(|e| InterchangeError::Io(format!("Failed to read floor plan: {}", e)))?;
        let plan = Document::from_kdl(&plan_str)?;

        log::info!("loaded project '{}' from {}", name, path.display());
        Ok(Self {
            name,
            version,
            created,
            plan,
        })
    }

    fn to_manifest_kdl(&self) -> String {
        let mut doc = KdlDocument::new();

        let mut project_node = KdlNode::new("project");
        project_node.push(KdlEntry::new_prop("version", self.version.clone()));

        let children = project_node
            .children_mut()
            .get_or_insert_with(KdlDocument::new);

        let mut name_node = KdlNode::new("name");
        name_node.push(KdlEntry::new(self.name.clone()));
        children.nodes_mut().push(name_node);

        let mut created_node = KdlNode::new("created");
        created_node.push(KdlEntry::new(self.created.to_rfc3339()));
        children.nodes_mut().push(created_node);

        let mut plan_node = KdlNode::new("plan");
        plan_node.push(KdlEntry::new_prop("file", PLAN_FILE));
        children.nodes_mut().push(plan_node);

        doc.nodes_mut().push(project_node);
        doc.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorplan::{FloorPlan, Level, LinkKind, VerticalLink, WorldPoint, WorldSize};

    #[test]
    fn test_project_round_trip() {
        let temp_dir = std::env::temp_dir().join("maquette_test_project");
        let _ = std::fs::remove_dir_all(&temp_dir); // Clean up any previous test

        let mut plan = FloorPlan::new("Musée des Beaux-Arts");
        let ground = plan.add_level(Level::new("Rez-de-chaussée", 0));
        let first = plan.add_level(Level::new("Premier étage", 1));
        plan.add_link(
            VerticalLink::new(
                LinkKind::Elevator,
                ground,
                first,
                WorldPoint::new(10.0, 10.0),
                WorldSize::new(25.0, 25.0),
            )
            .with_label("Ascenseur"),
        );

        let project = Project::from_document("Beaux-Arts", Document::new(plan));

        let project_path = temp_dir.join("beaux_arts.maq");
        project.save(&project_path).expect("Failed to save");

        assert!(project_path.join("manifest.kdl").exists());
        assert!(project_path.join("plan/floorplan.kdl").exists());

        let loaded = Project::load(&project_path).expect("Failed to load");

        assert_eq!(loaded.name, "Beaux-Arts");
        assert_eq!(loaded.created.timestamp(), project.created.timestamp());
        assert_eq!(loaded.plan.plan.levels.len(), 2);
        assert_eq!(loaded.plan.plan.links.len(), 1);
        assert_eq!(
            loaded.plan.plan.links[0].label.as_deref(),
            Some("Ascenseur")
        );

        let _ = std::fs::remove_dir_all(&temp_dir);
    }

    #[test]
    fn test_load_missing_folder_fails() {
        let result = Project::load("/nonexistent/definitely_missing.maq");
        assert!(matches!(result, Err(InterchangeError::Io(_))));
    }
}
