//! Maquette interchange format.
//!
//! KDL-based format for museum floor plans. Pure data, no expressions -
//! what you see is what's there.
//!
//! # Document format
//!
//! ```kdl
//! plan version="0.1" name="Musée des Beaux-Arts" {
//!   level "1884e3c2-..." name="Rez-de-chaussée" elevation=0 {
//!     room "7d9f01aa-..." name="Hall" x=0 y=0 width=300 height=200
//!   }
//!   level "c0ffee00-..." name="Premier étage" elevation=1
//!   vlink "ab12cd34-..." kind="stairs" lower="1884e3c2-..." upper="c0ffee00-..." \
//!     x=250 y=20 width=30 height=40 label="Escalier A"
//! }
//! ```
//!
//! Levels nest their rooms; vertical links sit at the top level since they
//! span two floors. Full uuids are written as node arguments for round-trip
//! fidelity. Unknown nodes are skipped with a warning so newer files stay
//! loadable.

mod project;

pub use project::Project;

use floorplan::{FloorPlan, Level, LevelId, LinkId, LinkKind, Room, RoomId, VerticalLink};
use floorplan::{WorldPoint, WorldSize};
use kdl::{KdlDocument, KdlEntry, KdlNode};

pub const FORMAT_VERSION: &str = "0.1";

/// Error type for interchange operations.
#[derive(Debug)]
pub enum InterchangeError {
    Io(String),
    Parse(String),
    InvalidStructure(String),
    MissingField(String),
    InvalidValue(String),
}

impl std::fmt::Display for InterchangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "I/O error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::InvalidStructure(msg) => write!(f, "Invalid structure: {}", msg),
            Self::MissingField(msg) => write!(f, "Missing field: {}", msg),
            Self::InvalidValue(msg) => write!(f, "Invalid value: {}", msg),
        }
    }
}

impl std::error::Error for InterchangeError {}

/// A floor-plan document that can be serialized to/from KDL.
#[derive(Debug, Clone)]
pub struct Document {
    pub version: String,
    pub plan: FloorPlan,
}

impl Document {
    pub fn new(plan: FloorPlan) -> Self {
        Self {
            version: FORMAT_VERSION.to_string(),
            plan,
        }
    }

    /// Serialize the document to a KDL string.
    pub fn to_kdl(&self) -> String {
        let mut doc = KdlDocument::new();

        let mut plan_node = KdlNode::new("plan");
        plan_node.push(KdlEntry::new_prop("version", self.version.clone()));
        plan_node.push(KdlEntry::new_prop("name", self.plan.name.clone()));

        let children = plan_node.children_mut().get_or_insert_with(KdlDocument::new);
        for level in &self.plan.levels {
            children.nodes_mut().push(level_to_kdl(level, &self.plan));
        }
        for link in &self.plan.links {
            children.nodes_mut().push(link_to_kdl(link));
        }

        doc.nodes_mut().push(plan_node);
        doc.to_string()
    }

    /// Parse a document from a KDL string.
    pub fn from_kdl(input: &str) -> Result<Self, InterchangeError> {
        let doc: KdlDocument = input
            .parse()
            .map_err(|e| InterchangeError::Parse(format!("{}", e)))?;

        let plan_node = doc
            .get("plan")
            .ok_or_else(|| InterchangeError::InvalidStructure("Missing 'plan' node".into()))?;

        let version = plan_node
            .get("version")
            .and_then(|v| v.as_string())
            .map(|s| s.to_string())
            .unwrap_or_else(|| FORMAT_VERSION.to_string());

        let name = plan_node
            .get("name")
            .and_then(|v| v.as_string())
            .unwrap_or("Untitled")
            .to_string();

        let mut plan = FloorPlan::new(name);
        if let Some(children) = plan_node.children() {
            for node in children.nodes() {
                match node.name().value() {
                    "level" => parse_level(node, &mut plan)?,
                    "vlink" => {
                        let link = parse_link(node)?;
                        plan.links.push(link);
                    }
                    other => {
                        log::warn!("skipping unknown plan node '{}'", other);
                    }
                }
            }
        }

        Ok(Self { version, plan })
    }
}

fn level_to_kdl(level: &Level, plan: &FloorPlan) -> KdlNode {
    let mut node = KdlNode::new("level");
    node.push(KdlEntry::new(level.id.to_uuid_string()));
    node.push(KdlEntry::new_prop("name", level.name.clone()));
    node.push(KdlEntry::new_prop("elevation", level.elevation as i128));

    let mut has_children = false;
    let children = node.children_mut().get_or_insert_with(KdlDocument::new);
    for room in plan.rooms_on(level.id) {
        children.nodes_mut().push(room_to_kdl(room));
        has_children = true;
    }
    if !has_children {
        *node.children_mut() = None;
    }

    node
}

fn room_to_kdl(room: &Room) -> KdlNode {
    let mut node = KdlNode::new("room");
    node.push(KdlEntry::new(room.id.to_uuid_string()));
    node.push(KdlEntry::new_prop("name", room.name.clone()));
    node.push(KdlEntry::new_prop("x", room.position.x() as f64));
    node.push(KdlEntry::new_prop("y", room.position.y() as f64));
    node.push(KdlEntry::new_prop("width", room.size.width() as f64));
    node.push(KdlEntry::new_prop("height", room.size.height() as f64));
    node
}

fn link_to_kdl(link: &VerticalLink) -> KdlNode {
    let mut node = KdlNode::new("vlink");
    node.push(KdlEntry::new(link.id.to_uuid_string()));
    node.push(KdlEntry::new_prop("kind", kind_to_str(link.kind)));
    node.push(KdlEntry::new_prop("lower", link.lower.to_uuid_string()));
    node.push(KdlEntry::new_prop("upper", link.upper.to_uuid_string()));
    node.push(KdlEntry::new_prop("x", link.position.x() as f64));
    node.push(KdlEntry::new_prop("y", link.position.y() as f64));
    node.push(KdlEntry::new_prop("width", link.size.width() as f64));
    node.push(KdlEntry::new_prop("height", link.size.height() as f64));
    if let Some(label) = &link.label {
        node.push(KdlEntry::new_prop("label", label.clone()));
    }
    node
}

fn parse_level(node: &KdlNode, plan: &mut FloorPlan) -> Result<(), InterchangeError> {
    let id = parse_id_argument(node)
        .map(|s| LevelId::from_str(s))
        .unwrap_or_default();

    let name = node
        .get("name")
        .and_then(|v| v.as_string())
        .unwrap_or("Untitled level")
        .to_string();

    let elevation = node
        .get("elevation")
        .and_then(|v| v.as_integer())
        .unwrap_or(0) as i32;

    plan.levels.push(Level {
        id,
        name,
        elevation,
    });

    if let Some(children) = node.children() {
        for child in children.nodes() {
            match child.name().value() {
                "room" => {
                    let room = parse_room(child, id)?;
                    plan.rooms.push(room);
                }
                other => {
                    log::warn!("skipping unknown level node '{}'", other);
                }
            }
        }
    }

    Ok(())
}

fn parse_room(node: &KdlNode, level: LevelId) -> Result<Room, InterchangeError> {
    let id = parse_id_argument(node)
        .map(|s| RoomId::from_str(s))
        .unwrap_or_default();

    let name = node
        .get("name")
        .and_then(|v| v.as_string())
        .unwrap_or("Untitled room")
        .to_string();

    let x = get_f32_prop(node, "x").unwrap_or(0.0);
    let y = get_f32_prop(node, "y").unwrap_or(0.0);
    let width = get_f32_prop(node, "width").unwrap_or(100.0);
    let height = get_f32_prop(node, "height").unwrap_or(100.0);

    let mut room = Room::new(level, name, WorldPoint::new(x, y), WorldSize::new(width, height));
    room.id = id;
    Ok(room)
}

fn parse_link(node: &KdlNode) -> Result<VerticalLink, InterchangeError> {
    let id = parse_id_argument(node)
        .map(|s| LinkId::from_str(s))
        .unwrap_or_default();

    let kind = node
        .get("kind")
        .and_then(|v| v.as_string())
        .map(kind_from_str)
        .transpose()?
        .unwrap_or_default();

    let lower = node
        .get("lower")
        .and_then(|v| v.as_string())
        .map(LevelId::from_str)
        .ok_or_else(|| InterchangeError::MissingField("vlink 'lower' level".into()))?;

    let upper = node
        .get("upper")
        .and_then(|v| v.as_string())
        .map(LevelId::from_str)
        .ok_or_else(|| InterchangeError::MissingField("vlink 'upper' level".into()))?;

    let x = get_f32_prop(node, "x").unwrap_or(0.0);
    let y = get_f32_prop(node, "y").unwrap_or(0.0);
    let width = get_f32_prop(node, "width").unwrap_or(40.0);
    let height = get_f32_prop(node, "height").unwrap_or(40.0);

    let label = node
        .get("label")
        .and_then(|v| v.as_string())
        .map(|s| s.to_string());

    let mut link = VerticalLink::new(
        kind,
        lower,
        upper,
        WorldPoint::new(x, y),
        WorldSize::new(width, height),
    );
    link.id = id;
    link.label = label;
    Ok(link)
}

fn kind_to_str(kind: LinkKind) -> &'static str {
    match kind {
        LinkKind::Stairs => "stairs",
        LinkKind::Elevator => "elevator",
        LinkKind::Ramp => "ramp",
    }
}

fn kind_from_str(s: &str) -> Result<LinkKind, InterchangeError> {
    match s {
        "stairs" => Ok(LinkKind::Stairs),
        "elevator" => Ok(LinkKind::Elevator),
        "ramp" => Ok(LinkKind::Ramp),
        other => Err(InterchangeError::InvalidValue(format!(
            "Unknown link kind: {}",
            other
        ))),
    }
}

fn parse_id_argument(node: &KdlNode) -> Option<&str> {
    node.entries()
        .iter()
        .find(|e| e.name().is_none())
        .and_then(|e| e.value().as_string())
}

fn get_f32_prop(node: &KdlNode, name: &str) -> Option<f32> {
    // Hand-authored files write `x=50`, which KDL types as an integer.
    node.get(name)
        .and_then(|v| v.as_float().or_else(|| v.as_integer().map(|i| i as f64)))
        .map(|v| v as f32)
}
