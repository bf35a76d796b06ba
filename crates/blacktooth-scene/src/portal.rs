use std::fmt;
use std::rc::Rc;

use blacktooth_model::RoomId;

use super::node::Node;

/// Navigation callback supplied by whoever displays the rooms.
pub type Navigate = Rc<dyn Fn(&RoomId)>;

/// Marks a node as a clickable way into another room.
#[derive(Clone)]
pub struct Portal {
    pub target: RoomId,
    navigate: Navigate,
}

impl Portal {
    pub fn new(target: RoomId, navigate: Navigate) -> Self {
        Self { target, navigate }
    }

    /// Forwards the target id to the callback, once per call.
    pub fn activate(&self) {
        log::debug!("portal -> {}", self.target);
        (self.navigate)(&self.target);
    }
}

impl fmt::Debug for Portal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Portal")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// Turns every node into a portal to `target`. Nodes already pointing somewhere
/// else are retargeted.
pub fn register_portal(target: &RoomId, navigate: &Navigate, nodes: &mut [Node]) {
    for node in nodes.iter_mut() {
        if let Some(old) = &node.portal {
            if old.target != *target {
                log::trace!("{} retargeted {} -> {}", node.label, old.target, target);
            }
        }
        node.portal = Some(Portal::new(target.clone(), Rc::clone(navigate)));
    }
}
