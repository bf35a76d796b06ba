use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;

use blacktooth_atlas::TextureAtlas;
use blacktooth_geom::ScreenPoint;
use blacktooth_model::{Campaign, ModelError, Room, RoomId};
use blacktooth_render::{HintColours, RenderOptions, render_room};
use blacktooth_scene::Node;
use hashbrown::HashMap;

/// Headless room viewer: keeps the composed node tree of the current room and
/// swaps rooms when a click lands on a portal.
pub struct Shell {
    campaign: Campaign,
    atlas: TextureAtlas,
    options: RenderOptions,
    requested: Rc<RefCell<Option<RoomId>>>,
    current: RoomId,
    scene: Node,
    visits: HashMap<RoomId, u32>,
}

impl Shell {
    pub fn new(
        campaign: Campaign,
        atlas: TextureAtlas,
        hint_colours: HintColours,
        start: Option<RoomId>,
    ) -> Result<Self, Box<dyn Error>> {
        let requested = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&requested);
        let options = RenderOptions::new(Rc::new(move |id: &RoomId| {
            *sink.borrow_mut() = Some(id.clone());
        }))
        .with_hint_colours(hint_colours);
        let start = match start {
            Some(id) => campaign.room(&id)?.id.clone(),
            None => campaign.start()?.id.clone(),
        };
        let scene = render_room(campaign.room(&start)?, &atlas, &options)?;
        let mut visits = HashMap::new();
        visits.insert(start.clone(), 1);
        log::info!("entered {}", start);
        Ok(Self {
            campaign,
            atlas,
            options,
            requested,
            current: start,
            scene,
            visits,
        })
    }

    pub fn current(&self) -> &RoomId {
        &self.current
    }

    pub fn room(&self) -> Result<&Room, ModelError> {
        self.campaign.room(&self.current)
    }

    pub fn scene(&self) -> &Node {
        &self.scene
    }

    pub fn visits(&self, id: &RoomId) -> u32 {
        self.visits.get(id).copied().unwrap_or(0)
    }

    /// Clicks the current scene. Returns the room entered, if a portal fired.
    pub fn click(&mut self, p: ScreenPoint) -> Result<Option<RoomId>, Box<dyn Error>> {
        if !self.scene.click(p) {
            return Ok(None);
        }
        let Some(target) = self.requested.borrow_mut().take() else {
            return Ok(None);
        };
        self.enter(target.clone())?;
        Ok(Some(target))
    }

    pub fn enter(&mut self, id: RoomId) -> Result<(), Box<dyn Error>> {
        let room = self.campaign.room(&id)?;
        self.scene = render_room(room, &self.atlas, &self.options)?;
        log::info!("{} -> {}", self.current, id);
        *self.visits.entry(id.clone()).or_insert(0) += 1;
        self.current = id;
        Ok(())
    }
}
